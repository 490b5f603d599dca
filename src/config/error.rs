//! Configuration error types.

use thiserror::Error;

/// Errors from configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric override could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    IntParseError {
        /// Environment variable name.
        name: &'static str,
        /// Raw value.
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A setting that must be positive was zero.
    #[error("{name} must be greater than zero")]
    ZeroNotAllowed {
        /// Environment variable name.
        name: &'static str,
    },
}
