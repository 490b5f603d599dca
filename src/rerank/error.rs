use thiserror::Error;

/// Errors from judgment calls. All of these are recoverable: the caller
/// falls back to a neutral score instead of aborting the run.
#[derive(Debug, Error)]
pub enum RerankError {
    /// Transport or provider failure.
    #[error("judgment request failed: {message}")]
    RequestFailed {
        /// Error message.
        message: String,
    },

    /// The call did not complete within the configured timeout.
    #[error("judgment request timed out after {seconds}s")]
    Timeout {
        /// Timeout that elapsed.
        seconds: u64,
    },

    /// The model replied with no text.
    #[error("judgment reply was empty")]
    EmptyReply,

    /// The reply could not be parsed as a number.
    #[error("judgment reply is not a number: '{reply}'")]
    UnparseableReply {
        /// Raw reply text.
        reply: String,
    },

    /// The reply parsed but sits outside the 0-10 scale.
    #[error("judgment score {value} outside the 0-10 scale")]
    OutOfRange {
        /// Parsed value.
        value: f64,
    },
}
