use thiserror::Error;

use crate::matrix::MatrixError;

/// Fatal errors surfaced to the caller. Recoverable faults (embedding fetch,
/// judgment calls) never reach this enum.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No API credential configured; the caller must supply one.
    #[error("no API credential configured")]
    MissingCredential,

    /// One of the record lists was empty.
    #[error("empty input: no {records} records provided")]
    EmptyInput {
        /// Which list was empty.
        records: &'static str,
    },

    /// Matrix construction failed (mixed embedding dimensions).
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
