use thiserror::Error;

/// Errors from embedding retrieval.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Transport-level failure (connection, TLS, malformed body).
    #[error("embedding request failed: {message}")]
    RequestFailed {
        /// Error message.
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("embedding endpoint returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The call did not complete within the configured timeout.
    #[error("embedding request timed out after {seconds}s")]
    Timeout {
        /// Timeout that elapsed.
        seconds: u64,
    },

    /// The response parsed but carried no vectors.
    #[error("embedding response contained no vectors")]
    EmptyResponse,
}
