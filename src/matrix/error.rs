use thiserror::Error;

use crate::similarity::SimilarityError;

/// Errors that abort matrix construction.
///
/// Recoverable faults (embedding fetch, judgment calls) are substituted
/// in-place and never surface here.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Embeddings of different dimensionality were mixed: a configuration
    /// defect (two embedding models in one run), not a transient fault.
    #[error("score matrix construction failed: {0}")]
    Similarity(#[from] SimilarityError),
}
