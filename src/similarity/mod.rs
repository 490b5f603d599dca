//! Cosine similarity over embedding vectors.
//!
//! Raw cosine lands in [-1, 1]; [`to_match_scale`] shifts it onto the 0-10
//! match scale so orthogonal (unrelated) text maps to the neutral midpoint 5
//! rather than 0. Mixed dimensions mean two different embedding models were
//! combined and fail loudly; a missing embedding is a separate, recoverable
//! condition handled upstream by treating the pair's similarity as 0.

use thiserror::Error;


/// Errors from similarity computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimilarityError {
    /// Vectors of different lengths were compared.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length of the first vector.
        expected: usize,
        /// Length of the second vector.
        actual: usize,
    },
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude (degenerate embedding).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / (norm_a * norm_b))
    }
}

/// Rescales cosine similarity from [-1, 1] onto the 0-10 match scale.
pub fn to_match_scale(cosine: f32) -> f64 {
    (f64::from(cosine) + 1.0) * 5.0
}
