use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::Embedder;
use super::error::EmbeddingError;

/// In-memory embedder keyed by exact text.
///
/// Texts without a registered vector fail, which exercises the engine's
/// "embedding unavailable" path.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fail_all: bool,
    calls: AtomicUsize,
}

impl MockEmbedder {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Registers the vector returned for `text`.
    pub fn insert(&mut self, text: impl Into<String>, vector: Vec<f32>) {
        self.vectors.insert(text.into(), vector);
    }

    /// Number of `embed` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str, _model: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_all {
            return Err(EmbeddingError::RequestFailed {
                message: "mock embedder configured to fail".to_string(),
            });
        }

        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| EmbeddingError::RequestFailed {
                message: format!("no mock vector registered for text: {text}"),
            })
    }
}
