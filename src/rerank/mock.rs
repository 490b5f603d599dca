use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::Judge;
use super::error::RerankError;

/// Judge returning canned scores.
///
/// Scores fall back to a fixed value unless a (student text, supervisor
/// text) pair has an override. `failing()` builds a judge whose every call
/// errors, which exercises the neutral-fallback path.
#[derive(Debug)]
pub struct MockJudge {
    score: f64,
    overrides: HashMap<(String, String), f64>,
    fail_all: bool,
    calls: AtomicUsize,
}

impl MockJudge {
    /// Creates a judge that always returns `score`.
    pub fn fixed(score: f64) -> Self {
        Self {
            score,
            overrides: HashMap::new(),
            fail_all: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a judge whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::fixed(0.0)
        }
    }

    /// Overrides the score for one specific pair.
    pub fn set_pair_score(
        &mut self,
        student_text: impl Into<String>,
        supervisor_text: impl Into<String>,
        score: f64,
    ) {
        self.overrides
            .insert((student_text.into(), supervisor_text.into()), score);
    }

    /// Number of `judge` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Judge for MockJudge {
    async fn judge(
        &self,
        student_text: &str,
        supervisor_text: &str,
        _model: &str,
    ) -> Result<f64, RerankError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_all {
            return Err(RerankError::RequestFailed {
                message: "mock judge configured to fail".to_string(),
            });
        }

        let key = (student_text.to_string(), supervisor_text.to_string());
        Ok(self.overrides.get(&key).copied().unwrap_or(self.score))
    }
}
