//! Matching engine entry point.
//!
//! [`MatchingEngine`] wires the injected capabilities through the full
//! pipeline: score matrix, greedy assignment, statistics. [`run_matching`]
//! is the convenience entry for callers holding a [`Config`]; it constructs
//! the OpenAI-backed capabilities after checking the credential.
//!
//! Fatal conditions (missing credential, empty input, mixed embedding
//! dimensions) abort before or during scoring. Everything else is
//! substituted locally: a completed run with fallback scores is
//! indistinguishable from a clean one except through logs.
//!
//! Cancellation is dropping the returned future; no partial state is
//! persisted, and a rerun starts from scratch.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::EngineError;
pub use types::MatchOutcome;

use tracing::info;

use crate::assign::{RunStatistics, greedy_assign};
use crate::config::{Config, MatchOptions};
use crate::embedding::{Embedder, OpenAiEmbedder};
use crate::matrix::ScoreMatrixBuilder;
use crate::model::{Student, Supervisor};
use crate::rerank::{Judge, OpenAiJudge};

/// Drives scoring and assignment over injected capabilities.
pub struct MatchingEngine<E, J> {
    embedder: E,
    judge: J,
    options: MatchOptions,
}

impl<E, J> std::fmt::Debug for MatchingEngine<E, J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchingEngine")
            .field("options", &self.options)
            .finish()
    }
}

impl<E: Embedder, J: Judge> MatchingEngine<E, J> {
    /// Creates an engine over the given capabilities.
    pub fn new(embedder: E, judge: J, options: MatchOptions) -> Self {
        Self {
            embedder,
            judge,
            options,
        }
    }

    /// Returns the configured options.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Runs matching end to end.
    ///
    /// Fails with [`EngineError::EmptyInput`] before any external call when
    /// either record list is empty.
    pub async fn run(
        &self,
        students: &[Student],
        supervisors: &[Supervisor],
    ) -> Result<MatchOutcome, EngineError> {
        if students.is_empty() {
            return Err(EngineError::EmptyInput { records: "student" });
        }
        if supervisors.is_empty() {
            return Err(EngineError::EmptyInput {
                records: "supervisor",
            });
        }

        info!(
            students = students.len(),
            supervisors = supervisors.len(),
            "Starting matching run"
        );

        let matrix = ScoreMatrixBuilder::new(&self.embedder, &self.judge, &self.options)
            .build(students, supervisors)
            .await?;

        let assignments = greedy_assign(students, supervisors, &matrix);
        let statistics = RunStatistics::from_assignments(students.len(), &assignments);

        info!(
            assigned = statistics.assigned,
            unassigned = statistics.unassigned,
            average = statistics.average_score,
            "Matching run complete"
        );

        Ok(MatchOutcome {
            assignments,
            statistics,
        })
    }
}

/// Runs matching with OpenAI-backed capabilities configured from `config`.
///
/// Fails fast with [`EngineError::MissingCredential`] before any scoring
/// work when no API credential is configured.
pub async fn run_matching(
    config: &Config,
    students: &[Student],
    supervisors: &[Supervisor],
) -> Result<MatchOutcome, EngineError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(EngineError::MissingCredential)?;

    let embedder = OpenAiEmbedder::with_api_base(api_key, &config.embedding_api_base)
        .with_timeout(config.request_timeout_secs);
    let judge = OpenAiJudge::new().with_timeout(config.request_timeout_secs);

    MatchingEngine::new(embedder, judge, config.match_options())
        .run(students, supervisors)
        .await
}
