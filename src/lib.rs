//! Capacity-constrained student/supervisor matching.
//!
//! Three signals are blended into one score per (student, supervisor) pair:
//! cosine similarity over externally fetched embeddings, an LLM judgment on
//! each supervisor's top candidates, and a deterministic subject/methodology
//! fit. The resulting matrix feeds a single-pass greedy solver that respects
//! supervisor capacities, honors hard exclusions, and places leftover
//! students with default-flagged supervisors.
//!
//! External capabilities enter as trait parameters ([`Embedder`], [`Judge`]),
//! so tests inject deterministic fakes instead of network clients.
//!
//! # Pipeline
//!
//! ```text
//! records -> embeddings (fan-out) -> similarity -> top-K per supervisor
//!         -> judgments (fan-out)  -> blend       -> ScoreMatrix
//!         -> greedy assignment    -> fallback    -> MatchOutcome
//! ```
//!
//! Recoverable faults (a failed embedding fetch, a failed or out-of-range
//! judgment) are substituted locally and logged; only a missing credential,
//! empty input, or mixed embedding dimensions abort a run.

pub mod assign;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod engine;
pub mod matrix;
pub mod model;
pub mod rerank;
pub mod scoring;
pub mod similarity;

pub use assign::{Assignment, AssignmentScore, RunStatistics, greedy_assign};
pub use config::{Config, ConfigError, MatchOptions};
pub use constants::{DEFAULT_EMBEDDING_MODEL, DEFAULT_RERANKER_MODEL, DEFAULT_TOP_K};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{Embedder, EmbeddingError, OpenAiEmbedder};
pub use engine::{EngineError, MatchOutcome, MatchingEngine, run_matching};
pub use matrix::{MatrixError, ScoreMatrix, ScoreMatrixBuilder};
pub use model::{Student, Supervisor};
#[cfg(any(test, feature = "mock"))]
pub use rerank::MockJudge;
pub use rerank::{Judge, OpenAiJudge, RerankError};
pub use scoring::rule_based_score;
pub use similarity::{SimilarityError, cosine_similarity, to_match_scale};
