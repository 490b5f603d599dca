//! Cross-cutting scoring constants.
//!
//! The weights below define the blended score end to end. They are grouped by
//! the stage that consumes them; change a stage's weights together or the
//! documented score ranges drift.

/// Number of top-similarity candidates per supervisor sent to the judgment
/// re-ranker.
pub const DEFAULT_TOP_K: usize = 3;

/// Default embedding model identifier.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Default judgment (re-ranker) model identifier.
pub const DEFAULT_RERANKER_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-compatible API base for embedding retrieval.
pub const DEFAULT_EMBEDDING_API_BASE: &str = "https://api.openai.com/v1";

/// Neutral score substituted when a judgment call fails or replies out of
/// range.
pub const JUDGMENT_FALLBACK_SCORE: f64 = 5.0;

/// Judgment weight within the semantic component.
pub const JUDGMENT_WEIGHT: f64 = 0.7;

/// Similarity weight within the semantic component.
pub const SIMILARITY_WEIGHT: f64 = 0.3;

/// Semantic weight in the final blend.
pub const SEMANTIC_WEIGHT: f64 = 0.4;

/// Rule-based weight in the final blend.
pub const RULE_WEIGHT: f64 = 0.6;

/// Subject weight within the rule-based score.
pub const SUBJECT_WEIGHT: f64 = 0.7;

/// Methodology weight within the rule-based score.
pub const METHODOLOGY_WEIGHT: f64 = 0.3;

/// Secondary-subject contribution factor.
pub const SECONDARY_SUBJECT_WEIGHT: f64 = 0.3;

/// Confidence assumed for a tag the supervisor does not record.
pub const DEFAULT_CONFIDENCE: f64 = 1.0;

/// Methodology score used when the student lists needs but none match.
pub const NEUTRAL_METHODOLOGY_SCORE: f64 = 3.0;

/// Primary-subject confidence below this triggers the weak-match penalty.
pub const WEAK_PRIMARY_THRESHOLD: f64 = 2.0;

/// Multiplier applied to the rule-based score on a weak primary-subject
/// match.
pub const WEAK_PRIMARY_PENALTY: f64 = 0.3;

/// Nominal top of the supervisor confidence scale.
pub const CONFIDENCE_SCALE: f64 = 5.0;

/// Top of the blended score scale.
pub const SCORE_SCALE: f64 = 10.0;

/// Default number of external calls in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Default per-call timeout for external requests, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
