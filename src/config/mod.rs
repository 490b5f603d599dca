//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `COHORT_*` environment
//! variables; the API credential also falls back to `OPENAI_API_KEY`.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_EMBEDDING_API_BASE, DEFAULT_EMBEDDING_MODEL,
    DEFAULT_RERANKER_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOP_K,
};

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `COHORT_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential for the external capabilities. `None` means the caller
    /// never configured one; [`crate::engine::run_matching`] fails fast on
    /// that.
    pub api_key: Option<String>,

    /// OpenAI-compatible API base for embedding retrieval.
    pub embedding_api_base: String,

    /// Embedding model identifier.
    pub embedding_model: String,

    /// Judgment (re-ranker) model identifier.
    pub reranker_model: String,

    /// Candidates per supervisor sent to the judge. Default: `3`.
    pub top_k: usize,

    /// External calls in flight at once. Default: `8`.
    pub concurrency: usize,

    /// Per-call timeout for external requests, in seconds. Default: `30`.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            embedding_api_base: DEFAULT_EMBEDDING_API_BASE.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            reranker_model: DEFAULT_RERANKER_MODEL.to_string(),
            top_k: DEFAULT_TOP_K,
            concurrency: DEFAULT_CONCURRENCY,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    const ENV_API_KEY: &'static str = "COHORT_API_KEY";
    const ENV_API_KEY_FALLBACK: &'static str = "OPENAI_API_KEY";
    const ENV_EMBEDDING_API_BASE: &'static str = "COHORT_EMBEDDING_API_BASE";
    const ENV_EMBEDDING_MODEL: &'static str = "COHORT_EMBEDDING_MODEL";
    const ENV_RERANKER_MODEL: &'static str = "COHORT_RERANKER_MODEL";
    const ENV_TOP_K: &'static str = "COHORT_TOP_K";
    const ENV_CONCURRENCY: &'static str = "COHORT_CONCURRENCY";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "COHORT_REQUEST_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to
    /// defaults). Malformed numeric overrides are an error rather than a
    /// silent fallback; they change scoring behavior.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY)
            .or_else(|| Self::parse_optional_string_from_env(Self::ENV_API_KEY_FALLBACK));
        let embedding_api_base =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_API_BASE, defaults.embedding_api_base);
        let embedding_model =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_MODEL, defaults.embedding_model);
        let reranker_model =
            Self::parse_string_from_env(Self::ENV_RERANKER_MODEL, defaults.reranker_model);
        let top_k = Self::parse_usize_from_env(Self::ENV_TOP_K, defaults.top_k)?;
        let concurrency = Self::parse_usize_from_env(Self::ENV_CONCURRENCY, defaults.concurrency)?;
        let request_timeout_secs = Self::parse_u64_from_env(
            Self::ENV_REQUEST_TIMEOUT_SECS,
            defaults.request_timeout_secs,
        )?;

        let config = Self {
            api_key,
            embedding_api_base,
            embedding_model,
            reranker_model,
            top_k,
            concurrency,
            request_timeout_secs,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroNotAllowed {
                name: Self::ENV_CONCURRENCY,
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroNotAllowed {
                name: Self::ENV_REQUEST_TIMEOUT_SECS,
            });
        }

        Ok(())
    }

    /// Per-run options derived from this configuration.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            top_k: self.top_k,
            embedding_model: self.embedding_model.clone(),
            reranker_model: self.reranker_model.clone(),
            concurrency: self.concurrency,
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                name: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                name: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }
}

/// Per-run knobs consumed by the matrix builder and engine.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Candidates per supervisor sent to the judge.
    pub top_k: usize,

    /// Embedding model identifier.
    pub embedding_model: String,

    /// Judgment (re-ranker) model identifier.
    pub reranker_model: String,

    /// External calls in flight at once.
    pub concurrency: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            reranker_model: DEFAULT_RERANKER_MODEL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl MatchOptions {
    /// Sets the top-K candidate count.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the embedding model.
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Sets the judgment model.
    pub fn with_reranker_model(mut self, model: impl Into<String>) -> Self {
        self.reranker_model = model.into();
        self
    }

    /// Sets the concurrency bound.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}
