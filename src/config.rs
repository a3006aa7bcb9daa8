// Configuration for the scorer
//
// Loaded from a TOML file (`--config`) and then overridden by command-line
// flags. Every field has a default, so an empty file is a valid config.

use crate::error::{Result, ScoreError};
use crate::metrics::{Metric, Statistic};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on configured worker threads
pub const MAX_THREADS: usize = 1024;

/// Scorer configuration
///
/// # Example
/// ```
/// use rouge_scorer::config::ScorerConfig;
/// use rouge_scorer::metrics::Metric;
///
/// let config = ScorerConfig::from_toml_str("threads = 4\nrank_metric = \"rouge-l\"").unwrap();
/// assert_eq!(config.threads, 4);
/// assert_eq!(config.rank_metric, Metric::RougeL);
/// assert!(config.cache); // untouched fields keep their defaults
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    /// Worker threads for batch scoring
    ///
    /// - 0 (default): one per available core
    /// - 1: score sequentially on the calling thread
    pub threads: usize,

    /// Memoize reports by exact (candidate, reference) pair
    ///
    /// Default: true
    pub cache: bool,

    /// Maximum number of cached pairs (`None` = unbounded)
    pub cache_capacity: Option<usize>,

    /// Metric used to pick the best model when comparing
    ///
    /// Default: rouge-1
    pub rank_metric: Metric,

    /// Component of the metric to compare on
    ///
    /// Default: f (F1)
    pub rank_statistic: Statistic,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            cache: true,
            cache_capacity: None,
            rank_metric: Metric::Rouge1,
            rank_statistic: Statistic::F1,
        }
    }
}

impl ScorerConfig {
    /// Parse a TOML document and validate it
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ScorerConfig =
            toml::from_str(text).map_err(|e| ScoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded scorer config");
        Self::from_toml_str(&text)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.threads > MAX_THREADS {
            return Err(ScoreError::Config(format!(
                "threads must be <= {}, got {}",
                MAX_THREADS, self.threads
            )));
        }

        if self.cache_capacity == Some(0) {
            return Err(ScoreError::Config(
                "cache_capacity must be positive when set".to_string(),
            ));
        }

        Ok(())
    }
}
