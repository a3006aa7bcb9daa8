//! Batch scoring over many independent pairs
//!
//! Pairs share no state, so a batch is split into contiguous chunks, one per
//! scoped worker thread, and the per-chunk results are concatenated back in
//! input order.

use crate::cache::{CacheStats, ScoreCache};
use crate::config::ScorerConfig;
use crate::error::{Result, ScoreError};
use crate::metrics::{Metric, MetricResult};
use crate::scorer::{score, ScoreReport};

/// Resolve a configured thread count (0 means one per available core)
pub fn effective_threads(threads: usize) -> usize {
    if threads > 0 {
        return threads;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Score `candidates[i]` against `references[i]` for every `i`
///
/// Output order matches input order. Unequal lengths are rejected before any
/// scoring happens.
pub fn score_batch<S: AsRef<str> + Sync>(
    candidates: &[S],
    references: &[S],
    threads: usize,
) -> Result<Vec<ScoreReport>> {
    score_batch_with(candidates, references, threads, score)
}

pub(crate) fn score_batch_with<S, F>(
    candidates: &[S],
    references: &[S],
    threads: usize,
    score_fn: F,
) -> Result<Vec<ScoreReport>>
where
    S: AsRef<str> + Sync,
    F: Fn(&str, &str) -> ScoreReport + Sync,
{
    if candidates.len() != references.len() {
        return Err(ScoreError::LengthMismatch {
            candidates: candidates.len(),
            references: references.len(),
        });
    }

    let pairs = candidates.len();
    let workers = effective_threads(threads).min(pairs).max(1);

    tracing::info!(pairs, workers, "scoring batch");

    if workers == 1 {
        return Ok(candidates
            .iter()
            .zip(references)
            .map(|(c, r)| score_fn(c.as_ref(), r.as_ref()))
            .collect());
    }

    let chunk = pairs.div_ceil(workers);
    let score_fn = &score_fn;

    let reports = crossbeam::thread::scope(|s| {
        let handles: Vec<_> = candidates
            .chunks(chunk)
            .zip(references.chunks(chunk))
            .map(|(cs, rs)| {
                s.spawn(move |_| {
                    cs.iter()
                        .zip(rs)
                        .map(|(c, r)| score_fn(c.as_ref(), r.as_ref()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    })
    .unwrap_or_else(|e| std::panic::resume_unwind(e));

    Ok(reports)
}

/// Per-metric mean of precision, recall and F1 across a batch
///
/// Each component is averaged independently, so the averaged F1 is the mean
/// of the F1 values rather than the harmonic mean of the averaged precision
/// and recall.
pub fn average_reports(reports: &[ScoreReport]) -> Result<ScoreReport> {
    if reports.is_empty() {
        return Err(ScoreError::EmptyBatch);
    }

    let n = reports.len() as f64;
    let mean = |metric: Metric| {
        let (p, r, f) = reports.iter().map(|report| report.get(metric)).fold(
            (0.0, 0.0, 0.0),
            |(p, r, f), m| (p + m.precision, r + m.recall, f + m.f1),
        );
        MetricResult {
            precision: p / n,
            recall: r / n,
            f1: f / n,
        }
    };

    Ok(ScoreReport {
        rouge_1: mean(Metric::Rouge1),
        rouge_2: mean(Metric::Rouge2),
        rouge_l: mean(Metric::RougeL),
    })
}

/// Configured scorer: optional cache plus a worker count for batches
#[derive(Debug)]
pub struct Scorer {
    config: ScorerConfig,
    cache: Option<ScoreCache>,
}

impl Scorer {
    /// Build a scorer from a validated configuration
    pub fn new(config: ScorerConfig) -> Result<Self> {
        config.validate()?;
        let cache = config.cache.then(|| match config.cache_capacity {
            Some(capacity) => ScoreCache::with_capacity(capacity),
            None => ScoreCache::new(),
        });
        Ok(Self { config, cache })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score one pair, through the cache when enabled
    pub fn score(&self, candidate: &str, reference: &str) -> ScoreReport {
        match &self.cache {
            Some(cache) => cache.score(candidate, reference),
            None => score(candidate, reference),
        }
    }

    /// Score a batch with the configured worker count
    pub fn score_batch<S: AsRef<str> + Sync>(
        &self,
        candidates: &[S],
        references: &[S],
    ) -> Result<Vec<ScoreReport>> {
        score_batch_with(candidates, references, self.config.threads, |c, r| {
            self.score(c, r)
        })
    }

    /// Cache counters, if caching is enabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ScoreCache::stats)
    }
}
