//! Memoized scoring keyed by the exact (candidate, reference) pair
//!
//! The map lock is held only long enough to fetch or insert a cell. The
//! scoring itself runs inside `OnceLock::get_or_init`, so concurrent callers
//! asking for the same pair block on one computation instead of repeating it.

use crate::scorer::{score, ScoreReport};
use fnv::FnvHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

type PairKey = (String, String);

/// Hit/miss counters for a [`ScoreCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups served without scoring (0.0 when unused)
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            return 0.0;
        }
        self.hits as f64 / lookups as f64
    }
}

/// Concurrency-safe score cache
///
/// # Example
/// ```
/// use rouge_scorer::cache::ScoreCache;
///
/// let cache = ScoreCache::new();
/// let first = cache.score("a b c", "a b d");
/// let second = cache.score("a b c", "a b d");
///
/// assert_eq!(first, second);
/// assert_eq!(cache.stats().hits, 1);
/// assert_eq!(cache.stats().misses, 1);
/// ```
#[derive(Debug, Default)]
pub struct ScoreCache {
    cells: Mutex<FnvHashMap<PairKey, Arc<OnceLock<ScoreReport>>>>,
    capacity: Option<usize>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ScoreCache {
    /// Create an unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that stores at most `capacity` pairs
    ///
    /// Once full, unseen pairs are still scored but not remembered.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Score through the cache
    pub fn score(&self, candidate: &str, reference: &str) -> ScoreReport {
        let cell = match self.cell_for(candidate, reference) {
            Some(cell) => cell,
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return score(candidate, reference);
            }
        };

        let mut computed = false;
        let report = *cell.get_or_init(|| {
            computed = true;
            score(candidate, reference)
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        report
    }

    /// Fetch the cell for a pair, inserting one if there is room
    fn cell_for(&self, candidate: &str, reference: &str) -> Option<Arc<OnceLock<ScoreReport>>> {
        let key = (candidate.to_string(), reference.to_string());
        let mut cells = self.lock();

        if let Some(cell) = cells.get(&key) {
            return Some(Arc::clone(cell));
        }

        if self.capacity.is_some_and(|cap| cells.len() >= cap) {
            tracing::warn!(
                entries = cells.len(),
                "score cache full, result will not be stored"
            );
            return None;
        }

        let cell = Arc::new(OnceLock::new());
        cells.insert(key, Arc::clone(&cell));
        Some(cell)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FnvHashMap<PairKey, Arc<OnceLock<ScoreReport>>>> {
        // A panic while holding the lock cannot leave the map half-updated
        self.cells.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all stored pairs and reset counters
    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
