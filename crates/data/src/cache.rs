//! Explicit series cache keyed by `(ticker, period)`.
//!
//! The cache belongs to whoever fetches data. Engines receive plain
//! [`TimeSeries`] values and never consult it; invalidation is always the
//! caller's decision.

use std::collections::{HashMap, hash_map::Entry};
use std::sync::Arc;

use stockscope_types::Period;

use crate::error::DataError;
use crate::store::{TimeSeries, normalize_symbol};

/// Cache key: normalized ticker plus requested period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    /// Ticker (trimmed, upper-case).
    pub ticker: String,
    /// Requested period.
    pub period: Period,
}

impl SeriesKey {
    /// Creates a key, normalizing the ticker.
    #[must_use]
    pub fn new(ticker: &str, period: Period) -> Self {
        Self {
            ticker: normalize_symbol(ticker),
            period,
        }
    }
}

/// Cache of fetched series.
#[derive(Debug, Default)]
pub struct SeriesCache {
    entries: HashMap<SeriesKey, Arc<TimeSeries>>,
}

impl SeriesCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Checks if a series is cached.
    #[must_use]
    pub fn contains(&self, key: &SeriesKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Cached series, if present.
    #[must_use]
    pub fn get(&self, key: &SeriesKey) -> Option<Arc<TimeSeries>> {
        self.entries.get(key).cloned()
    }

    /// Stores a series under the key derived from its own symbol and period,
    /// replacing any previous entry.
    pub fn insert(&mut self, series: TimeSeries) -> Arc<TimeSeries> {
        let key = SeriesKey::new(series.symbol(), series.period());
        let series = Arc::new(series);
        self.entries.insert(key, Arc::clone(&series));
        series
    }

    /// Returns the cached series or runs `loader` and caches its result.
    /// Loader failures are returned and nothing is cached.
    ///
    /// # Errors
    /// Whatever `loader` returns.
    pub fn get_or_try_insert_with<F>(
        &mut self,
        key: &SeriesKey,
        loader: F,
    ) -> Result<Arc<TimeSeries>, DataError>
    where
        F: FnOnce() -> Result<TimeSeries, DataError>,
    {
        match self.entries.entry(key.clone()) {
            Entry::Occupied(entry) => {
                tracing::debug!("series cache hit: {} {}", key.ticker, key.period);
                Ok(Arc::clone(entry.get()))
            }
            Entry::Vacant(entry) => {
                tracing::debug!("series cache miss: {} {}", key.ticker, key.period);
                let series = Arc::new(loader()?);
                Ok(Arc::clone(entry.insert(series)))
            }
        }
    }

    /// Drops one entry. Returns `true` if something was removed.
    pub fn invalidate(&mut self, key: &SeriesKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drops every period cached for `ticker`. Returns the number removed.
    pub fn invalidate_ticker(&mut self, ticker: &str) -> usize {
        let ticker = normalize_symbol(ticker);
        let before = self.entries.len();
        self.entries.retain(|k, _| k.ticker != ticker);
        before - self.entries.len()
    }

    /// Clears all cached series.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of cached series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
