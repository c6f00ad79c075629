//! Raw-match caching.
//!
//! [`MatchCache`] remembers what the route table produced for a path, so
//! repeated navigation to the same url skips the linear scan over routes. It
//! is gated behind the `cache` feature and backed by the [`lru`] crate.
//!
//! Only raw matches are cached, including "nothing matched". Redirect hooks
//! and rules always run fresh because they may depend on state outside the
//! router (a session flag, a feature toggle). The router clears the cache
//! whenever routes are added.
//!
//! # Examples
//!
//! ```
//! use nav_resolver::cache::MatchCache;
//!
//! let mut cache = MatchCache::new();
//! assert!(cache.get("/about").is_none());
//! cache.insert("/about".to_string(), None);
//!
//! assert!(matches!(cache.get("/about"), Some(None)));
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::result::MatchResult;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Hit, miss and invalidation counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    /// Number of [`MatchCache::clear`] calls.
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; `0.0` before any lookup.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache from url to raw route-table match.
#[derive(Debug)]
pub struct MatchCache {
    entries: LruCache<String, Option<MatchResult>>,
    stats: CacheStats,
}

impl MatchCache {
    /// Default number of cached urls.
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding up to `capacity` urls (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Look up a url.
    ///
    /// The outer `Option` is the cache hit; the inner one is the cached
    /// match, `None` meaning no route matched.
    pub fn get(&mut self, url: &str) -> Option<Option<MatchResult>> {
        if let Some(entry) = self.entries.get(url) {
            self.stats.hits += 1;
            trace_log!("Match cache hit for '{}'", url);
            Some(entry.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Match cache miss for '{}'", url);
            None
        }
    }

    /// Remember the raw match for a url.
    pub fn insert(&mut self, url: String, raw: Option<MatchResult>) {
        self.entries.push(url, raw);
    }

    /// Drop every entry and count an invalidation.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Match cache cleared: {} entries removed ({} invalidations, hit rate {:.1}%)",
            removed,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new()
    }
}
