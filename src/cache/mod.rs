//! Content-addressed token cache.
//!
//! Wraps the otherwise-pure generation pipeline so interactive editing
//! does not recompute identical outputs. Eviction is LRU at capacity,
//! entries expire by TTL on access, and string-keyed entries can be
//! invalidated by pattern. Every operation is total: a cache that cannot
//! satisfy a request reports a miss, never an error.

mod key;
mod tracker;

pub use key::canonical_digest;
pub use tracker::FileInvalidationTracker;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Cache capacity and expiry, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    pub max_size: usize,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// A cache key: either an original string or the canonical digest of a
/// structured value.
///
/// Pattern invalidation only ever matches `Text` keys, so digest hex can
/// never alias a caller's pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Text(String),
    Digest(String),
}

impl CacheKey {
    /// Reduce a structured value to its canonical digest key.
    pub fn structured<T: Serialize>(value: &T) -> Self {
        CacheKey::Digest(canonical_digest(value))
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        CacheKey::Text(s.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        CacheKey::Text(s)
    }
}

/// A stored entry with its bookkeeping fields.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub timestamp: Instant,
    pub hash: String,
}

/// Cumulative counters since the last `clear`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hit_count: u64,
    pub miss_count: u64,
    pub hit_rate: f64,
    pub size: usize,
    pub max_size: usize,
}

/// In-memory token cache with LRU eviction, TTL expiry, and pattern
/// invalidation.
///
/// The cache exclusively owns its entries; lookups hand out clones, never
/// references into internal storage.
#[derive(Debug)]
pub struct TokenCache<V> {
    entries: HashMap<CacheKey, CacheEntry<V>>,
    /// Recency order, least recently used first.
    order: Vec<CacheKey>,
    config: CacheConfig,
    hit_count: u64,
    miss_count: u64,
}

impl<V: Clone + Serialize> TokenCache<V> {
    /// Create a cache with the given capacity and TTL.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            config,
            hit_count: 0,
            miss_count: 0,
        }
    }

    /// Store a value, evicting the least-recently-used entry at capacity.
    pub fn set(&mut self, key: impl Into<CacheKey>, value: V) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.max_size {
            if let Some(oldest) = self.order.first().cloned() {
                debug!(?oldest, "evicting least-recently-used cache entry");
                self.remove(&oldest);
            }
        }

        let hash = canonical_digest(&value);
        self.touch(&key);
        self.entries.insert(
            key,
            CacheEntry {
                value,
                timestamp: Instant::now(),
                hash,
            },
        );
    }

    /// Look a value up, refreshing recency on a hit.
    ///
    /// An entry older than the TTL is removed and reported as a miss.
    pub fn get(&mut self, key: impl Into<CacheKey>) -> Option<V> {
        self.lookup(key.into()).map(|entry| entry.value)
    }

    /// Same lookup semantics as `get`, with the bookkeeping fields.
    pub fn get_with_metadata(&mut self, key: impl Into<CacheKey>) -> Option<CacheEntry<V>> {
        self.lookup(key.into())
    }

    fn lookup(&mut self, key: CacheKey) -> Option<CacheEntry<V>> {
        let expired = match self.entries.get(&key) {
            None => {
                self.miss_count += 1;
                return None;
            }
            Some(entry) => entry.timestamp.elapsed() > self.config.ttl,
        };

        if expired {
            debug!(?key, "cache entry expired");
            self.remove(&key);
            self.miss_count += 1;
            return None;
        }

        self.hit_count += 1;
        self.touch(&key);
        self.entries.get(&key).cloned()
    }

    /// Remove every entry whose original string key matches the pattern.
    ///
    /// Returns the number removed. Digest-keyed entries are never matched.
    pub fn invalidate_pattern(&mut self, pattern: &Regex) -> usize {
        let matched: Vec<CacheKey> = self
            .entries
            .keys()
            .filter(|key| match key {
                CacheKey::Text(text) => pattern.is_match(text),
                CacheKey::Digest(_) => false,
            })
            .cloned()
            .collect();

        for key in &matched {
            self.remove(key);
        }
        debug!(count = matched.len(), %pattern, "invalidated cache entries");
        matched.len()
    }

    /// Remove all entries and reset the hit/miss counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.hit_count = 0;
        self.miss_count = 0;
    }

    /// Cumulative statistics since the last `clear`.
    pub fn get_stats(&self) -> CacheStats {
        let total = self.hit_count + self.miss_count;
        CacheStats {
            hit_count: self.hit_count,
            miss_count: self.miss_count,
            hit_rate: if total > 0 {
                self.hit_count as f64 / total as f64
            } else {
                0.0
            },
            size: self.entries.len(),
            max_size: self.config.max_size,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn touch(&mut self, key: &CacheKey) {
        self.order.retain(|k| k != key);
        self.order.push(key.clone());
    }

    fn remove(&mut self, key: &CacheKey) {
        self.entries.remove(key);
        self.order.retain(|k| k != key);
    }
}

impl<V: Clone + Serialize> Default for TokenCache<V> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
