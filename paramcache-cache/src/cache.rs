//! In-memory TTL map keyed by parameter name.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::Serialize;

use paramcache_core::types::Parameter;

/// Cache entry with an absolute expiry.
#[derive(Clone)]
struct CacheEntry<V> {
    value: V,
    /// Epoch seconds after which the entry is stale.
    expires_at: i64,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

/// Thread-safe name → value map with whole-second expiry.
///
/// Keys are used verbatim (parameter names are case-sensitive). Time is
/// always passed in by the caller so that the owner controls the clock.
pub struct TtlCache<V = Parameter> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the value for `key` if it is still fresh at `now`.
    pub fn get(&self, key: &str, now: i64) -> Option<V> {
        let entries = self.entries.read();

        if let Some(entry) = entries.get(key) {
            if entry.is_fresh(now) {
                return Some(entry.value.clone());
            }
        }

        None
    }

    /// Stores `value` until `expires_at`, overwriting any previous entry.
    pub fn insert(&self, key: &str, value: V, expires_at: i64) {
        self.entries
            .write()
            .insert(key.to_owned(), CacheEntry { value, expires_at });
    }

    /// Stores `value` for `ttl_seconds` starting at `now`.
    ///
    /// Returns the computed expiry.
    pub fn insert_for(&self, key: &str, value: V, now: i64, ttl_seconds: u64) -> i64 {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        let expires_at = now.saturating_add(ttl);
        self.insert(key, value, expires_at);
        expires_at
    }

    /// Returns the expiry of `key`, fresh or stale.
    pub fn expires_at(&self, key: &str) -> Option<i64> {
        self.entries.read().get(key).map(|e| e.expires_at)
    }

    /// Returns true if an entry exists for `key`, fresh or stale.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Returns the number of entries, including stale ones.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics as of `now`.
    pub fn stats(&self, now: i64) -> CacheStats {
        let entries = self.entries.read();
        let fresh = entries.values().filter(|e| e.is_fresh(now)).count();

        CacheStats {
            total_entries: entries.len(),
            fresh_entries: fresh,
            stale_entries: entries.len() - fresh,
        }
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Total entries (including stale)
    pub total_entries: usize,
    /// Entries that would be served as hits
    pub fresh_entries: usize,
    /// Entries past their expiry, awaiting overwrite
    pub stale_entries: usize,
}
