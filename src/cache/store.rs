//! Valuation Cache Module
//!
//! Memoizes completed valuations per (descriptor, condition) key for a fixed
//! time window. Expiry is lazy on read; a background sweep keeps the map from
//! growing without bound.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::Valuation;

// == Valuation Cache ==
/// TTL-bounded store of completed valuations.
///
/// There is no capacity bound: the key space is small (make × model × year ×
/// condition actually queried) and the sweep task reclaims expired entries.
#[derive(Debug)]
pub struct ValuationCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds applied to every entry
    ttl: u64,
}

impl ValuationCache {
    // == Constructor ==
    /// Creates a new cache with the given TTL in seconds.
    pub fn new(ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Looks up a valuation by key.
    ///
    /// An entry whose TTL has elapsed is removed and reported as absent, so
    /// callers recompute rather than serve stale data.
    pub fn get(&mut self, key: &str) -> Option<Valuation> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired(self.ttl) => {
                debug!(key, "cache entry expired");
                self.entries.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a valuation under the given key, resetting its TTL window.
    pub fn put(&mut self, key: String, value: Valuation) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - self.entries.len();

        for _ in 0..removed {
            self.stats.record_expiration();
        }
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries (including not-yet-swept
    /// expired ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::current_timestamp_ms;
    use crate::models::domain::{Condition, VehicleDescriptor, VehicleType};
    use crate::models::ValuationParts;
    use std::collections::BTreeMap;

    fn sample_valuation(avg: f64) -> Valuation {
        let descriptor = VehicleDescriptor::new("maruti", "swift", 2020, VehicleType::Car);
        Valuation::assemble(
            &descriptor,
            Condition::Good,
            "INR",
            ValuationParts {
                average_price: avg,
                min_price: avg * 0.9,
                max_price: avg * 1.1,
                sample_size: 1,
                confidence: 0.7,
                source: "fallback_algorithm".to_string(),
                source_urls: vec![],
                specifications: BTreeMap::new(),
                gemini_insights: String::new(),
            },
        )
    }

    #[test]
    fn test_put_and_get() {
        let mut cache = ValuationCache::new(3600);
        cache.put("k".to_string(), sample_valuation(600000.0));

        let hit = cache.get("k").unwrap();
        assert_eq!(hit.average_price, 600000.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_missing_key() {
        let mut cache = ValuationCache::new(3600);
        assert!(cache.get("absent").is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_cached_value_is_identical_on_repeat_reads() {
        let mut cache = ValuationCache::new(3600);
        cache.put("k".to_string(), sample_valuation(612345.67));

        let first = cache.get("k").unwrap();
        let second = cache.get("k").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_expired_entry_is_absent_and_removed() {
        let mut cache = ValuationCache::new(1);
        cache.put("k".to_string(), sample_valuation(600000.0));

        // Backdate the entry past the TTL instead of sleeping
        cache.entries.get_mut("k").unwrap().created_at = current_timestamp_ms() - 2000;

        assert!(cache.get("k").is_none());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().expirations, 1);
    }

    #[test]
    fn test_put_overwrites_and_resets_ttl() {
        let mut cache = ValuationCache::new(3600);
        cache.put("k".to_string(), sample_valuation(100000.0));
        cache.put("k".to_string(), sample_valuation(200000.0));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k").unwrap().average_price, 200000.0);
    }

    #[test]
    fn test_cleanup_expired_sweeps_only_stale_entries() {
        let mut cache = ValuationCache::new(10);
        cache.put("stale".to_string(), sample_valuation(100000.0));
        cache.put("fresh".to_string(), sample_valuation(200000.0));

        cache.entries.get_mut("stale").unwrap().created_at = current_timestamp_ms() - 11_000;

        let removed = cache.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("fresh").is_some());
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let mut cache = ValuationCache::new(3600);
        cache.put("k".to_string(), sample_valuation(100000.0));
        cache.get("k");
        cache.get("absent");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
