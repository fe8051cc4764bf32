//! Cache Entry Module
//!
//! Defines the stored form of a memoized valuation.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Valuation;

// == Cache Entry ==
/// A memoized valuation with its creation timestamp.
///
/// Entries carry no expiry of their own; the store compares `created_at`
/// against the deployment-wide TTL on every read.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored valuation
    pub value: Valuation,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Valuation) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired once the full TTL has
    /// elapsed, i.e. when `now - created_at >= ttl`.
    pub fn is_expired(&self, ttl_secs: u64) -> bool {
        current_timestamp_ms().saturating_sub(self.created_at) >= ttl_secs * 1000
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
