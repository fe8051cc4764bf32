//! Result Cache Module
//!
//! Provides in-memory memoization of completed valuations with TTL expiry.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ValuationCache;
