//! VelaValue - Used-vehicle price estimation server
//!
//! Aggregates price observations from independent provider adapters, filters
//! implausible values, and falls back to a deterministic valuation model
//! when no market data is available. Results are memoized per vehicle and
//! condition for a fixed TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod insights;
pub mod models;
pub mod sources;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
