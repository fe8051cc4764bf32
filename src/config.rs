//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Valuation cache TTL in seconds
    pub cache_ttl: u64,
    /// Background TTL sweep interval in seconds
    pub cleanup_interval: u64,
    /// Per-adapter fetch timeout in seconds
    pub source_timeout: u64,
    /// Insight enrichment timeout in seconds
    pub insight_timeout: u64,
    /// Deployment currency code reported in responses
    pub currency: String,
    /// API key for the insight enrichment collaborator; enrichment is
    /// skipped (placeholder text) when unset
    pub gemini_api_key: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_TTL` - Valuation cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - TTL sweep frequency in seconds (default: 300)
    /// - `SOURCE_TIMEOUT` - Per-adapter timeout in seconds (default: 15)
    /// - `INSIGHT_TIMEOUT` - Enrichment timeout in seconds (default: 10)
    /// - `CURRENCY` - Currency code (default: "INR")
    /// - `GEMINI_API_KEY` - Enrichment API key (default: unset)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            source_timeout: env::var("SOURCE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            insight_timeout: env::var("INSIGHT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            currency: env::var("CURRENCY").unwrap_or_else(|_| "INR".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            cache_ttl: 3600,
            cleanup_interval: 300,
            source_timeout: 15,
            insight_timeout: 10,
            currency: "INR".to_string(),
            gemini_api_key: None,
        }
    }
}
