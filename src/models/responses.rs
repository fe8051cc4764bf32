//! Response DTOs for the valuation API
//!
//! Defines the structure of outgoing HTTP response bodies. [`Valuation`] is
//! both the success response and the unit stored in the result cache, so a
//! cache hit replays the exact bytes of the original computation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::domain::{Condition, VehicleDescriptor};

/// A completed vehicle valuation.
///
/// Invariants: `min_price <= average_price <= max_price`, `sample_size >= 1`,
/// `confidence` in `[0, 0.95]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub condition: String,
    pub vehicle_type: String,
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub formatted_avg_price: String,
    pub formatted_min_price: String,
    pub formatted_max_price: String,
    pub sample_size: usize,
    pub confidence: f64,
    pub currency: String,
    /// Comma-joined list of contributing sources, or "fallback_algorithm"
    pub source: String,
    /// Provider pages that contributed samples
    pub source_urls: Vec<String>,
    /// Key/value specification rows collected from providers
    pub specifications: BTreeMap<String, String>,
    /// Free-text commentary, or a placeholder when enrichment is unavailable
    pub gemini_insights: String,
}

/// Builder-style assembly parameters for a [`Valuation`].
///
/// Keeps the engine from threading a dozen positional arguments around.
pub struct ValuationParts {
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub sample_size: usize,
    pub confidence: f64,
    pub source: String,
    pub source_urls: Vec<String>,
    pub specifications: BTreeMap<String, String>,
    pub gemini_insights: String,
}

impl Valuation {
    /// Assembles a valuation from a descriptor, condition, and computed parts.
    ///
    /// Prices are rounded to two decimals and formatted in Indian digit
    /// grouping. The descriptor's original make/model casing is echoed back.
    pub fn assemble(
        descriptor: &VehicleDescriptor,
        condition: Condition,
        currency: &str,
        parts: ValuationParts,
    ) -> Self {
        let average_price = round2(parts.average_price);
        let min_price = round2(parts.min_price);
        let max_price = round2(parts.max_price);

        Self {
            make: descriptor.make.clone(),
            model: descriptor.model.clone(),
            year: descriptor.year,
            condition: condition.to_string(),
            vehicle_type: descriptor.vehicle_type.to_string(),
            average_price,
            min_price,
            max_price,
            formatted_avg_price: format_inr(average_price),
            formatted_min_price: format_inr(min_price),
            formatted_max_price: format_inr(max_price),
            sample_size: parts.sample_size,
            confidence: parts.confidence,
            currency: currency.to_string(),
            source: parts.source,
            source_urls: parts.source_urls,
            specifications: parts.specifications,
            gemini_insights: parts.gemini_insights,
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub supported_vehicles: Vec<String>,
    pub supported_sources: Vec<String>,
    pub currency: String,
    /// Number of live entries in the result cache
    pub cache_size: usize,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a health response describing this deployment.
    pub fn new(currency: &str, sources: &[&str], cache_size: usize) -> Self {
        Self {
            status: "ok".to_string(),
            message: "VelaValue Vehicle Price API is running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            supported_vehicles: vec!["car".to_string(), "bike".to_string()],
            supported_sources: sources.iter().map(|s| s.to_string()).collect(),
            currency: currency.to_string(),
            cache_size,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a price with the rupee sign and Indian digit grouping.
///
/// The last three integer digits form one group, every preceding pair forms
/// another: `1234567.5` becomes `"₹12,34,567.50"`.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();
    let mut whole = amount.trunc() as u64;
    let mut cents = ((amount - amount.trunc()) * 100.0).round() as u64;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }

    let digits = whole.to_string();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, grouped, cents)
}
