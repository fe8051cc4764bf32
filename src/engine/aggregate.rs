//! Aggregator Module
//!
//! Summarizes filtered price samples into the statistics a valuation
//! reports: arithmetic mean, extremes, and a sample-size-based confidence
//! score.

/// Confidence floor with at least one sample.
const BASE_CONFIDENCE: f64 = 0.6;

/// Each additional sample adds 1/CONFIDENCE_SLOPE of confidence.
const CONFIDENCE_SLOPE: f64 = 10.0;

/// Confidence never exceeds this cap.
pub const CONFIDENCE_CAP: f64 = 0.95;

// == Aggregate ==
/// Summary statistics over a non-empty set of filtered prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub sample_size: usize,
    pub confidence: f64,
}

/// Aggregates filtered prices, or returns `None` when there is nothing to
/// aggregate (the caller then falls back to the synthetic model).
pub fn aggregate(prices: &[f64]) -> Option<Aggregate> {
    if prices.is_empty() {
        return None;
    }

    let sum: f64 = prices.iter().sum();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(Aggregate {
        average: sum / prices.len() as f64,
        min,
        max,
        sample_size: prices.len(),
        confidence: confidence(prices.len()),
    })
}

/// Sample-size-based confidence: more samples, more trust, saturating at the
/// cap. Not a statistical confidence interval.
pub fn confidence(sample_size: usize) -> f64 {
    (BASE_CONFIDENCE + sample_size as f64 / CONFIDENCE_SLOPE).min(CONFIDENCE_CAP)
}
