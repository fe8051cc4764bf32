//! Valuation Engine Module
//!
//! The core pipeline: cache lookup → concurrent source fan-out → outlier
//! filter → aggregation → fallback model when nothing usable remains →
//! insight enrichment → cache store. Every request that reaches the engine
//! produces a valuation; degradation is always graceful.

pub mod aggregate;
pub mod fallback;
pub mod filter;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::ValuationCache;
use crate::insights::InsightClient;
use crate::models::{Condition, Valuation, ValuationParts, VehicleDescriptor};
use crate::sources::{self, SourceAdapter};

pub use aggregate::{aggregate, confidence, Aggregate, CONFIDENCE_CAP};
pub use fallback::{estimate, FallbackEstimate, FALLBACK_CONFIDENCE, FALLBACK_SOURCE};
pub use filter::{filter_outliers, plausible_bounds};

// == Engine Settings ==
/// Per-deployment engine parameters.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Currency code reported on every valuation
    pub currency: String,
    /// Per-adapter fetch timeout in seconds
    pub source_timeout: u64,
}

// == Valuation Engine ==
/// Owns the full valuation pipeline for one deployment.
pub struct ValuationEngine {
    adapters: Vec<Arc<dyn SourceAdapter>>,
    insights: InsightClient,
    cache: Arc<RwLock<ValuationCache>>,
    settings: EngineSettings,
}

impl ValuationEngine {
    pub fn new(
        adapters: Vec<Arc<dyn SourceAdapter>>,
        insights: InsightClient,
        cache: Arc<RwLock<ValuationCache>>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            adapters,
            insights,
            cache,
            settings,
        }
    }

    /// Names of the registered source adapters, in registration order.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    /// Currency code this deployment reports.
    pub fn currency(&self) -> &str {
        &self.settings.currency
    }

    // == Appraise ==
    /// Produces a valuation for the descriptor and condition.
    ///
    /// Within the cache TTL, repeated calls for the same key return the
    /// stored valuation unchanged (the fallback jitter is drawn at most once
    /// per window).
    pub async fn appraise(
        &self,
        descriptor: &VehicleDescriptor,
        condition: Condition,
    ) -> Valuation {
        let key = descriptor.cache_key(condition);

        if let Some(cached) = self.cache.write().await.get(&key) {
            info!(key, "serving cached valuation");
            return cached;
        }

        let valuation = self.compute(descriptor, condition).await;

        self.cache.write().await.put(key, valuation.clone());
        valuation
    }

    async fn compute(&self, descriptor: &VehicleDescriptor, condition: Condition) -> Valuation {
        let outcomes =
            sources::fetch_all(&self.adapters, descriptor, self.settings.source_timeout).await;

        let mut samples = Vec::new();
        let mut specs = BTreeMap::new();
        let mut source_names = Vec::new();
        let mut source_urls = Vec::new();

        for (name, outcome) in outcomes {
            match outcome {
                Ok(report) if !report.samples.is_empty() => {
                    debug!(source = name, samples = report.samples.len(), "source contributed");
                    samples.extend(report.samples);
                    specs.extend(report.specs);
                    source_names.push(name);
                    source_urls.push(report.url);
                }
                Ok(_) => debug!(source = name, "source returned no samples"),
                Err(err) => warn!(source = name, error = %err, "source unavailable"),
            }
        }

        let filtered = filter::filter_outliers(&samples, descriptor.vehicle_type);

        match aggregate::aggregate(&filtered) {
            Some(agg) => {
                info!(
                    make = %descriptor.make,
                    model = %descriptor.model,
                    sample_size = agg.sample_size,
                    "aggregated market samples"
                );
                let insights_text = self.insights.vehicle_insights(descriptor, &specs).await;
                Valuation::assemble(
                    descriptor,
                    condition,
                    &self.settings.currency,
                    ValuationParts {
                        average_price: agg.average,
                        min_price: agg.min,
                        max_price: agg.max,
                        sample_size: agg.sample_size,
                        confidence: agg.confidence,
                        source: source_names.join(", "),
                        source_urls,
                        specifications: specs,
                        gemini_insights: insights_text,
                    },
                )
            }
            None => {
                info!(
                    make = %descriptor.make,
                    model = %descriptor.model,
                    "no usable samples, using fallback valuation"
                );
                let est = fallback::estimate(descriptor, condition);
                let insights_text = self
                    .insights
                    .vehicle_insights(descriptor, &BTreeMap::new())
                    .await;
                Valuation::assemble(
                    descriptor,
                    condition,
                    &self.settings.currency,
                    ValuationParts {
                        average_price: est.price,
                        min_price: est.min_price,
                        max_price: est.max_price,
                        sample_size: 1,
                        confidence: fallback::FALLBACK_CONFIDENCE,
                        source: fallback::FALLBACK_SOURCE.to_string(),
                        source_urls: Vec::new(),
                        specifications: BTreeMap::new(),
                        gemini_insights: insights_text,
                    },
                )
            }
        }
    }
}
