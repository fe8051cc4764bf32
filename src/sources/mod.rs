//! Source Adapter Module
//!
//! One adapter per external price provider, all behind the [`SourceAdapter`]
//! trait. Adapters are independent and order-insensitive; the engine queries
//! them concurrently and treats their results as a set. Failures carry a
//! typed reason for logging but never propagate past the fan-out.

pub mod parse;

mod cardekho;
mod carwale;
mod zigwheels;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::models::{PriceSample, VehicleDescriptor};

pub use cardekho::CarDekhoAdapter;
pub use carwale::CarWaleAdapter;
pub use zigwheels::ZigWheelsAdapter;

/// Desktop UA; provider pages serve stripped-down markup to unknown agents.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub(crate) const ACCEPT_LANGUAGE: &str = "en-IN,en;q=0.9,hi;q=0.8";

// == Source Error ==
/// Why an adapter produced no report.
///
/// Observable in logs; control flow treats every variant the same as "zero
/// samples found".
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("timed out after {0}s")]
    Timeout(u64),
}

// == Source Report ==
/// Everything one provider contributed for a descriptor.
#[derive(Debug, Clone, Default)]
pub struct SourceReport {
    /// Raw price observations, pre-filter
    pub samples: Vec<PriceSample>,
    /// Key/value specification rows found on the page
    pub specs: BTreeMap<String, String>,
    /// The page that was fetched
    pub url: String,
}

// == Source Adapter Trait ==
/// A single external price provider.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Stable identifier used in logs and the response `source` field.
    fn name(&self) -> &'static str;

    /// Fetches price observations for a descriptor.
    ///
    /// Implementations must not panic on provider garbage; transport and
    /// parse trouble surfaces as [`SourceError`].
    async fn fetch(&self, descriptor: &VehicleDescriptor) -> Result<SourceReport, SourceError>;
}

// == Fan-Out ==
/// Queries all adapters concurrently with a per-adapter timeout budget.
///
/// A slow or failing adapter affects only its own slot; siblings run to
/// completion. Results come back in adapter-registration order so the
/// merged `source` field is stable.
pub async fn fetch_all(
    adapters: &[Arc<dyn SourceAdapter>],
    descriptor: &VehicleDescriptor,
    timeout_secs: u64,
) -> Vec<(&'static str, Result<SourceReport, SourceError>)> {
    let budget = Duration::from_secs(timeout_secs);

    let futures = adapters.iter().map(|adapter| {
        let adapter = Arc::clone(adapter);
        async move {
            debug!(source = adapter.name(), "querying source");
            let outcome = match tokio::time::timeout(budget, adapter.fetch(descriptor)).await {
                Ok(result) => result,
                Err(_) => Err(SourceError::Timeout(timeout_secs)),
            };
            (adapter.name(), outcome)
        }
    });

    futures::future::join_all(futures).await
}

/// Shared fetch-and-extract path for the HTML providers.
pub(crate) async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    source: &'static str,
) -> Result<SourceReport, SourceError> {
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(SourceReport {
        samples: parse::extract_prices(&body, source),
        specs: parse::extract_specs(&body),
        url: url.to_string(),
    })
}
