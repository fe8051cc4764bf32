//! Insight Enrichment Module
//!
//! Optional free-text commentary about the vehicle from the Gemini API.
//! This is a boundary collaborator: every failure mode (no key configured,
//! transport error, timeout, unexpected response shape) degrades to a fixed
//! placeholder string and never affects the numeric valuation.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{anyhow, Context};
use serde_json::json;
use tracing::{debug, warn};

use crate::models::VehicleDescriptor;

/// Returned when enrichment is not configured or the reply carried no text.
pub const NO_INSIGHTS: &str = "No additional information available from Gemini AI.";

/// Returned when the enrichment call failed or timed out.
pub const INSIGHTS_UNAVAILABLE: &str = "Unable to retrieve additional information at this time.";

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

// == Insight Client ==
/// Client for the Gemini commentary collaborator.
pub struct InsightClient {
    client: reqwest::Client,
    /// Unset means enrichment is disabled for this deployment
    api_key: Option<String>,
    timeout: Duration,
}

impl InsightClient {
    /// Creates a client. `api_key = None` disables enrichment entirely.
    pub fn new(client: reqwest::Client, api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            client,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Fetches commentary for a vehicle, folding all failures into
    /// placeholder text. Never errors and never blocks past the timeout.
    pub async fn vehicle_insights(
        &self,
        descriptor: &VehicleDescriptor,
        specs: &BTreeMap<String, String>,
    ) -> String {
        let Some(api_key) = &self.api_key else {
            debug!("insight enrichment disabled, no API key configured");
            return NO_INSIGHTS.to_string();
        };

        match tokio::time::timeout(self.timeout, self.request(api_key, descriptor, specs)).await {
            Ok(Ok(text)) => text,
            Ok(Err(err)) => {
                warn!(error = %err, "insight enrichment failed");
                INSIGHTS_UNAVAILABLE.to_string()
            }
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "insight enrichment timed out");
                INSIGHTS_UNAVAILABLE.to_string()
            }
        }
    }

    async fn request(
        &self,
        api_key: &str,
        descriptor: &VehicleDescriptor,
        specs: &BTreeMap<String, String>,
    ) -> anyhow::Result<String> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(descriptor, specs) }]
            }]
        });

        let response = self
            .client
            .post(format!("{}?key={}", GEMINI_ENDPOINT, api_key))
            .json(&body)
            .send()
            .await
            .context("sending enrichment request")?
            .error_for_status()
            .context("enrichment request rejected")?;

        let reply: serde_json::Value = response
            .json()
            .await
            .context("decoding enrichment response")?;

        reply["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("response carried no text candidate"))
    }
}

/// Builds the commentary prompt for a vehicle, appending known specs when
/// providers contributed any.
fn build_prompt(descriptor: &VehicleDescriptor, specs: &BTreeMap<String, String>) -> String {
    let mut prompt = format!(
        "Provide detailed information about the {} {} {} {} in the Indian market.\n\n\
         Include the following information:\n\
         1. A brief overview of the vehicle\n\
         2. Key features and specifications\n\
         3. Pros and cons\n\
         4. Market position in India\n\
         5. Resale value insights\n\
         6. Maintenance costs\n\
         7. Fuel efficiency\n\
         8. Competitors in the same segment\n\n\
         Format the response in a concise, structured way that would be helpful \
         for someone considering purchasing this vehicle.",
        descriptor.year, descriptor.make, descriptor.model, descriptor.vehicle_type
    );

    if !specs.is_empty() {
        let known = serde_json::to_string(specs).unwrap_or_default();
        prompt.push_str("\n\nHere are some known specifications: ");
        prompt.push_str(&known);
    }

    prompt
}
