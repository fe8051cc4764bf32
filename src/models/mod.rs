//! Domain types and API models for the valuation server
//!
//! `domain` holds the typed core (descriptor, condition, samples); `requests`
//! and `responses` hold the DTOs serialized at the HTTP boundary.

pub mod domain;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use domain::{Condition, PriceSample, VehicleDescriptor, VehicleType};
pub use requests::ValuationQuery;
pub use responses::{ErrorResponse, HealthResponse, Valuation, ValuationParts};
