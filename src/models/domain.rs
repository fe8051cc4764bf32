//! Core domain types for valuation requests
//!
//! Defines the vehicle descriptor and its components. These are the typed
//! replacements for the string-keyed dictionaries that flow between layers
//! in ad-hoc valuation scripts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// == Vehicle Type ==
/// Category of vehicle being valued.
///
/// Determines which base-price table, outlier bounds, and provider URL
/// scheme apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Bike,
}

impl VehicleType {
    /// Returns the lowercase wire name ("car" or "bike").
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
        }
    }
}

impl FromStr for VehicleType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(VehicleType::Car),
            "bike" => Ok(VehicleType::Bike),
            _ => Err(()),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Condition ==
/// Reported vehicle condition.
///
/// Parsing is lenient: unrecognized strings map to `Good`, which carries the
/// neutral multiplier 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Parses a condition string, defaulting to `Good` for unknown input.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "excellent" => Condition::Excellent,
            "fair" => Condition::Fair,
            "poor" => Condition::Poor,
            _ => Condition::Good,
        }
    }

    /// Price multiplier applied by the fallback valuation model.
    pub fn factor(&self) -> f64 {
        match self {
            Condition::Excellent => 1.15,
            Condition::Good => 1.0,
            Condition::Fair => 0.85,
            Condition::Poor => 0.65,
        }
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Vehicle Descriptor ==
/// Identifies the vehicle a valuation request is about.
///
/// Immutable once constructed; together with a [`Condition`] it identifies a
/// valuation and its cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDescriptor {
    /// Manufacturer name as supplied by the caller
    pub make: String,
    /// Model name as supplied by the caller
    pub model: String,
    /// Model year
    pub year: i32,
    /// Vehicle category
    pub vehicle_type: VehicleType,
}

impl VehicleDescriptor {
    /// Creates a new descriptor.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vehicle_type: VehicleType,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            vehicle_type,
        }
    }

    /// Builds the deterministic cache key for this descriptor and condition.
    ///
    /// Make and model are lowercased so callers that differ only in casing
    /// share a cache entry.
    pub fn cache_key(&self, condition: Condition) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            self.vehicle_type,
            self.make.to_lowercase(),
            self.model.to_lowercase(),
            self.year,
            condition
        )
    }
}

// == Price Sample ==
/// A single observed price, tagged with the provider that reported it.
///
/// Ephemeral: produced by a source adapter, consumed by the outlier filter,
/// discarded after aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSample {
    /// Observed price in the deployment currency (INR)
    pub price: f64,
    /// Identifier of the source adapter that produced the sample
    pub source: &'static str,
}

impl PriceSample {
    pub fn new(price: f64, source: &'static str) -> Self {
        Self { price, source }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_parse() {
        assert_eq!("car".parse::<VehicleType>(), Ok(VehicleType::Car));
        assert_eq!("bike".parse::<VehicleType>(), Ok(VehicleType::Bike));
        assert!("truck".parse::<VehicleType>().is_err());
        assert!("Car".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_condition_parse_known() {
        assert_eq!(Condition::parse("excellent"), Condition::Excellent);
        assert_eq!(Condition::parse("Good"), Condition::Good);
        assert_eq!(Condition::parse("FAIR"), Condition::Fair);
        assert_eq!(Condition::parse("poor"), Condition::Poor);
    }

    #[test]
    fn test_condition_parse_unknown_defaults_to_good() {
        assert_eq!(Condition::parse("mint"), Condition::Good);
        assert_eq!(Condition::parse(""), Condition::Good);
        assert_eq!(Condition::parse("mint").factor(), 1.0);
    }

    #[test]
    fn test_condition_factors() {
        assert_eq!(Condition::Excellent.factor(), 1.15);
        assert_eq!(Condition::Good.factor(), 1.0);
        assert_eq!(Condition::Fair.factor(), 0.85);
        assert_eq!(Condition::Poor.factor(), 0.65);
    }

    #[test]
    fn test_cache_key_is_deterministic_and_lowercased() {
        let a = VehicleDescriptor::new("Maruti", "Swift", 2020, VehicleType::Car);
        let b = VehicleDescriptor::new("maruti", "SWIFT", 2020, VehicleType::Car);

        assert_eq!(a.cache_key(Condition::Good), "car_maruti_swift_2020_good");
        assert_eq!(a.cache_key(Condition::Good), b.cache_key(Condition::Good));
    }

    #[test]
    fn test_cache_key_varies_by_condition_and_type() {
        let d = VehicleDescriptor::new("hero", "splendor", 2021, VehicleType::Bike);
        assert_ne!(d.cache_key(Condition::Good), d.cache_key(Condition::Poor));
        assert!(d.cache_key(Condition::Fair).starts_with("bike_"));
    }
}
