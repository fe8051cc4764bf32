//! Fallback Valuation Model
//!
//! Synthesizes a price estimate when no usable market samples exist: a
//! static base-price table keyed by make, a year-based depreciation curve,
//! a condition multiplier, and one bounded jitter draw. This model never
//! fails; unknown makes get a category default.

use rand::Rng;

use crate::models::{Condition, VehicleDescriptor, VehicleType};

/// Fixed epoch for the depreciation curve. Wall-clock independence keeps the
/// deterministic core reproducible across deployments.
pub const REFERENCE_YEAR: i32 = 2025;

/// Value lost per year of age.
pub const DEPRECIATION_RATE: f64 = 0.08;

/// A vehicle never depreciates below this fraction of its base price.
pub const AGE_FLOOR: f64 = 0.4;

/// Confidence reported for synthetic estimates. Fixed: one jittered formula
/// output gives no statistical basis to vary it.
pub const FALLBACK_CONFIDENCE: f64 = 0.7;

/// Source label reported for synthetic estimates.
pub const FALLBACK_SOURCE: &str = "fallback_algorithm";

/// Base prices for common car makes in INR.
const CAR_BASE_PRICES: &[(&str, f64)] = &[
    ("maruti", 600_000.0),
    ("hyundai", 800_000.0),
    ("tata", 700_000.0),
    ("mahindra", 1_000_000.0),
    ("toyota", 1_200_000.0),
    ("honda", 1_000_000.0),
    ("kia", 900_000.0),
    ("mg", 1_500_000.0),
    ("ford", 1_100_000.0),
    ("volkswagen", 1_200_000.0),
    ("skoda", 1_300_000.0),
    ("renault", 700_000.0),
    ("nissan", 800_000.0),
    ("jeep", 1_800_000.0),
    ("mercedes", 5_000_000.0),
    ("bmw", 4_500_000.0),
    ("audi", 4_000_000.0),
    ("lexus", 5_500_000.0),
    ("jaguar", 5_000_000.0),
    ("land rover", 7_000_000.0),
    ("volvo", 4_000_000.0),
];

/// Base prices for common bike makes in INR.
const BIKE_BASE_PRICES: &[(&str, f64)] = &[
    ("hero", 80_000.0),
    ("bajaj", 100_000.0),
    ("tvs", 90_000.0),
    ("honda", 120_000.0),
    ("yamaha", 130_000.0),
    ("suzuki", 140_000.0),
    ("royal enfield", 180_000.0),
    ("ktm", 200_000.0),
    ("kawasaki", 300_000.0),
    ("harley davidson", 1_000_000.0),
    ("triumph", 800_000.0),
    ("ducati", 1_500_000.0),
    ("bmw", 1_800_000.0),
    ("jawa", 170_000.0),
    ("husqvarna", 220_000.0),
    ("benelli", 250_000.0),
];

/// Category default for makes absent from the tables.
const DEFAULT_CAR_PRICE: f64 = 800_000.0;
const DEFAULT_BIKE_PRICE: f64 = 100_000.0;

// == Fallback Estimate ==
/// Result of the synthetic valuation formula.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackEstimate {
    pub price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

/// Looks up the base price for a make, lowercased, with a category default.
pub fn base_price(vehicle_type: VehicleType, make: &str) -> f64 {
    let (table, default) = match vehicle_type {
        VehicleType::Car => (CAR_BASE_PRICES, DEFAULT_CAR_PRICE),
        VehicleType::Bike => (BIKE_BASE_PRICES, DEFAULT_BIKE_PRICE),
    };

    let make = make.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == make)
        .map(|(_, price)| *price)
        .unwrap_or(default)
}

/// Produces the synthetic estimate for a descriptor and condition.
///
/// The formula is deterministic except for a single uniform draw in
/// `[0.95, 1.05)` applied once per computation; cached reads replay the
/// stored result and never re-draw.
pub fn estimate(descriptor: &VehicleDescriptor, condition: Condition) -> FallbackEstimate {
    let base = base_price(descriptor.vehicle_type, &descriptor.make);

    // Widened so extreme caller-supplied years cannot overflow i32
    let age = i64::from(REFERENCE_YEAR) - i64::from(descriptor.year);
    let age_factor = 1.0 - age as f64 * DEPRECIATION_RATE;

    let raw = base * age_factor.max(AGE_FLOOR) * condition.factor();

    let jitter: f64 = rand::rng().random_range(0.95..1.05);
    let price = raw * jitter;

    FallbackEstimate {
        price,
        min_price: price * 0.9,
        max_price: price * 1.1,
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn car(make: &str, year: i32) -> VehicleDescriptor {
        VehicleDescriptor::new(make, "any", year, VehicleType::Car)
    }

    #[test]
    fn test_base_price_known_make_case_insensitive() {
        assert_eq!(base_price(VehicleType::Car, "maruti"), 600_000.0);
        assert_eq!(base_price(VehicleType::Car, "Maruti"), 600_000.0);
        assert_eq!(base_price(VehicleType::Bike, "Royal Enfield"), 180_000.0);
    }

    #[test]
    fn test_base_price_unknown_make_uses_category_default() {
        assert_eq!(base_price(VehicleType::Car, "zaporozhets"), 800_000.0);
        assert_eq!(base_price(VehicleType::Bike, "zaporozhets"), 100_000.0);
    }

    #[test]
    fn test_same_make_differs_by_vehicle_type() {
        assert_eq!(base_price(VehicleType::Car, "bmw"), 4_500_000.0);
        assert_eq!(base_price(VehicleType::Bike, "bmw"), 1_800_000.0);
    }

    #[test]
    fn test_reference_year_good_condition_stays_within_jitter_band() {
        let est = estimate(&car("maruti", REFERENCE_YEAR), Condition::Good);
        assert!(est.price >= 600_000.0 * 0.95);
        assert!(est.price <= 600_000.0 * 1.05);
    }

    #[test]
    fn test_range_is_ten_percent_around_estimate() {
        let est = estimate(&car("toyota", 2022), Condition::Fair);
        assert!((est.min_price - est.price * 0.9).abs() < 1e-6);
        assert!((est.max_price - est.price * 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_age_factor_is_floored() {
        // A 20-year-old car would have a negative raw factor without the floor
        let old = estimate(&car("maruti", REFERENCE_YEAR - 20), Condition::Good);
        assert!(old.price >= 600_000.0 * AGE_FLOOR * 0.95);
        assert!(old.price <= 600_000.0 * AGE_FLOOR * 1.05);
    }

    #[test]
    fn test_condition_scales_estimate() {
        // Compare midpoints of the jitter bands rather than single draws
        let base = 600_000.0;
        let excellent_band = base * 1.15;
        let poor_band = base * 0.65;

        let excellent = estimate(&car("maruti", REFERENCE_YEAR), Condition::Excellent);
        let poor = estimate(&car("maruti", REFERENCE_YEAR), Condition::Poor);

        assert!(excellent.price >= excellent_band * 0.95);
        assert!(excellent.price <= excellent_band * 1.05);
        assert!(poor.price >= poor_band * 0.95);
        assert!(poor.price <= poor_band * 1.05);
    }

    #[test]
    fn test_extreme_years_never_panic() {
        // i32::MIN used to overflow the age subtraction
        let ancient = estimate(&car("maruti", i32::MIN), Condition::Good);
        assert!(ancient.price >= 600_000.0 * AGE_FLOOR * 0.95);
        assert!(ancient.price <= 600_000.0 * AGE_FLOOR * 1.05);

        let far_future = estimate(&car("maruti", i32::MAX), Condition::Good);
        assert!(far_future.price.is_finite());
        assert!(far_future.price > 0.0);
    }

    #[test]
    fn test_unknown_make_never_fails() {
        let est = estimate(&car("completely unknown", 2018), Condition::Good);
        assert!(est.price > 0.0);
        assert!(est.min_price < est.max_price);
    }
}
