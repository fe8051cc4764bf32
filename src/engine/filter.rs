//! Outlier Filter Module
//!
//! Scraped listing text frequently contains unrelated numbers (phone
//! numbers, EMI promotions, registration fees). Samples outside the
//! category-specific plausibility band are dropped silently before
//! aggregation.

use tracing::debug;

use crate::models::{PriceSample, VehicleType};

/// Plausible car price band in INR (1 lakh to 2 crore).
pub const CAR_PRICE_BOUNDS: (f64, f64) = (100_000.0, 20_000_000.0);

/// Plausible bike price band in INR (50k to 30 lakh).
pub const BIKE_PRICE_BOUNDS: (f64, f64) = (50_000.0, 3_000_000.0);

/// Returns the `(min, max)` plausibility bounds for a vehicle type.
pub fn plausible_bounds(vehicle_type: VehicleType) -> (f64, f64) {
    match vehicle_type {
        VehicleType::Car => CAR_PRICE_BOUNDS,
        VehicleType::Bike => BIKE_PRICE_BOUNDS,
    }
}

/// Keeps only samples inside the plausibility band for the vehicle type.
///
/// Out-of-band samples are not errors; they are logged at debug level and
/// dropped.
pub fn filter_outliers(samples: &[PriceSample], vehicle_type: VehicleType) -> Vec<f64> {
    let (min_bound, max_bound) = plausible_bounds(vehicle_type);

    samples
        .iter()
        .filter_map(|sample| {
            if sample.price >= min_bound && sample.price <= max_bound {
                Some(sample.price)
            } else {
                debug!(
                    price = sample.price,
                    source = sample.source,
                    "dropping implausible price sample"
                );
                None
            }
        })
        .collect()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn samples(prices: &[f64]) -> Vec<PriceSample> {
        prices.iter().map(|&p| PriceSample::new(p, "test")).collect()
    }

    #[test]
    fn test_car_filter_drops_below_lower_bound() {
        let kept = filter_outliers(&samples(&[500.0, 900_000.0]), VehicleType::Car);
        assert_eq!(kept, vec![900_000.0]);
    }

    #[test]
    fn test_car_filter_drops_above_upper_bound() {
        let kept = filter_outliers(&samples(&[25_000_000.0, 1_500_000.0]), VehicleType::Car);
        assert_eq!(kept, vec![1_500_000.0]);
    }

    #[test]
    fn test_bike_bounds_differ_from_car_bounds() {
        // 60k is a plausible bike price but not a plausible car price
        let kept_bike = filter_outliers(&samples(&[60_000.0]), VehicleType::Bike);
        let kept_car = filter_outliers(&samples(&[60_000.0]), VehicleType::Car);
        assert_eq!(kept_bike, vec![60_000.0]);
        assert!(kept_car.is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let kept = filter_outliers(&samples(&[100_000.0, 20_000_000.0]), VehicleType::Car);
        assert_eq!(kept, vec![100_000.0, 20_000_000.0]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_outliers(&[], VehicleType::Bike).is_empty());
    }

    proptest! {
        #[test]
        fn prop_all_survivors_are_in_band(prices in prop::collection::vec(0.0f64..50_000_000.0, 0..30)) {
            let kept = filter_outliers(&samples(&prices), VehicleType::Car);
            let (lo, hi) = plausible_bounds(VehicleType::Car);
            prop_assert!(kept.iter().all(|&p| (lo..=hi).contains(&p)));
        }

        #[test]
        fn prop_filter_never_invents_samples(prices in prop::collection::vec(0.0f64..50_000_000.0, 0..30)) {
            let kept = filter_outliers(&samples(&prices), VehicleType::Bike);
            prop_assert!(kept.len() <= prices.len());
            prop_assert!(kept.iter().all(|p| prices.contains(p)));
        }
    }
}
