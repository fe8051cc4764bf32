//! Request DTOs for the valuation API
//!
//! Defines the query-string shape of incoming valuation requests and its
//! validation into typed domain values.

use serde::Deserialize;

use crate::error::ApiError;
use crate::models::domain::{Condition, VehicleDescriptor, VehicleType};

/// Query parameters for the valuation endpoints.
///
/// All fields arrive as optional strings so validation can produce the
/// documented error bodies instead of a generic deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValuationQuery {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

impl ValuationQuery {
    /// Validates the query into a descriptor and condition.
    ///
    /// `forced_type` pins the vehicle type for the legacy `/api/car-price`
    /// and `/api/bike-price` aliases; otherwise `vehicle_type` is read from
    /// the query, defaulting to `car`.
    ///
    /// A year that does not parse as an integer is treated the same as a
    /// missing year.
    pub fn validate(
        &self,
        forced_type: Option<VehicleType>,
    ) -> Result<(VehicleDescriptor, Condition), ApiError> {
        let vehicle_type = match forced_type {
            Some(vt) => vt,
            None => match self.vehicle_type.as_deref() {
                None | Some("") => VehicleType::Car,
                Some(raw) => raw.parse().map_err(|_| ApiError::InvalidVehicleType)?,
            },
        };

        let make = self.make.as_deref().unwrap_or("").trim();
        let model = self.model.as_deref().unwrap_or("").trim();
        let year = self
            .year
            .as_deref()
            .and_then(|y| y.trim().parse::<i32>().ok());

        let (year, make, model) = match (year, make, model) {
            (Some(y), m, md) if !m.is_empty() && !md.is_empty() => (y, m, md),
            _ => return Err(ApiError::MissingParameters),
        };

        let condition = Condition::parse(self.condition.as_deref().unwrap_or("good"));
        let descriptor = VehicleDescriptor::new(make, model, year, vehicle_type);
        Ok((descriptor, condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_query() -> ValuationQuery {
        ValuationQuery {
            make: Some("Maruti".to_string()),
            model: Some("Swift".to_string()),
            year: Some("2020".to_string()),
            condition: Some("excellent".to_string()),
            vehicle_type: Some("car".to_string()),
        }
    }

    #[test]
    fn test_validate_full_query() {
        let (descriptor, condition) = full_query().validate(None).unwrap();
        assert_eq!(descriptor.make, "Maruti");
        assert_eq!(descriptor.year, 2020);
        assert_eq!(descriptor.vehicle_type, VehicleType::Car);
        assert_eq!(condition, Condition::Excellent);
    }

    #[test]
    fn test_validate_defaults_vehicle_type_to_car() {
        let mut q = full_query();
        q.vehicle_type = None;
        let (descriptor, _) = q.validate(None).unwrap();
        assert_eq!(descriptor.vehicle_type, VehicleType::Car);
    }

    #[test]
    fn test_validate_missing_make_is_rejected() {
        let mut q = full_query();
        q.make = None;
        assert!(matches!(
            q.validate(None),
            Err(ApiError::MissingParameters)
        ));
    }

    #[test]
    fn test_validate_empty_model_is_rejected() {
        let mut q = full_query();
        q.model = Some("  ".to_string());
        assert!(matches!(
            q.validate(None),
            Err(ApiError::MissingParameters)
        ));
    }

    #[test]
    fn test_validate_non_numeric_year_is_rejected() {
        let mut q = full_query();
        q.year = Some("twenty-twenty".to_string());
        assert!(matches!(
            q.validate(None),
            Err(ApiError::MissingParameters)
        ));
    }

    #[test]
    fn test_validate_invalid_vehicle_type() {
        let mut q = full_query();
        q.vehicle_type = Some("truck".to_string());
        assert!(matches!(
            q.validate(None),
            Err(ApiError::InvalidVehicleType)
        ));
    }

    #[test]
    fn test_validate_forced_type_ignores_query_type() {
        let mut q = full_query();
        q.vehicle_type = Some("truck".to_string());
        let (descriptor, _) = q.validate(Some(VehicleType::Bike)).unwrap();
        assert_eq!(descriptor.vehicle_type, VehicleType::Bike);
    }

    #[test]
    fn test_validate_missing_condition_defaults_to_good() {
        let mut q = full_query();
        q.condition = None;
        let (_, condition) = q.validate(None).unwrap();
        assert_eq!(condition, Condition::Good);
    }
}
