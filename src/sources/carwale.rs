//! CarWale source adapter
//!
//! Cars are listed on carwale.com; bikes on its sibling site bikewale.com.

use async_trait::async_trait;

use crate::models::{VehicleDescriptor, VehicleType};
use crate::sources::{fetch_page, SourceAdapter, SourceError, SourceReport};

pub struct CarWaleAdapter {
    client: reqwest::Client,
}

impl CarWaleAdapter {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_url(descriptor: &VehicleDescriptor) -> String {
        let make = descriptor.make.to_lowercase();
        let model = descriptor.model.to_lowercase();
        match descriptor.vehicle_type {
            VehicleType::Car => format!(
                "https://www.carwale.com/{}-cars/{}/{}",
                make, model, descriptor.year
            ),
            VehicleType::Bike => format!(
                "https://www.bikewale.com/{}/{}/{}",
                make, model, descriptor.year
            ),
        }
    }
}

#[async_trait]
impl SourceAdapter for CarWaleAdapter {
    fn name(&self) -> &'static str {
        "carwale"
    }

    async fn fetch(&self, descriptor: &VehicleDescriptor) -> Result<SourceReport, SourceError> {
        let url = Self::build_url(descriptor);
        fetch_page(&self.client, &url, self.name()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_url() {
        let d = VehicleDescriptor::new("Maruti", "Swift", 2020, VehicleType::Car);
        assert_eq!(
            CarWaleAdapter::build_url(&d),
            "https://www.carwale.com/maruti-cars/swift/2020"
        );
    }

    #[test]
    fn test_bike_url() {
        let d = VehicleDescriptor::new("Bajaj", "Pulsar", 2022, VehicleType::Bike);
        assert_eq!(
            CarWaleAdapter::build_url(&d),
            "https://www.bikewale.com/bajaj/pulsar/2022"
        );
    }
}
