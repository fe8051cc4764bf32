//! CarDekho source adapter
//!
//! Cars are listed on cardekho.com; bikes on its sibling site bikedekho.com.

use async_trait::async_trait;

use crate::models::{VehicleDescriptor, VehicleType};
use crate::sources::{fetch_page, SourceAdapter, SourceError, SourceReport};

pub struct CarDekhoAdapter {
    client: reqwest::Client,
}

impl CarDekhoAdapter {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_url(descriptor: &VehicleDescriptor) -> String {
        match descriptor.vehicle_type {
            VehicleType::Car => format!(
                "https://www.cardekho.com/cars/{}/{}/specs/{}",
                descriptor.make, descriptor.model, descriptor.year
            ),
            VehicleType::Bike => format!(
                "https://www.bikedekho.com/{}-bikes/{}/specs/{}",
                descriptor.make.to_lowercase(),
                descriptor.model.to_lowercase(),
                descriptor.year
            ),
        }
    }
}

#[async_trait]
impl SourceAdapter for CarDekhoAdapter {
    fn name(&self) -> &'static str {
        "cardekho"
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
            CarDekhoAdapter::build_url(&d),
            "https://www.cardekho.com/cars/Maruti/Swift/specs/2020"
        );
    }

    #[test]
    fn test_bike_url_is_lowercased_on_sibling_site() {
        let d = VehicleDescriptor::new("Hero", "Splendor", 2021, VehicleType::Bike);
        assert_eq!(
            CarDekhoAdapter::build_url(&d),
            "https://www.bikedekho.com/hero-bikes/splendor/specs/2021"
        );
    }
}
