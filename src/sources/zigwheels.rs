//! ZigWheels source adapter
//!
//! Cars and bikes share zigwheels.com under different path schemes.

use async_trait::async_trait;

use crate::models::{VehicleDescriptor, VehicleType};
use crate::sources::{fetch_page, SourceAdapter, SourceError, SourceReport};

pub struct ZigWheelsAdapter {
    client: reqwest::Client,
}

impl ZigWheelsAdapter {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_url(descriptor: &VehicleDescriptor) -> String {
        let make = descriptor.make.to_lowercase();
        let model = descriptor.model.to_lowercase();
        match descriptor.vehicle_type {
            VehicleType::Car => format!(
                "https://www.zigwheels.com/{}-cars/{}/{}",
                make, model, descriptor.year
            ),
            VehicleType::Bike => format!(
                "https://www.zigwheels.com/bikes/{}/{}/{}",
                make, model, descriptor.year
            ),
        }
    }
}

#[async_trait]
impl SourceAdapter for ZigWheelsAdapter {
    fn name(&self) -> &'static str {
        "zigwheels"
    }

    async fn fetch(&self, descriptor: &VehicleDescriptor) -> Result<SourceReport, SourceError> {
        let url = Self::build_url(descriptor);
        fetch_page(&self.client, &url, self.name()).await
    }
}
