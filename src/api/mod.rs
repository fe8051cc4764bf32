//! API Module
//!
//! HTTP handlers and routing for the valuation REST API.
//!
//! # Endpoints
//! - `GET /api/vehicle-price` - Primary valuation endpoint
//! - `GET /api/car-price` - Legacy alias, forces vehicle_type=car
//! - `GET /api/bike-price` - Forces vehicle_type=bike
//! - `GET /api/health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
