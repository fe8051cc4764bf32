//! API Routes
//!
//! Configures the Axum router with all valuation endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    bike_price_handler, car_price_handler, health_handler, vehicle_price_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/vehicle-price` - Primary valuation endpoint
/// - `GET /api/car-price` - Legacy alias, forces vehicle_type=car
/// - `GET /api/bike-price` - Forces vehicle_type=bike
/// - `GET /api/health` - Health check with cache size and source list
///
/// # Middleware
/// - CORS: Allows any origin (the web frontend runs on another port)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/vehicle-price", get(vehicle_price_handler))
        .route("/api/car-price", get(car_price_handler))
        .route("/api/bike-price", get(bike_price_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ValuationCache;
    use crate::engine::{EngineSettings, ValuationEngine};
    use crate::insights::InsightClient;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache = Arc::new(RwLock::new(ValuationCache::new(3600)));
        let engine = ValuationEngine::new(
            vec![],
            InsightClient::new(reqwest::Client::new(), None, 1),
            Arc::clone(&cache),
            EngineSettings {
                currency: "INR".to_string(),
                source_timeout: 5,
            },
        );
        create_router(AppState::new(Arc::new(engine), cache))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_vehicle_price_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/vehicle-price?make=maruti&model=swift&year=2020")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_params_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/vehicle-price?make=maruti")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
