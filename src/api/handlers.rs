//! API Handlers
//!
//! HTTP request handlers for each valuation endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::ValuationCache;
use crate::engine::ValuationEngine;
use crate::error::Result;
use crate::models::{HealthResponse, Valuation, ValuationQuery, VehicleType};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The valuation pipeline
    pub engine: Arc<ValuationEngine>,
    /// Shared result cache, also read by the health endpoint and sweep task
    pub cache: Arc<RwLock<ValuationCache>>,
}

impl AppState {
    pub fn new(engine: Arc<ValuationEngine>, cache: Arc<RwLock<ValuationCache>>) -> Self {
        Self { engine, cache }
    }
}

/// Handler for GET /api/vehicle-price
///
/// Primary endpoint; `vehicle_type` defaults to `car` when absent.
pub async fn vehicle_price_handler(
    State(state): State<AppState>,
    Query(query): Query<ValuationQuery>,
) -> Result<Json<Valuation>> {
    let (descriptor, condition) = query.validate(None)?;
    Ok(Json(state.engine.appraise(&descriptor, condition).await))
}

/// Handler for GET /api/car-price (legacy alias, forces car)
pub async fn car_price_handler(
    State(state): State<AppState>,
    Query(query): Query<ValuationQuery>,
) -> Result<Json<Valuation>> {
    let (descriptor, condition) = query.validate(Some(VehicleType::Car))?;
    Ok(Json(state.engine.appraise(&descriptor, condition).await))
}

/// Handler for GET /api/bike-price (forces bike)
pub async fn bike_price_handler(
    State(state): State<AppState>,
    Query(query): Query<ValuationQuery>,
) -> Result<Json<Valuation>> {
    let (descriptor, condition) = query.validate(Some(VehicleType::Bike))?;
    Ok(Json(state.engine.appraise(&descriptor, condition).await))
}

/// Handler for GET /api/health
///
/// Reports service status, the live cache size, and this deployment's
/// supported vehicle types and sources.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache_size = state.cache.read().await.len();

    let mut sources = state.engine.source_names();
    sources.push("gemini");

    Json(HealthResponse::new(
        state.engine.currency(),
        &sources,
        cache_size,
    ))
}
