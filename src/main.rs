//! VelaValue - Used-vehicle price estimation server
//!
//! Aggregates price observations from independent provider adapters, filters
//! implausible values, and falls back to a deterministic valuation model
//! when no market data is available.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use velavalue::api::{create_router, AppState};
use velavalue::cache::ValuationCache;
use velavalue::config::Config;
use velavalue::engine::{EngineSettings, ValuationEngine};
use velavalue::insights::InsightClient;
use velavalue::sources::{CarDekhoAdapter, CarWaleAdapter, SourceAdapter, ZigWheelsAdapter};
use velavalue::tasks::spawn_cleanup_task;

/// Main entry point for the VelaValue valuation server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the shared HTTP client, source adapters, and insight client
/// 4. Create the result cache and valuation engine
/// 5. Start the background TTL sweep task
/// 6. Create the Axum router and serve
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "velavalue=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting VelaValue Vehicle Price API");

    let config = Config::from_env();
    info!(
        port = config.server_port,
        cache_ttl = config.cache_ttl,
        cleanup_interval = config.cleanup_interval,
        source_timeout = config.source_timeout,
        currency = %config.currency,
        enrichment = config.gemini_api_key.is_some(),
        "configuration loaded"
    );

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.source_timeout))
        .build()?;

    let adapters: Vec<Arc<dyn SourceAdapter>> = vec![
        Arc::new(CarDekhoAdapter::new(http_client.clone())),
        Arc::new(CarWaleAdapter::new(http_client.clone())),
        Arc::new(ZigWheelsAdapter::new(http_client.clone())),
    ];

    let insight_client = InsightClient::new(
        http_client,
        config.gemini_api_key.clone(),
        config.insight_timeout,
    );

    let cache = Arc::new(RwLock::new(ValuationCache::new(config.cache_ttl)));
    let engine = ValuationEngine::new(
        adapters,
        insight_client,
        Arc::clone(&cache),
        EngineSettings {
            currency: config.currency.clone(),
            source_timeout: config.source_timeout,
        },
    );

    let state = AppState::new(Arc::new(engine), Arc::clone(&cache));
    info!("valuation engine initialized");

    let cleanup_handle = spawn_cleanup_task(cache, config.cleanup_interval);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Sweep task aborted");
}
