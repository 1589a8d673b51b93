//! Student Insight API Server
//!
//! Serves a pre-trained student-performance model over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  STUDENT INSIGHT API                   │
//! ├────────────────────────────────────────────────────────┤
//! │  POST /predict ──┐                                     │
//! │                  ├─► Feature Deriver ─► Classifier     │
//! │  POST /analyze ──┘          │                          │
//! │                             ▼ (/predict only)          │
//! │                    ┌──────────────────┐                │
//! │                    │ ModelHandle (Arc)│ loaded once    │
//! │                    └──────────────────┘                │
//! └────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod extract;
mod handlers;
mod models;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use insight_core::ModelHandle;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, LogFormat};
pub use error::AppResult;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    init_tracing(config.log_format);

    tracing::info!("Student Insight API starting...");
    tracing::info!("Model: {}", config.model_path);
    if !config.is_production() {
        tracing::warn!("Running in {} mode", config.environment);
    }

    // Load the model; any failure here is fatal
    let model = ModelHandle::load(&config.model_path)
        .with_context(|| format!("Could not load model from {}", config.model_path))?;

    // Build application state
    let state = AppState {
        model: Arc::new(model),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Application shutting down");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "student_insight_api=debug,insight_core=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ModelHandle>,
    pub config: Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::index))
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::insight::predict))
        .route("/analyze", post(handlers::insight::analyze))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}
