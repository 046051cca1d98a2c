mod config;
mod errors;
mod insights;
mod models;
mod prediction;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::prediction::parser::ResumeFeatureParser;
use crate::prediction::store::FabricatedFeatureStore;
use crate::routes::build_router;
use crate::scoring::MockScoringEngine;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement Predictor API v{}", env!("CARGO_PKG_VERSION"));

    // Capabilities: mock engine and fabricated store until real backends exist.
    // Swapping in a trained model or a database-backed store happens here and
    // nowhere else.
    let engine = Arc::new(MockScoringEngine);
    let store = Arc::new(FabricatedFeatureStore);
    let parser = Arc::new(ResumeFeatureParser::new());
    info!("Scoring engine and explainer initialized (backend: mock)");

    let state = AppState {
        engine,
        store,
        parser,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // open tool: any origin, no auth

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
