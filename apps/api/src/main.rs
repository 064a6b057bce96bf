mod analysis;
mod config;
mod errors;
mod routes;
mod session;
mod state;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::engine::KeywordAnalyzer;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::store::{spawn_sweeper, SessionStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Enhancer API v{}", env!("CARGO_PKG_VERSION"));

    let analyzer = Arc::new(KeywordAnalyzer::new(
        config.keyword_matching,
        config.analysis_delay,
    ));
    info!(
        "Keyword analyzer initialized (matching: {:?}, delay: {:?})",
        config.keyword_matching, config.analysis_delay
    );

    let sessions = SessionStore::new();
    spawn_sweeper(
        sessions.clone(),
        config.session_ttl,
        config.session_sweep_interval,
    );
    info!(
        "Session sweeper started (ttl: {:?}, every: {:?})",
        config.session_ttl, config.session_sweep_interval
    );

    let state = AppState {
        config: config.clone(),
        analyzer,
        sessions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
