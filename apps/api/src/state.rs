use std::sync::Arc;

use crate::analysis::engine::Analyzer;
use crate::config::Config;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer. Default: KeywordAnalyzer with the configured delay and strategy.
    pub analyzer: Arc<dyn Analyzer>,
    /// In-memory sessions; lost on restart.
    pub sessions: SessionStore,
}
