pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::session::handlers as session;
use crate::state::AppState;

/// Transport-level body cap. Kept above the 5 MiB resume ceiling so oversized
/// files are rejected by upload validation with a readable message.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalogue
        .route("/api/v1/domains", get(analysis::handle_list_domains))
        .route("/api/v1/templates", get(analysis::handle_list_templates))
        // Stateless analysis
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        // Session workflow
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(session::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/analyze",
            post(session::handle_session_analyze),
        )
        .route(
            "/api/v1/sessions/:id/review",
            post(session::handle_mark_reviewed),
        )
        .route(
            "/api/v1/sessions/:id/download",
            post(session::handle_download),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
