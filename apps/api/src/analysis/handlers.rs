//! Axum route handlers for the stateless Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::domain::{Domain, Template};
use crate::analysis::engine::{AnalysisInput, AnalysisResult};
use crate::analysis::keywords::domain_keywords;
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::validation::validate_submission;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
    pub domain: String,
}

#[derive(Debug, Serialize)]
pub struct DomainInfo {
    pub domain: Domain,
    pub label: &'static str,
    pub keyword_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores already-extracted resume text against a job description without a session.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    validate_submission(!request.resume_text.trim().is_empty(), &request.job_description)?;
    let domain: Domain = request
        .domain
        .parse()
        .map_err(|e| AppError::Validation(format!("{e}")))?;

    let input = AnalysisInput {
        resume_text: request.resume_text,
        job_description: request.job_description,
        domain,
    };
    Ok(Json(state.analyzer.analyze(&input).await))
}

/// GET /api/v1/domains
pub async fn handle_list_domains() -> Json<Vec<DomainInfo>> {
    Json(
        Domain::ALL
            .into_iter()
            .map(|domain| DomainInfo {
                domain,
                label: domain.label(),
                keyword_count: domain_keywords(domain).len(),
            })
            .collect(),
    )
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<Template>> {
    Json(Template::ALL.to_vec())
}
