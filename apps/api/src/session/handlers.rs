//! Axum route handlers for the Session API: upload → analyze → review → download.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use anyhow::anyhow;
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analysis::domain::{Domain, Template};
use crate::errors::AppError;
use crate::session::export::{export_placeholder, ExportReceipt};
use crate::session::machine::{ResumeFile, SessionView};
use crate::state::AppState;
use crate::upload::extract::extract_resume_text;
use crate::upload::validation::{validate_resume_upload, UploadError};

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct SessionAnalyzeRequest {
    pub job_description: String,
    pub domain: String,
    #[serde(default)]
    pub template: Option<String>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(state.sessions.create().await))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.view(id).await?))
}

/// POST /api/v1/sessions/:id/resume
///
/// Accepts a multipart upload with a `resume` PDF field, validates it, extracts its
/// text and moves the session to `file_selected`. Rejections leave the session as it was.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    // Fail fast on unknown sessions before reading the body.
    state.sessions.view(id).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        if let Err(e) = validate_resume_upload(content_type.as_deref(), data.len()) {
            warn!(session_id = %id, file_name = %file_name, "Resume upload rejected: {e}");
            return Err(e.into());
        }

        let size = data.len();
        let text = extract_resume_text(data).await?;
        let view = state
            .sessions
            .update(id, |s| {
                s.select_file(ResumeFile {
                    file_name,
                    size,
                    text,
                });
                Ok(s.view())
            })
            .await?;

        info!(session_id = %id, bytes = size, "Resume uploaded");
        return Ok(Json(view));
    }

    Err(UploadError::MissingResumeField.into())
}

/// POST /api/v1/sessions/:id/analyze
///
/// Runs the analyzer on the session's resume. The session stays `analyzing`
/// for the duration; the lock is not held across the analyzer call.
///
/// The run executes on its own task, so a client that disconnects mid-analysis
/// still leaves the session in `results_ready`.
pub async fn handle_session_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SessionAnalyzeRequest>,
) -> Result<Json<SessionView>, AppError> {
    let domain: Domain = request
        .domain
        .parse()
        .map_err(|e| AppError::Validation(format!("{e}")))?;
    let template = match request.template.as_deref() {
        Some(t) => t
            .parse::<Template>()
            .map_err(|e| AppError::Validation(format!("{e}")))?,
        None => Template::default(),
    };

    let ticket = state
        .sessions
        .update(id, |s| s.begin_analysis(request.job_description, domain, template))
        .await?;

    let run = ticket.run;
    let analyzer = state.analyzer.clone();
    let sessions = state.sessions.clone();
    let task = tokio::spawn(async move {
        let result = analyzer.analyze(&ticket.input).await;
        sessions
            .update(id, |s| {
                s.complete_analysis(ticket.run, result)?;
                Ok(s.view())
            })
            .await
    });

    match task.await {
        Ok(view) => Ok(Json(view?)),
        Err(e) => {
            error!(session_id = %id, run, "Analysis task failed: {e}");
            state
                .sessions
                .update(id, |s| {
                    s.abort_analysis(run);
                    Ok(())
                })
                .await?;
            Err(anyhow!("analysis task failed: {e}").into())
        }
    }
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    info!(session_id = %id, "Session deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/review
pub async fn handle_mark_reviewed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .update(id, |s| {
            s.mark_reviewed()?;
            Ok(s.view())
        })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/download
///
/// Placeholder export, gated on reviewed suggestions. Produces no file.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportReceipt>, AppError> {
    let target = state.sessions.read(id, |s| s.export_target()).await?;
    Ok(Json(
        export_placeholder(target, state.config.export_delay).await,
    ))
}
