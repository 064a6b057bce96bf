use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::session::machine::SessionError;
use crate::upload::validation::UploadError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        match e {
            UploadError::UnreadablePdf(_) => AppError::UnprocessableEntity(e.to_string()),
            _ => AppError::Validation(e.to_string()),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => AppError::NotFound(e.to_string()),
            SessionError::Input(upload) => upload.into(),
            SessionError::NotReviewed
            | SessionError::NoResults
            | SessionError::AlreadyAnalyzing
            | SessionError::StaleAnalysis => AppError::Conflict(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_upload_errors_map_to_status() {
        let not_pdf: AppError = UploadError::NotPdf.into();
        assert_eq!(not_pdf.into_response().status(), StatusCode::BAD_REQUEST);

        let unreadable: AppError = UploadError::UnreadablePdf("bad xref".into()).into();
        assert_eq!(
            unreadable.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_session_errors_map_to_status() {
        let missing: AppError = SessionError::NotFound(Uuid::new_v4()).into();
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let not_reviewed: AppError = SessionError::NotReviewed.into();
        assert_eq!(not_reviewed.into_response().status(), StatusCode::CONFLICT);

        let blank: AppError = SessionError::Input(UploadError::MissingFields).into();
        assert_eq!(blank.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err: AppError = anyhow::anyhow!("analysis task failed: panicked").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        match AppError::from(UploadError::TooLarge { size: 6_000_000 }) {
            AppError::Validation(msg) => assert_eq!(msg, "File size should be less than 5MB"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
