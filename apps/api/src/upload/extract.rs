//! PDF → plain text for scoring.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::upload::validation::UploadError;

/// Extracts the text layer of a PDF.
///
/// Parsing runs on the blocking pool; a parser error or panic becomes `UnreadablePdf`.
pub async fn extract_resume_text(pdf: Bytes) -> Result<String, UploadError> {
    let size = pdf.len();
    let outcome = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&pdf).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| {
        warn!("PDF parser aborted: {e}");
        UploadError::UnreadablePdf("parser aborted".to_string())
    })?;

    match outcome {
        Ok(text) => {
            debug!(bytes = size, chars = text.len(), "Extracted resume text");
            Ok(text)
        }
        Err(e) => {
            warn!("PDF text extraction failed: {e}");
            Err(UploadError::UnreadablePdf(e))
        }
    }
}
