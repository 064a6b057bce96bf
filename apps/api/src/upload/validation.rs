use thiserror::Error;

/// Upload ceiling for resume files: 5 MiB.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Rejections raised at the input boundary before any scoring happens.
/// All of them are recoverable: the caller fixes the input and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload a PDF file")]
    NotPdf,

    #[error("File size should be less than 5MB")]
    TooLarge { size: usize },

    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Multipart body has no 'resume' file field")]
    MissingResumeField,

    #[error("Could not read text from the PDF: {0}")]
    UnreadablePdf(String),
}

/// Checks a resume upload's declared type, then its size.
///
/// `content_type` may carry parameters (`application/pdf; name=cv.pdf`);
/// only the media type is compared, case-insensitively.
pub fn validate_resume_upload(content_type: Option<&str>, size: usize) -> Result<(), UploadError> {
    let is_pdf = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);

    if !is_pdf {
        return Err(UploadError::NotPdf);
    }
    if size > MAX_RESUME_BYTES {
        return Err(UploadError::TooLarge { size });
    }
    Ok(())
}

/// Submission gate: a resume must be present and the job description non-blank.
pub fn validate_submission(has_resume: bool, job_description: &str) -> Result<(), UploadError> {
    if !has_resume || job_description.trim().is_empty() {
        return Err(UploadError::MissingFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_under_limit_passes() {
        assert_eq!(validate_resume_upload(Some("application/pdf"), 1024), Ok(()));
    }

    #[test]
    fn test_exactly_five_mib_passes() {
        assert_eq!(
            validate_resume_upload(Some("application/pdf"), MAX_RESUME_BYTES),
            Ok(())
        );
    }

    #[test]
    fn test_one_byte_over_limit_is_rejected() {
        let err = validate_resume_upload(Some("application/pdf"), MAX_RESUME_BYTES + 1).unwrap_err();
        assert_eq!(err, UploadError::TooLarge { size: MAX_RESUME_BYTES + 1 });
        assert_eq!(err.to_string(), "File size should be less than 5MB");
    }

    #[test]
    fn test_non_pdf_is_rejected() {
        let err = validate_resume_upload(Some("text/plain"), 10).unwrap_err();
        assert_eq!(err, UploadError::NotPdf);
        assert_eq!(err.to_string(), "Please upload a PDF file");
    }

    #[test]
    fn test_missing_content_type_is_rejected() {
        assert_eq!(validate_resume_upload(None, 10), Err(UploadError::NotPdf));
    }

    #[test]
    fn test_type_checked_before_size() {
        assert_eq!(
            validate_resume_upload(Some("image/png"), MAX_RESUME_BYTES * 2),
            Err(UploadError::NotPdf)
        );
    }

    #[test]
    fn test_content_type_parameters_are_ignored() {
        assert_eq!(
            validate_resume_upload(Some("Application/PDF; name=cv.pdf"), 10),
            Ok(())
        );
    }

    #[test]
    fn test_submission_requires_resume_and_description() {
        assert_eq!(validate_submission(true, "Senior engineer"), Ok(()));
        assert_eq!(
            validate_submission(false, "Senior engineer"),
            Err(UploadError::MissingFields)
        );
        assert_eq!(validate_submission(true, ""), Err(UploadError::MissingFields));
        assert_eq!(
            validate_submission(true, "   \n"),
            Err(UploadError::MissingFields)
        );
    }
}
