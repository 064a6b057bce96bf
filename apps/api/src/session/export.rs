//! Download placeholder. No document is generated: after the configured delay the
//! caller receives a receipt describing what would have been exported.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::analysis::domain::{Domain, Template};
use crate::session::machine::ExportTarget;

pub const EXPORT_STATUS_PLACEHOLDER: &str = "placeholder";
pub const EXPORT_SUCCESS_MESSAGE: &str = "Enhanced resume downloaded successfully!";

#[derive(Debug, Clone, Serialize)]
pub struct ExportReceipt {
    pub status: &'static str,
    pub domain: Domain,
    pub template: Template,
    pub message: &'static str,
    pub generated_at: DateTime<Utc>,
}

pub async fn export_placeholder(target: ExportTarget, delay: Duration) -> ExportReceipt {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    info!(
        domain = %target.domain,
        template = %target.template,
        "Export placeholder issued; no file produced"
    );
    ExportReceipt {
        status: EXPORT_STATUS_PLACEHOLDER,
        domain: target.domain,
        template: target.template,
        message: EXPORT_SUCCESS_MESSAGE,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_receipt_after_delay() {
        let target = ExportTarget {
            domain: Domain::Marketing,
            template: Template::Minimal,
        };
        let started = tokio::time::Instant::now();
        let receipt = export_placeholder(target, Duration::from_secs(2)).await;

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(receipt.status, "placeholder");
        assert_eq!(receipt.template, Template::Minimal);
        assert_eq!(receipt.message, EXPORT_SUCCESS_MESSAGE);
    }
}
