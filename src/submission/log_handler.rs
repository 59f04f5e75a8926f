//! Default submission handler: records the submission in the log

use super::traits::SubmissionHandler;
use crate::attachment::Attachment;
use crate::state::FormRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Placeholder handler until a backend exists
#[derive(Debug, Clone, Default)]
pub struct LogSubmissionHandler;

#[async_trait]
impl SubmissionHandler for LogSubmissionHandler {
    async fn submit(&self, record: &FormRecord, attachment: &Attachment) -> Result<()> {
        let record_json = serde_json::to_string(record)?;
        tracing::info!(
            record = %record_json,
            file = %attachment.name,
            size_kib = %attachment.size_kib(),
            mime = attachment.kind.mime_type(),
            "form submitted"
        );
        Ok(())
    }
}
