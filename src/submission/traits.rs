//! Trait abstraction for the submission handler to enable mocking in tests

use crate::attachment::Attachment;
use crate::state::FormRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Receives each accepted submission exactly once
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    /// Hand over a validated record and its attachment
    async fn submit(&self, record: &FormRecord, attachment: &Attachment) -> Result<()>;
}
