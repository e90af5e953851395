use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{CompletionRequest, DomainError};

/// An interface for asking a hosted text-completion service for a reply.
///
/// Implementors own transport, authentication and vendor-specific request
/// shapes. They return the service's raw JSON reply; turning that into plain
/// text is the job of [`crate::application::extract_text`], so the extraction
/// policy can be tested without any HTTP at all.
///
/// A failure the service reports with a status code must surface as
/// [`DomainError::Upstream`]; anything else as [`DomainError::Unexpected`].
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn create_response(&self, request: &CompletionRequest) -> Result<Value, DomainError>;

    /// Short name used in log lines.
    fn name(&self) -> &str;
}
