use async_trait::async_trait;
use serde_json::{json, Value};

use crate::application::CompletionService;
use crate::domain::{CompletionRequest, DomainError};

/// Offline stand-in for the completion service. Echoes the prompt back in the
/// Responses API shape, so extraction runs exactly as it would against the
/// real API.
pub struct MockCompletion;

impl MockCompletion {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn create_response(&self, request: &CompletionRequest) -> Result<Value, DomainError> {
        let text = format!("Oh, you want to talk about \"{}\"? Bold.", request.input.trim());
        Ok(json!({
            "model": request.model,
            "output": [{
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "output_text", "text": text }]
            }]
        }))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
