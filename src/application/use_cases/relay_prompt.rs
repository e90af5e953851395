use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::use_cases::response_text::extract_text;
use crate::application::CompletionService;
use crate::domain::{CompletionRequest, DomainError, PromptRequest, ServerConfig};

/// Server side of a submission: check configuration, call the completion
/// service once, and normalize its payload to plain text.
///
/// The prompt must already be validated (see [`PromptRequest::parse`]).
pub struct RelayPromptUseCase {
    completion_service: Arc<dyn CompletionService>,
    config: Arc<ServerConfig>,
}

impl RelayPromptUseCase {
    pub fn new(completion_service: Arc<dyn CompletionService>, config: Arc<ServerConfig>) -> Self {
        Self {
            completion_service,
            config,
        }
    }

    pub async fn execute(&self, request: &PromptRequest) -> Result<String, DomainError> {
        if !self.config.has_api_key() {
            return Err(DomainError::api_key_missing());
        }

        let completion = CompletionRequest::new(
            self.config.model(),
            self.config.instructions(),
            request.prompt.as_str(),
        );

        debug!(
            "Relaying prompt ({} chars) to {} with model {}",
            request.prompt.len(),
            self.completion_service.name(),
            completion.model
        );

        let start_time = Instant::now();
        let payload = self.completion_service.create_response(&completion).await?;
        let text = extract_text(&payload);

        info!(
            "Completion returned {} chars in {:.2}s",
            text.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(text)
    }
}
