use std::sync::Arc;

use tracing::debug;

use crate::application::{CompletionService, RelayPromptUseCase};
use crate::connector::adapter::{MockCompletion, OpenAiClient};
use crate::domain::ServerConfig;

pub struct ContainerConfig {
    pub server: ServerConfig,
    /// Answer prompts with [`MockCompletion`] instead of calling OpenAI.
    ///
    /// A mock server needs no API key; one is filled in when absent.
    pub mock_completions: bool,
    /// Base URL of the Responses API (e.g. `https://api.openai.com/v1`).
    pub base_url: String,
}

/// Wires the completion service and the read-only configuration together.
///
/// Shared across request handlers behind an `Arc`; nothing in it is mutable.
pub struct Container {
    completion_service: Arc<dyn CompletionService>,
    server_config: Arc<ServerConfig>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let ContainerConfig {
            server,
            mock_completions,
            base_url,
        } = config;

        if mock_completions {
            debug!("Using mock completion service");
            let server = if server.has_api_key() {
                server
            } else {
                ServerConfig::new(Some("mock".to_string()), server.model())
                    .with_instructions(server.instructions())
            };
            return Self::with_completion_service(Arc::new(MockCompletion::new()), server);
        }

        debug!("Using OpenAI completion service at {}", base_url);
        let client = OpenAiClient::new(server.api_key().unwrap_or_default(), base_url);
        Self::with_completion_service(Arc::new(client), server)
    }

    /// Build around an already constructed completion service.
    pub fn with_completion_service(
        completion_service: Arc<dyn CompletionService>,
        server_config: ServerConfig,
    ) -> Self {
        Self {
            completion_service,
            server_config: Arc::new(server_config),
        }
    }

    pub fn relay_use_case(&self) -> RelayPromptUseCase {
        RelayPromptUseCase::new(self.completion_service.clone(), self.server_config.clone())
    }

    pub fn server_config(&self) -> &ServerConfig {
        &self.server_config
    }

    pub fn completion_service_name(&self) -> &str {
        self.completion_service.name()
    }
}
