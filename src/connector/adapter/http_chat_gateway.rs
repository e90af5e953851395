use async_trait::async_trait;
use tracing::debug;

use crate::application::{ChatGateway, GatewayReply};
use crate::domain::{DomainError, PromptRequest, ReplyEnvelope};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";
const CHAT_PATH: &str = "/api/chat";

/// [`ChatGateway`] that posts prompts to a running `chatty serve`.
///
/// No timeout is set beyond reqwest's defaults; a submission waits until the
/// server answers or the connection fails.
pub struct HttpChatGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpChatGateway {
    pub fn new(server_url: impl Into<String>) -> Self {
        let base: String = server_url.into();
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{CHAT_PATH}", base.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn send_prompt(&self, prompt: &str) -> Result<GatewayReply, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PromptRequest::new(prompt))
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Could not reach {}: {e}", self.url)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("Failed to read server response: {e}")))?;

        debug!("HttpChatGateway: {status} ({} bytes)", body.len());

        // An error status with an unreadable body still tells the user something.
        let envelope = match serde_json::from_str::<ReplyEnvelope>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => ReplyEnvelope::default(),
            Err(e) => {
                return Err(DomainError::transport(format!(
                    "Invalid response from chat server: {e}"
                )))
            }
        };

        Ok(GatewayReply::new(status.as_u16(), envelope))
    }
}
