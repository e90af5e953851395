use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::CompletionService;
use crate::domain::{CompletionRequest, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const RESPONSES_PATH: &str = "/responses";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for the OpenAI Responses API (and compatible servers).
///
/// Implements [`CompletionService`] so the relay use case never sees
/// transport or serialization details. Non-success statuses become
/// [`DomainError::Upstream`] carrying the status and OpenAI's error message;
/// connection and decoding failures become [`DomainError::Unexpected`].
///
/// ```text
/// OPENAI_BASE_URL=https://api.openai.com/v1
/// OPENAI_API_KEY=sk-...
/// ```
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + RESPONSES_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{RESPONSES_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }

    /// Base URL from `OPENAI_BASE_URL`, defaulting to the public API.
    pub fn configured_base_url() -> String {
        std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Message for an upstream failure, shaped like the SDK's: `"<status> <message>"`.
///
/// Prefers `error.message` from a JSON body, then the raw body, then the
/// status reason phrase.
fn upstream_error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    let message = from_json
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    format!("{} {}", status.as_u16(), message)
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn create_response(&self, request: &CompletionRequest) -> Result<Value, DomainError> {
        debug!("OpenAiClient: POST {} model={}", self.url, request.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::unexpected(format!("OpenAI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::upstream(
                status.as_u16(),
                upstream_error_message(status, &body),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| DomainError::unexpected(format!("failed to parse OpenAI response: {e}")))
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = OpenAiClient::new("sk", "http://localhost:8080/v1/");
        assert_eq!(client.url(), "http://localhost:8080/v1/responses");
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#;
        assert_eq!(
            upstream_error_message(StatusCode::TOO_MANY_REQUESTS, body),
            "429 Rate limit reached"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            upstream_error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "502 upstream down"
        );
        assert_eq!(
            upstream_error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "503 Service Unavailable"
        );
    }
}
