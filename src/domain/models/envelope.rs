use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Decode and validate a raw request body.
    ///
    /// A body that is not JSON at all is an unexpected error. A JSON body
    /// whose `prompt` is missing, not a string, or empty is a validation error.
    pub fn parse(body: &[u8]) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| DomainError::unexpected(format!("invalid JSON body: {e}")))?;

        match value.get("prompt") {
            Some(Value::String(prompt)) if !prompt.is_empty() => Ok(Self::new(prompt.clone())),
            _ => Err(DomainError::prompt_required()),
        }
    }
}

/// Successful reply: `{ "response": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub response: String,
}

/// Failure reply: `{ "error": "...", "details": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            error: err.to_string(),
            details: err.details().map(str::to_string),
        }
    }
}

/// Either envelope, as seen by a client that has not yet looked at the status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReplyEnvelope {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_string_prompt() {
        let req = PromptRequest::parse(br#"{"prompt":"Tell me a joke"}"#).unwrap();
        assert_eq!(req.prompt, "Tell me a joke");
    }

    #[test]
    fn test_parse_keeps_whitespace() {
        let req = PromptRequest::parse(br#"{"prompt":"  hi \n"}"#).unwrap();
        assert_eq!(req.prompt, "  hi \n");
    }

    #[test]
    fn test_parse_rejects_missing_or_mistyped_prompt() {
        for body in [
            r#"{}"#,
            r#"{"prompt":null}"#,
            r#"{"prompt":42}"#,
            r#"{"prompt":true}"#,
            r#"{"prompt":["a"]}"#,
            r#"{"prompt":{"text":"a"}}"#,
            r#"{"prompt":""}"#,
            r#"[]"#,
            r#""just a string""#,
        ] {
            let err = PromptRequest::parse(body.as_bytes()).unwrap_err();
            assert!(err.is_validation(), "body {body} should be a validation error");
        }
    }

    #[test]
    fn test_parse_rejects_invalid_json_as_unexpected() {
        let err = PromptRequest::parse(b"prompt=hello").unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(err.details().unwrap().starts_with("invalid JSON body"));
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let body = serde_json::to_value(ErrorResponse::from(&DomainError::prompt_required()))
            .unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Prompt is required" }));
    }

    #[test]
    fn test_reply_envelope_tolerates_either_shape() {
        let ok: ReplyEnvelope = serde_json::from_str(r#"{"response":"hey"}"#).unwrap();
        assert_eq!(ok.response.as_deref(), Some("hey"));

        let err: ReplyEnvelope =
            serde_json::from_str(r#"{"error":"OpenAI API Error: 429","details":"slow down"}"#)
                .unwrap();
        assert_eq!(err.error.as_deref(), Some("OpenAI API Error: 429"));
        assert_eq!(err.details.as_deref(), Some("slow down"));
    }
}
