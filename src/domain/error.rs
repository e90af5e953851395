use thiserror::Error;

pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const API_KEY_NOT_CONFIGURED: &str = "API key not configured on server";

/// Every way a prompt submission can fail.
///
/// Server-side variants map deterministically onto an HTTP status and an
/// error envelope (see [`DomainError::status_code`] and
/// [`DomainError::details`]). `Transport` only occurs on the client side, when
/// the chat server itself cannot be reached or answers with garbage.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("OpenAI API Error: {status}")]
    Upstream { status: u16, message: String },

    #[error("Internal server error")]
    Unexpected(String),

    #[error("{0}")]
    Transport(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn prompt_required() -> Self {
        Self::validation(PROMPT_REQUIRED)
    }

    pub fn api_key_missing() -> Self {
        Self::configuration(API_KEY_NOT_CONFIGURED)
    }

    /// HTTP status reported to the caller. Upstream statuses outside the valid
    /// HTTP range collapse to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Configuration(_) | Self::Unexpected(_) => 500,
            Self::Upstream { status, .. } if (100..=999).contains(status) => *status,
            Self::Upstream { .. } => 500,
            Self::Transport(_) => 502,
        }
    }

    /// Secondary message for the `details` field of the error envelope.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Upstream { message, .. } | Self::Unexpected(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = DomainError::prompt_required();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Prompt is required");
        assert!(err.details().is_none());
    }

    #[test]
    fn test_configuration_maps_to_server_error() {
        let err = DomainError::api_key_missing();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "API key not configured on server");
    }

    #[test]
    fn test_upstream_propagates_status() {
        let err = DomainError::upstream(429, "Rate limit reached");
        assert_eq!(err.status_code(), 429);
        assert_eq!(err.to_string(), "OpenAI API Error: 429");
        assert_eq!(err.details(), Some("Rate limit reached"));
    }

    #[test]
    fn test_upstream_with_invalid_status_falls_back() {
        assert_eq!(DomainError::upstream(42, "odd").status_code(), 500);
        assert_eq!(DomainError::upstream(1200, "odd").status_code(), 500);
    }

    #[test]
    fn test_unexpected_hides_message_behind_generic_error() {
        let err = DomainError::unexpected("connection reset");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Internal server error");
        assert_eq!(err.details(), Some("connection reset"));
    }
}
