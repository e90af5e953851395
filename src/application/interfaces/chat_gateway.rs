use async_trait::async_trait;

use crate::domain::{DomainError, ReplyEnvelope};

/// What the chat server answered: its HTTP status and whichever envelope it
/// sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub status: u16,
    pub envelope: ReplyEnvelope,
}

impl GatewayReply {
    pub fn new(status: u16, envelope: ReplyEnvelope) -> Self {
        Self { status, envelope }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client-side port to the request handler.
///
/// Any reply the server produced, error statuses included, comes back as
/// `Ok`. `Err` is reserved for [`DomainError::Transport`]: the server could
/// not be reached or a success body could not be decoded.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send_prompt(&self, prompt: &str) -> Result<GatewayReply, DomainError>;
}
