use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

use crate::domain::{DomainError, ErrorResponse, PromptRequest, PromptResponse};

use super::super::Container;

/// `POST /api/chat`: validate, relay, wrap.
pub struct ChatController {
    container: Arc<Container>,
}

impl ChatController {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    /// Validation runs before the configuration check, and both run before
    /// any call to the completion service.
    pub async fn chat(&self, body: &[u8]) -> Result<PromptResponse, DomainError> {
        let request = PromptRequest::parse(body)?;
        let use_case = self.container.relay_use_case();
        let response = use_case.execute(&request).await?;
        Ok(PromptResponse { response })
    }
}

/// Axum entry point. Takes the raw body so that a missing or mistyped
/// `prompt` yields our own 400 envelope rather than axum's rejection.
pub async fn chat_handler(State(container): State<Arc<Container>>, body: Bytes) -> Response {
    debug!("POST /api/chat ({} bytes)", body.len());

    match ChatController::new(container).chat(&body).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(err) => {
            error!(
                "API route error: {err}{}",
                err.details().map(|d| format!(" ({d})")).unwrap_or_default()
            );
            err.into_response()
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
