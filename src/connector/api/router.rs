use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::post;
use tokio::net::TcpListener;
use tracing::info;

use super::container::Container;
use super::controller::chat_handler;

pub const CHAT_ROUTE: &str = "/api/chat";

/// The HTTP surface of the request handler.
pub fn router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route(CHAT_ROUTE, post(chat_handler))
        .with_state(container)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        "Chat server listening on http://{} (completions: {}, model: {})",
        listener.local_addr()?,
        container.completion_service_name(),
        container.server_config().model()
    );
    if !container.server_config().has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set; every prompt will be answered with a 500");
    }

    axum::serve(listener, router(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Chat server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
