//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion services (OpenAI Responses API, offline mock)
//! - The HTTP gateway the chat surface uses to reach the server
//! - The axum API serving `POST /api/chat`
//! - The terminal chat surface

pub mod adapter;
pub mod api;
pub mod tui;

pub use adapter::*;
