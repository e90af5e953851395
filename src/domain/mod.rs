//! # Domain Layer
//!
//! Chat entries, history, wire envelopes, configuration and the error
//! taxonomy. Independent of HTTP frameworks and terminal rendering.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
