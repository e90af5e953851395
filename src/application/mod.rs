//! # Application Layer
//!
//! Ports to the outside world and the use cases coordinating them: relaying a
//! prompt on the server and driving a chat session on the client.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
