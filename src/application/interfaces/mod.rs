mod chat_gateway;
mod completion_service;

pub use chat_gateway::*;
pub use completion_service::*;
