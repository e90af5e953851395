mod http_chat_gateway;
mod mock_completion;
mod openai_client;

pub use http_chat_gateway::*;
pub use mock_completion::*;
pub use openai_client::*;
