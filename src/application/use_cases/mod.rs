mod chat_session;
mod relay_prompt;
pub mod response_text;

pub use chat_session::*;
pub use relay_prompt::*;
pub use response_text::{extract_text, TextExtractor, TEXT_EXTRACTORS};
