mod chat_entry;
mod completion;
mod envelope;
mod history;
mod server_config;

pub use chat_entry::*;
pub use completion::*;
pub use envelope::*;
pub use history::*;
pub use server_config::*;
