pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    extract_text, ChatGateway, ChatSession, CompletionService, GatewayReply, PendingSubmission,
    RelayPromptUseCase, SubmitOutcome,
};

pub use connector::{
    api::{router, Container, ContainerConfig},
    HttpChatGateway, MockCompletion, OpenAiClient,
};

pub use domain::{
    ChatEntry, CompletionRequest, DomainError, ErrorResponse, History, PromptRequest,
    PromptResponse, ReplyEnvelope, ServerConfig,
};
