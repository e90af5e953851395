use serde::Serialize;

/// One call to the completion service: a model, a fixed instruction and the
/// user's prompt. No prior turns are ever included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub instructions: String,
    pub input: String,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        instructions: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            instructions: instructions.into(),
            input: input.into(),
        }
    }
}
