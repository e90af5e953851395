pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const SYSTEM_INSTRUCTIONS: &str = "You are a sassy AI chatbot that loves to talk.";

/// Read-only settings for the request handler, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    api_key: Option<String>,
    model: String,
    instructions: String,
}

impl ServerConfig {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            model: model.into(),
            instructions: SYSTEM_INSTRUCTIONS.to_string(),
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable         | Default         |
    /// |------------------|-----------------|
    /// | `OPENAI_API_KEY` | none (required) |
    /// | `MODEL`          | `gpt-3.5-turbo` |
    pub fn from_env() -> Self {
        let key = std::env::var("OPENAI_API_KEY").ok();
        let model = std::env::var("MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self::new(key, model)
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_counts_as_missing() {
        let config = ServerConfig::new(Some(String::new()), "gpt-4o-mini");
        assert!(!config.has_api_key());
        assert_eq!(config.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.instructions(), SYSTEM_INSTRUCTIONS);
        assert!(config.api_key().is_none());
    }
}
