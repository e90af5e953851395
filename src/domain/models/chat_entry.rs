use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One prompt/response exchange. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    id: i64,
    prompt: String,
    response: String,
    timestamp: String,
}

impl ChatEntry {
    pub fn new(
        id: i64,
        prompt: impl Into<String>,
        response: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            response: response.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Build an entry stamped with the given local time. The id is the
    /// creation time in milliseconds; [`super::History`] bumps it when needed
    /// to keep ids unique.
    pub fn at(
        now: DateTime<Local>,
        prompt: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self::new(
            now.timestamp_millis(),
            prompt,
            response,
            now.format(TIMESTAMP_FORMAT).to_string(),
        )
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
