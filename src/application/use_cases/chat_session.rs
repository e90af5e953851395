use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::application::{ChatGateway, GatewayReply};
use crate::domain::{ChatEntry, DomainError, History};

pub const NO_RESPONSE_RECEIVED: &str = "No response received from AI";
pub const GENERIC_FAILURE: &str = "Failed to get response from AI";

/// How a call to [`ChatSession::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, or a submission was already in flight. Nothing changed.
    Skipped,
    /// A new entry was prepended to the history.
    Added,
    /// The error message was set; history is unchanged.
    Failed,
}

/// Ticket for a submission started by [`ChatSession::begin_submit`]. Hand it
/// back to [`ChatSession::finish_submit`] together with the gateway result.
#[derive(Debug)]
#[must_use = "a pending submission leaves the session loading until it is finished"]
pub struct PendingSubmission {
    prompt: String,
}

impl PendingSubmission {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// State of the chat surface, independent of how it is drawn.
///
/// A submission moves the session `Idle -> Submitting -> Idle`. Splitting it
/// into [`begin_submit`](Self::begin_submit) and
/// [`finish_submit`](Self::finish_submit) lets an event loop keep rendering
/// the loading state while the request runs elsewhere; [`submit`](Self::submit)
/// does both in one call.
#[derive(Debug, Default)]
pub struct ChatSession {
    input: String,
    loading: bool,
    error: Option<String>,
    history: History,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the submit control would be enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    // Input is frozen while a submission is in flight.

    pub fn set_input(&mut self, text: impl Into<String>) {
        if !self.loading {
            self.input = text.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !self.loading {
            self.input.push(c);
        }
    }

    pub fn insert_newline(&mut self) {
        self.push_char('\n');
    }

    pub fn backspace(&mut self) {
        if !self.loading {
            self.input.pop();
        }
    }

    /// Enter the loading state for the current input.
    ///
    /// Returns `None` without touching any state when the input is blank or a
    /// submission is already running.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if !self.can_submit() {
            return None;
        }

        self.loading = true;
        self.error = None;
        Some(PendingSubmission {
            prompt: self.input.clone(),
        })
    }

    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        result: Result<GatewayReply, DomainError>,
    ) -> SubmitOutcome {
        self.finish_submit_at(pending, result, Local::now())
    }

    /// [`finish_submit`](Self::finish_submit) with an explicit creation time.
    pub fn finish_submit_at(
        &mut self,
        pending: PendingSubmission,
        result: Result<GatewayReply, DomainError>,
        now: DateTime<Local>,
    ) -> SubmitOutcome {
        let outcome = match reply_text(result) {
            Ok(response) => {
                let entry = ChatEntry::at(now, pending.prompt, response);
                debug!("Adding chat entry {}", entry.id());
                self.history.prepend(entry);
                self.input.clear();
                SubmitOutcome::Added
            }
            Err(message) => {
                warn!("Submission failed: {message}");
                self.error = Some(message);
                SubmitOutcome::Failed
            }
        };

        self.loading = false;
        outcome
    }

    /// Run a whole submission against `gateway`.
    pub async fn submit(&mut self, gateway: &dyn ChatGateway) -> SubmitOutcome {
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Skipped;
        };

        let result = gateway.send_prompt(pending.prompt()).await;
        self.finish_submit(pending, result)
    }

    /// Drop every entry and any displayed error.
    pub fn clear(&mut self) {
        self.history.clear();
        self.error = None;
    }
}

/// Response text of a successful reply, or the message to show the user.
fn reply_text(result: Result<GatewayReply, DomainError>) -> Result<String, String> {
    let reply = result.map_err(|e| {
        let message = e.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    })?;

    if !reply.is_success() {
        return Err(reply
            .envelope
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("API Error: {}", reply.status)));
    }

    reply
        .envelope
        .response
        .filter(|r| !r.is_empty())
        .ok_or_else(|| NO_RESPONSE_RECEIVED.to_string())
}
