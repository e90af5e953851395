use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::error;

use crate::application::{ChatGateway, ChatSession, GatewayReply, PendingSubmission, SubmitOutcome};
use crate::domain::DomainError;

use super::keys::Action;
use super::ui::history_rows;

const PAGE: u16 = 10;
const DEFAULT_WIDTH: u16 = 80;

/// Submission whose request is running on its own task.
struct InFlight {
    pending: PendingSubmission,
    task: JoinHandle<Result<GatewayReply, DomainError>>,
}

/// Terminal chat surface state: a [`ChatSession`] plus what only the terminal
/// needs (scroll offset, spinner frame, quit flag).
pub struct App {
    session: ChatSession,
    gateway: Arc<dyn ChatGateway>,
    in_flight: Option<InFlight>,
    server_url: String,
    scroll: u16,
    width: u16,
    tick: usize,
    should_quit: bool,
}

impl App {
    pub fn new(gateway: Arc<dyn ChatGateway>, server_url: impl Into<String>) -> Self {
        Self {
            session: ChatSession::new(),
            gateway,
            in_flight: None,
            server_url: server_url.into(),
            scroll: 0,
            width: DEFAULT_WIDTH,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Record the terminal width so scrolling stops at the last history row.
    pub fn set_width(&mut self, width: u16) {
        self.width = width;
        self.scroll_to(self.scroll);
    }

    fn scroll_to(&mut self, offset: u16) {
        let last_row = history_rows(self.session.history(), self.width).saturating_sub(1);
        self.scroll = offset.min(last_row);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Submit => self.start_submission(),
            Action::InsertNewline => self.session.insert_newline(),
            Action::Insert(c) => self.session.push_char(c),
            Action::Backspace => self.session.backspace(),
            Action::ClearHistory => {
                self.session.clear();
                self.scroll = 0;
            }
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll_to(self.scroll.saturating_add(1)),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            Action::PageDown => self.scroll_to(self.scroll.saturating_add(PAGE)),
            Action::Quit => self.should_quit = true,
        }
    }

    fn start_submission(&mut self) {
        let Some(pending) = self.session.begin_submit() else {
            return;
        };

        let gateway = self.gateway.clone();
        let prompt = pending.prompt().to_string();
        let task = tokio::spawn(async move { gateway.send_prompt(&prompt).await });
        self.in_flight = Some(InFlight { pending, task });
    }

    /// Finish the in-flight submission if its task is done. Returns whether
    /// anything changed.
    pub async fn poll_submission(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) if in_flight.task.is_finished() => {
                self.complete(in_flight).await;
                true
            }
            other => {
                self.in_flight = other;
                false
            }
        }
    }

    /// Wait for the in-flight submission, if any, and finish it.
    pub async fn wait_for_submission(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            self.complete(in_flight).await;
        }
    }

    async fn complete(&mut self, in_flight: InFlight) {
        // A panicked or cancelled task still has to leave the loading state.
        let result = in_flight.task.await.unwrap_or_else(|e| {
            error!("Submission task failed: {e}");
            Err(DomainError::transport(format!("Submission failed: {e}")))
        });

        if self.session.finish_submit(in_flight.pending, result) == SubmitOutcome::Added {
            self.scroll = 0;
        }
    }
}
