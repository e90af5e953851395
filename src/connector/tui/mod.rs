//! Terminal chat surface.
//!
//! A single-threaded event loop: draw, then wait for either a key press or a
//! tick. Submissions run on their own task and are folded back into the
//! session on the next pass through the loop.

mod app;
pub mod keys;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{
        Event, EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::application::ChatGateway;

pub use app::App;
pub use keys::{action_for, Action};
pub use ui::{render, API_KEY_HINT};

const TICK: Duration = Duration::from_millis(120);

/// Take over the terminal and run the chat surface until the user quits.
pub async fn run(gateway: Arc<dyn ChatGateway>, server_url: &str) -> anyhow::Result<()> {
    install_panic_hook(restore_terminal);
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Shift+Enter is only distinguishable from Enter with enhanced key reporting.
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut app = App::new(gateway, server_url);

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

/// Chain `restore` in front of the current panic hook so a panic while the
/// terminal is in raw mode still leaves a usable shell behind.
fn install_panic_hook(restore: fn()) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        PopKeyboardEnhancementFlags,
        LeaveAlternateScreen,
        Show
    );
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        app.set_width(terminal.size()?.width);
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = action_for(key) {
                        app.apply(action);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            _ = ticker.tick() => app.tick(),
        }

        app.poll_submission().await;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
