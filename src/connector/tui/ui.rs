use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{ChatEntry, History};

use super::app::App;

pub const API_KEY_HINT: &str =
    "Make sure your .env file contains OPENAI_API_KEY with your API key.";
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const INPUT_ROWS: u16 = 4;
const MIN_ERROR_ROWS: u16 = 5;

pub fn render(f: &mut Frame, app: &App) {
    let session = app.session();

    let mut constraints = vec![
        Constraint::Length(3),              // Header
        Constraint::Length(INPUT_ROWS + 2), // Input
    ];
    if let Some(error) = session.error() {
        let limit = (f.area().height / 2).max(MIN_ERROR_ROWS);
        constraints.push(Constraint::Length(
            error_height(error, f.area().width).min(limit),
        ));
    }
    if session.is_loading() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0)); // History

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let mut next = 2;
    if let Some(error) = session.error() {
        render_error(f, error, chunks[next]);
        next += 1;
    }
    if session.is_loading() {
        render_loading(f, app, chunks[next]);
        next += 1;
    }
    render_history(f, app, chunks[next]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session().history();

    let mut hints = vec!["Enter send", "Shift+Enter newline"];
    if !history.is_empty() {
        hints.push("Ctrl+L clear history");
    }
    hints.push("Esc quit");

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Chatty AI",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(hints.join(" | "), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} ({})", app.server_url(), history.count_label())),
    );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let session = app.session();

    let (text, style) = if session.input().is_empty() && !session.is_loading() {
        (
            "Enter your prompt here...".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if session.is_loading() {
        (session.input().to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (session.input().to_string(), Style::default().fg(Color::Yellow))
    };

    let title = if session.is_loading() {
        "Prompt (waiting for response)"
    } else {
        "Prompt"
    };

    let border_style = if session.can_submit() {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Keep the cursor line visible once the prompt outgrows the box.
    let line_count = saturating_u16(session.input().split('\n').count());
    let offset = line_count.saturating_sub(INPUT_ROWS);

    let input = Paragraph::new(text)
        .style(style)
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
    f.render_widget(input, area);

    if !session.is_loading() {
        let last_line = session.input().rsplit('\n').next().unwrap_or_default();
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(saturating_u16(last_line.chars().count()));
        let y = area.y + 1 + line_count.saturating_sub(1).min(INPUT_ROWS - 1);
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), y));
    }
}

/// Rows the error panel needs at `width` columns, borders included.
fn error_height(error: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    wrapped_rows(error, inner)
        .saturating_add(wrapped_rows(API_KEY_HINT, inner))
        .saturating_add(3)
}

/// The hint gets its own rows at the bottom of the panel so a long message
/// can never push it out of view.
fn render_error(f: &mut Frame, error: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let hint_rows = wrapped_rows(API_KEY_HINT, inner.width).min(inner.height);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(hint_rows)])
        .split(inner);

    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            "Error:",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(error, Style::default().fg(Color::LightRed))),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(message, parts[0]);

    let hint = Paragraph::new(Span::styled(API_KEY_HINT, Style::default().fg(Color::Red)))
        .wrap(Wrap { trim: true });
    f.render_widget(hint, parts[1]);
}

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let frame = SPINNER[app.tick_count() % SPINNER.len()];
    let loading = Paragraph::new(Line::from(vec![
        Span::styled(frame, Style::default().fg(Color::Blue)),
        Span::raw(" Generating response..."),
    ]))
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(loading, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session().history();

    let lines: Vec<Line> = history.iter().flat_map(entry_lines).collect();

    let title = if history.is_empty() {
        "Conversation History".to_string()
    } else {
        format!("Conversation History ({})", history.count_label())
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

/// Rows the history occupies once wrapped inside a bordered box `width`
/// columns wide.
pub(super) fn history_rows(history: &History, width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2).max(1));
    let rows: usize = history
        .iter()
        .flat_map(entry_lines)
        .map(|line| line.width().div_ceil(inner).max(1))
        .sum();
    saturating_u16(rows)
}

fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    saturating_u16(
        text.split('\n')
            .map(|line| line.chars().count().div_ceil(width).max(1))
            .sum(),
    )
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn entry_lines(entry: &ChatEntry) -> Vec<Line<'_>> {
    let you = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let bot = Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            entry.timestamp(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(" YOU ", you)),
    ];
    lines.extend(
        entry
            .prompt()
            .lines()
            .map(|l| Line::from(Span::styled(format!("  {l}"), Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(Span::styled(" Chatty AI ", bot)));
    lines.extend(
        entry
            .response()
            .lines()
            .map(|l| Line::from(Span::styled(format!("  {l}"), Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::default());
    lines
}
