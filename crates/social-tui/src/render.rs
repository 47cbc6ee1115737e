//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::text::truncate_with_ellipsis;
use crate::features::{auth, feed, upload};
use crate::state::{AppState, Screen, View};

const SIDEBAR_WIDTH: u16 = 28;
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for the status line.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub const WELCOME_MESSAGE: &str = "Welcome back. Use the navigation below.";

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [body, status] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .areas(frame.area());

    let busy = app.tasks.is_busy();
    match app.screen {
        Screen::Unauthenticated => auth::render_login(frame, &app.auth, body, busy),
        Screen::Authenticated(view) => render_shell(app, view, frame, body),
    }

    frame.render_widget(Paragraph::new(status_line(app)), status);
}

fn render_shell(app: &AppState, view: View, frame: &mut Frame, area: Rect) {
    let [sidebar, main] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .areas(area);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(sidebar);
    frame.render_widget(block, sidebar);
    frame.render_widget(Paragraph::new(sidebar_lines(app, view, inner.width)), inner);

    let main = Rect::new(
        main.x + 1,
        main.y,
        main.width.saturating_sub(2),
        main.height,
    );
    match view {
        View::Feed => feed::render_feed(frame, &app.feed, main, app.tasks.feed.is_running()),
        View::Upload => upload::render_upload(frame, &app.upload, &app.media_root, main),
    }
}

fn sidebar_lines(app: &AppState, view: View, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let email = app.session.user().map_or("", |u| u.email.as_str());

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&format!("Hi {email}"), width),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        wrap_words(WELCOME_MESSAGE, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::from(""));

    for (key, item) in [("F1", View::Feed), ("F2", View::Upload)] {
        let active = item == view;
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if active { "> " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{} ", item.title()), style),
            Span::styled(format!(" {key}"), Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Logout", Style::default().fg(Color::Red)),
        Span::styled("  Ctrl-L", Style::default().fg(Color::DarkGray)),
    ]));
    lines
}

/// Greedy word wrap for short sidebar copy.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn status_line(app: &AppState) -> Line<'static> {
    let hint_style = Style::default().fg(Color::DarkGray);
    if app.tasks.is_busy() {
        let frame = SPINNER_FRAMES[(app.spinner_frame / 4) % SPINNER_FRAMES.len()];
        return Line::from(vec![
            Span::styled(format!(" {frame} "), Style::default().fg(Color::Cyan)),
            Span::styled("Working...", Style::default().fg(Color::Yellow)),
            Span::styled("  Ctrl-C quit", hint_style),
        ]);
    }

    let hints = match app.screen {
        Screen::Unauthenticated => " Tab move · Enter submit · Ctrl-C quit",
        Screen::Authenticated(View::Feed) => {
            " j/k select · o open · d delete · r reload · F2 new post · Ctrl-L logout"
        }
        Screen::Authenticated(View::Upload) => {
            " Enter pick · Ctrl-S share · Esc feed · Ctrl-L logout"
        }
    };
    Line::from(Span::styled(hints, hint_style))
}
