//! Auth feature view.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::state::{AuthFocus, AuthState};
use crate::common::layout::{
    button_span, centered_area, field_line, hint_line, notice_line, render_panel,
};
use crate::common::text::truncate_with_ellipsis;

pub const LOGIN_HINT: &str = "Enter both email and password to proceed";

const PANEL_WIDTH: u16 = 60;
const PANEL_HEIGHT: u16 = 14;
const LABEL_WIDTH: usize = 10;
/// Pointer (2) + label + opening bracket.
const VALUE_OFFSET: u16 = 2 + LABEL_WIDTH as u16 + 1;

/// Renders the login screen centered in `area`.
pub fn render_login(frame: &mut Frame, auth: &AuthState, area: Rect, busy: bool) {
    let panel = centered_area(area, PANEL_WIDTH, PANEL_HEIGHT);
    let inner = render_panel(frame, panel, "Simple Social", Color::Cyan);
    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    let lines = login_lines(auth, inner.width as usize);
    frame.render_widget(Paragraph::new(lines), inner);

    if busy {
        return;
    }
    let row = match auth.focus {
        AuthFocus::Email => 2,
        AuthFocus::Password => 3,
        AuthFocus::Login | AuthFocus::SignUp => return,
    };
    let field = if auth.focus == AuthFocus::Email {
        &auth.email
    } else {
        &auth.password
    };
    let before: String = field
        .display(auth.focus == AuthFocus::Password)
        .chars()
        .take(field.cursor())
        .collect();
    let x = inner.x + VALUE_OFFSET + before.width() as u16;
    if x < inner.x + inner.width {
        frame.set_cursor_position(Position::new(x, inner.y + row));
    }
}

/// Body lines of the login panel.
pub fn login_lines(auth: &AuthState, width: usize) -> Vec<Line<'static>> {
    let value_width = width.saturating_sub(VALUE_OFFSET as usize + 1);
    let email = truncate_with_ellipsis(auth.email.value(), value_width);
    let password = truncate_with_ellipsis(&auth.password.display(true), value_width);
    let enabled = auth.can_submit();

    let mut lines = vec![
        Line::from(Span::styled(
            "Log in or create an account",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Email", &email, auth.focus == AuthFocus::Email, LABEL_WIDTH),
        field_line(
            "Password",
            &password,
            auth.focus == AuthFocus::Password,
            LABEL_WIDTH,
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            button_span("Login", auth.focus == AuthFocus::Login, enabled),
            Span::raw("  "),
            button_span("Sign Up", auth.focus == AuthFocus::SignUp, enabled),
        ]),
        Line::from(""),
    ];

    if !enabled {
        lines.push(hint_line(LOGIN_HINT));
    }
    if let Some(notice) = &auth.notice {
        lines.push(notice_line(notice));
    }

    lines.push(Line::from(""));
    lines.push(hint_line("Tab move · Enter submit · Ctrl-C quit"));
    lines
}
