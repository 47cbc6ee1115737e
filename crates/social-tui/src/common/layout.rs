//! Layout and container helpers shared by the views.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear};

use super::{Notice, NoticeLevel};

/// Centers a `width` x `height` box in `area`, shrinking it to fit.
pub fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(1));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Clears `area`, draws a titled border, and returns the inner area.
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn notice_line(notice: &Notice) -> Line<'static> {
    let color = match notice.level {
        NoticeLevel::Info => Color::Yellow,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Error => Color::Red,
    };
    Line::from(Span::styled(
        notice.text.clone(),
        Style::default().fg(color),
    ))
}

pub fn hint_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Label plus bracketed value, highlighted when focused.
pub fn field_line(label: &str, value: &str, focused: bool, label_width: usize) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let pointer = if focused { "> " } else { "  " };
    Line::from(vec![
        Span::styled(pointer.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{label:<label_width$}"),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("[{value}]"), value_style),
    ])
}

pub fn button_span(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let style = match (focused, enabled) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Black).bg(Color::DarkGray),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    Span::styled(format!("[ {label} ]"), style)
}
