//! Upload feature view.

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{UploadFocus, UploadState};
use crate::common::layout::{button_span, field_line, hint_line, notice_line};
use crate::common::text::truncate_with_ellipsis;

pub const UPLOAD_HINT: &str = "Select a media file to enable sharing";

const LABEL_WIDTH: usize = 9;
const VALUE_OFFSET: u16 = 2 + LABEL_WIDTH as u16 + 1;
const FORM_HEIGHT: u16 = 9;

pub fn render_upload(frame: &mut Frame, upload: &UploadState, root: &Path, area: Rect) {
    let [header, picker, form] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(FORM_HEIGHT),
        ])
        .areas(area);

    let title = Line::from(Span::styled(
        "New Post",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    let root_line = hint_line(&format!("Media from {}", root.display()));
    frame.render_widget(Paragraph::new(vec![title, root_line]), header);

    render_picker(frame, upload, picker);

    let lines = upload_lines(upload, root, form.width as usize);
    frame.render_widget(Paragraph::new(lines), form);

    let (row, field) = match upload.focus {
        UploadFocus::Path => (0, &upload.path),
        UploadFocus::Caption => (1, &upload.caption),
        UploadFocus::Picker | UploadFocus::Share => return,
    };
    let before: String = field.value().chars().take(field.cursor()).collect();
    let x = form.x + VALUE_OFFSET + before.width() as u16;
    if x < form.x + form.width {
        frame.set_cursor_position(Position::new(x, form.y + row));
    }
}

fn render_picker(frame: &mut Frame, upload: &UploadState, area: Rect) {
    let focused = upload.focus == UploadFocus::Picker;
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Media ");

    if upload.files.is_empty() {
        let message = if upload.discovering {
            "Scanning for media..."
        } else {
            "No media files found. Type a path below."
        };
        frame.render_widget(Paragraph::new(hint_line(message)).block(block), area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = upload
        .files
        .iter()
        .map(|file| ListItem::new(truncate_with_ellipsis(&file.display().to_string(), width)))
        .collect();
    let highlight = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(upload.picker_selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Form lines below the picker.
pub fn upload_lines(upload: &UploadState, root: &Path, width: usize) -> Vec<Line<'static>> {
    let value_width = width.saturating_sub(VALUE_OFFSET as usize + 1);
    let path = truncate_with_ellipsis(upload.path.value(), value_width);
    let caption = truncate_with_ellipsis(upload.caption.value(), value_width);
    let selected = upload.selected_file(root);

    let mut lines = vec![
        field_line("File", &path, upload.focus == UploadFocus::Path, LABEL_WIDTH),
        field_line(
            "Caption",
            &caption,
            upload.focus == UploadFocus::Caption,
            LABEL_WIDTH,
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            button_span(
                "Share",
                upload.focus == UploadFocus::Share,
                selected.is_some(),
            ),
        ]),
        Line::from(""),
    ];

    match &selected {
        Some(file) => lines.push(Line::from(Span::styled(
            truncate_with_ellipsis(&format!("Ready: {}", file.display()), width),
            Style::default().fg(Color::Green),
        ))),
        None => lines.push(hint_line(UPLOAD_HINT)),
    }
    if let Some(notice) = &upload.notice {
        lines.push(notice_line(notice));
    }
    lines.push(hint_line("Enter pick · Ctrl-S share · Tab move"));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_hint_until_file_selected() {
        let mut upload = UploadState::default();
        let root = Path::new("/media");

        let rendered = text(&upload_lines(&upload, root, 70));
        assert!(rendered.contains(UPLOAD_HINT));

        upload.path.set("cat.png");
        let rendered = text(&upload_lines(&upload, root, 70));
        assert!(!rendered.contains(UPLOAD_HINT));
        assert!(rendered.contains("Ready: /media/cat.png"));
    }

    #[test]
    fn test_unsupported_path_keeps_hint() {
        let mut upload = UploadState::default();
        upload.path.set("notes.txt");

        let rendered = text(&upload_lines(&upload, Path::new("/media"), 70));
        assert!(rendered.contains("[notes.txt]"));
        assert!(rendered.contains(UPLOAD_HINT));
    }
}
