//! Feed feature view.
//!
//! Posts render as stacked cards in backend order. The list scrolls so the
//! selected card stays visible.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use social_core::models::FileType;

use super::state::{FeedState, PostCard};
use crate::common::layout::{hint_line, notice_line};
use crate::common::text::{sanitize_for_display, truncate_with_ellipsis};

pub const EMPTY_FEED_MESSAGE: &str = "No posts yet. Be the first to share something!";

const DELETE_MARKER: &str = "[d] delete";
const SELECTED_BAR: &str = "▌ ";
const UNSELECTED_BAR: &str = "  ";

pub fn render_feed(frame: &mut Frame, feed: &FeedState, area: Rect, loading: bool) {
    let [header, body] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .areas(area);

    let mut header_lines = vec![Line::from(Span::styled(
        "Feed",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(notice) = &feed.notice {
        header_lines.push(notice_line(notice));
    }
    frame.render_widget(Paragraph::new(header_lines), header);

    if feed.posts.is_empty() {
        let line = if loading {
            hint_line("Loading feed...")
        } else if feed.loaded {
            Line::from(Span::styled(
                EMPTY_FEED_MESSAGE,
                Style::default().fg(Color::Yellow),
            ))
        } else {
            hint_line("Press r to load the feed")
        };
        frame.render_widget(Paragraph::new(line), body);
        return;
    }

    let (lines, selected) = feed_lines(feed, body.width as usize);
    let offset = scroll_offset(&selected, body.height as usize);
    frame.render_widget(
        Paragraph::new(lines).scroll((offset as u16, 0)),
        body,
    );
}

/// All card lines, plus the line range of the selected card.
pub fn feed_lines(feed: &FeedState, width: usize) -> (Vec<Line<'static>>, Range<usize>) {
    let mut lines = Vec::new();
    let mut selected = 0..0;

    for (idx, card) in feed.cards().iter().enumerate() {
        let start = lines.len();
        lines.extend(post_lines(card, idx == feed.selected, width));
        if idx == feed.selected {
            selected = start..lines.len();
        }
        lines.push(Line::from(""));
    }
    (lines, selected)
}

/// Lines of one card. The delete marker appears only on deletable cards.
pub fn post_lines(card: &PostCard, selected: bool, width: usize) -> Vec<Line<'static>> {
    let bar = if selected { SELECTED_BAR } else { UNSELECTED_BAR };
    let bar_style = Style::default().fg(Color::Cyan);
    let text_width = width.saturating_sub(bar.chars().count());

    let header_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let media_color = match card.file_type {
        FileType::Image => Color::Green,
        FileType::Video => Color::Magenta,
    };
    let media = format!("[{}] {}", card.file_type.label(), card.url);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(bar, bar_style),
            Span::styled(truncate_with_ellipsis(&card.header, text_width), header_style),
        ]),
        Line::from(vec![
            Span::styled(bar, bar_style),
            Span::styled(
                truncate_with_ellipsis(&media, text_width),
                Style::default().fg(media_color),
            ),
        ]),
    ];

    if let Some(caption) = &card.caption {
        for caption_line in sanitize_for_display(caption).lines() {
            lines.push(Line::from(vec![
                Span::styled(bar, bar_style),
                Span::styled(
                    truncate_with_ellipsis(caption_line, text_width),
                    Style::default().add_modifier(Modifier::ITALIC),
                ),
            ]));
        }
    }

    if card.deletable {
        lines.push(Line::from(vec![
            Span::styled(bar, bar_style),
            Span::styled(DELETE_MARKER, Style::default().fg(Color::Red)),
        ]));
    }
    lines
}

fn scroll_offset(selected: &Range<usize>, height: usize) -> usize {
    if height == 0 || selected.end <= height {
        return 0;
    }
    let card_height = selected.end - selected.start;
    if card_height >= height {
        selected.start
    } else {
        selected.end - height
    }
}
