//! Feed feature reducer.

use crossterm::event::{KeyCode, KeyEvent};
use social_core::api::ApiError;
use social_core::media::render_url;
use social_core::models::{Post, PostId};

use super::state::FeedState;
use crate::common::Notice;

pub const DELETED_MESSAGE: &str = "Post deleted";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    None,
    Reload,
    Delete(PostId),
    Open(String),
}

pub fn handle_key(feed: &mut FeedState, key: KeyEvent) -> FeedAction {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            feed.select_next();
            FeedAction::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            feed.select_prev();
            FeedAction::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            feed.selected = 0;
            FeedAction::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            feed.selected = feed.posts.len().saturating_sub(1);
            FeedAction::None
        }
        KeyCode::Char('r') => FeedAction::Reload,
        KeyCode::Char('d') | KeyCode::Delete => match feed.selected_post() {
            Some(post) if post.is_owner => FeedAction::Delete(post.id.clone()),
            _ => FeedAction::None,
        },
        KeyCode::Char('o') | KeyCode::Enter => feed
            .selected_post()
            .map_or(FeedAction::None, |post| {
                FeedAction::Open(render_url(&post.url, None))
            }),
        _ => FeedAction::None,
    }
}

/// Applies a feed load. A failure clears the list and shows an error; a
/// success clears a previous error.
pub fn handle_feed_loaded(feed: &mut FeedState, result: Result<Vec<Post>, ApiError>) {
    match result {
        Ok(posts) => {
            feed.replace_posts(posts);
            if feed.notice.as_ref().is_some_and(Notice::is_error) {
                feed.notice = None;
            }
        }
        Err(e) => {
            feed.posts.clear();
            feed.selected = 0;
            feed.loaded = false;
            feed.notice = Some(Notice::error(e.to_string()));
        }
    }
}

/// Applies a delete result. Returns `true` when the feed must be reloaded.
///
/// On failure the list is left untouched.
pub fn handle_post_deleted(feed: &mut FeedState, result: Result<(), ApiError>) -> bool {
    match result {
        Ok(()) => {
            feed.notice = Some(Notice::success(DELETED_MESSAGE));
            true
        }
        Err(e) => {
            feed.notice = Some(Notice::error(e.to_string()));
            false
        }
    }
}
