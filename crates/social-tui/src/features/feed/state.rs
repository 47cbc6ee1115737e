use social_core::dates::human_date;
use social_core::media::render_url;
use social_core::models::{FileType, Post, PostId};

use crate::common::Notice;

/// Posts exactly as the backend returned them, plus list selection.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub selected: usize,
    /// Set once a load has succeeded since the view was (re)entered.
    pub loaded: bool,
    pub notice: Option<Notice>,
}

impl FeedState {
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.posts.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Replaces the list, keeping the selection in range.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.selected = self.selected.min(self.posts.len().saturating_sub(1));
        self.loaded = true;
    }

    pub fn cards(&self) -> Vec<PostCard> {
        self.posts.iter().map(PostCard::from_post).collect()
    }
}

/// Display model for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: PostId,
    /// `email • Mar 15, 2024`
    pub header: String,
    pub file_type: FileType,
    /// URL after the render transform.
    pub url: String,
    pub caption: Option<String>,
    /// Only posts the backend marks as owned get a delete affordance.
    pub deletable: bool,
}

impl PostCard {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            header: format!("{} • {}", post.email, human_date(&post.created_at)),
            file_type: post.file_type,
            url: render_url(&post.url, None),
            caption: post.caption().map(str::to_string),
            deletable: post.is_owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, is_owner: bool) -> Post {
        Post {
            id: PostId::Number(id),
            email: "bob@example.com".to_string(),
            created_at: "2024-03-15T10:30:00Z".to_string(),
            caption: Some(String::new()),
            file_type: FileType::Video,
            url: "http://cdn/clip.mp4".to_string(),
            is_owner,
        }
    }

    #[test]
    fn test_card_from_post() {
        let card = PostCard::from_post(&post(3, true));
        assert_eq!(card.header, "bob@example.com • Mar 15, 2024");
        assert_eq!(card.url, "http://cdn/clip.mp4");
        assert_eq!(card.caption, None);
        assert!(card.deletable);
        assert!(!PostCard::from_post(&post(4, false)).deletable);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut feed = FeedState::default();
        feed.replace_posts(vec![post(1, false), post(2, false), post(3, false)]);
        feed.select_next();
        feed.select_next();
        feed.select_next();
        assert_eq!(feed.selected, 2);

        feed.replace_posts(vec![post(1, false)]);
        assert_eq!(feed.selected, 0);
        feed.select_prev();
        assert_eq!(feed.selected, 0);

        feed.replace_posts(Vec::new());
        assert!(feed.selected_post().is_none());
    }
}
