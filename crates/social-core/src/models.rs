//! Wire types returned by the backend.
//!
//! Posts are read-only view objects: the client never mutates them and
//! never computes ownership itself (`is_owner` is taken as given).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated user as reported by `/users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    /// Any other fields the backend sends (id, is_active, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }
}

/// Post identifier; the backend may send a string (UUID) or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Text(String),
    Number(i64),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Text(id) => f.write_str(id),
            PostId::Number(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(number) => PostId::Number(number),
            Err(_) => PostId::Text(value.to_string()),
        }
    }
}

/// Media kind of a post. Anything that isn't `image` renders as video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    #[serde(other)]
    Video,
}

impl FileType {
    pub fn label(self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
        }
    }
}

/// One shared media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub file_type: FileType,
    pub url: String,
    #[serde(default)]
    pub is_owner: bool,
}

impl Post {
    /// Caption text, if present and non-empty.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref().filter(|c| !c.is_empty())
    }
}

/// Body of `GET /feed`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_post_accepts_string_and_integer_ids() {
        let text: Post = serde_json::from_value(json!({
            "id": "6f1c", "email": "a@b.c", "created_at": "2024-03-15T10:30:00Z",
            "caption": "hi", "file_type": "image", "url": "http://x/1.png", "is_owner": true
        }))
        .unwrap();
        assert_eq!(text.id, PostId::Text("6f1c".to_string()));
        assert_eq!(text.id.to_string(), "6f1c");

        let number: Post = serde_json::from_value(json!({
            "id": 42, "email": "a@b.c", "file_type": "video", "url": "http://x/1.mp4"
        }))
        .unwrap();
        assert_eq!(number.id.to_string(), "42");
        assert_eq!(number.created_at, "");
        assert!(number.caption.is_none());
        assert!(!number.is_owner);
    }

    #[test]
    fn test_unknown_file_type_is_video() {
        let post: Post = serde_json::from_value(json!({
            "id": 1, "email": "a@b.c", "file_type": "gif", "url": "u"
        }))
        .unwrap();
        assert_eq!(post.file_type, FileType::Video);
    }

    #[test]
    fn test_empty_caption_is_hidden() {
        let post: Post = serde_json::from_value(json!({
            "id": 1, "email": "a@b.c", "caption": "", "file_type": "image", "url": "u"
        }))
        .unwrap();
        assert_eq!(post.caption(), None);
    }

    #[test]
    fn test_feed_without_posts_is_empty() {
        let feed: FeedResponse = serde_json::from_value(json!({})).unwrap();
        assert!(feed.posts.is_empty());
    }

    #[test]
    fn test_user_keeps_extra_fields() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1", "email": "bob@example.com", "is_active": true
        }))
        .unwrap();
        assert_eq!(user.email, "bob@example.com");
        assert_eq!(user.extra.get("is_active"), Some(&json!(true)));
    }

    #[test]
    fn test_post_id_from_str() {
        assert_eq!(PostId::from("17"), PostId::Number(17));
        assert_eq!(PostId::from("abc"), PostId::Text("abc".to_string()));
    }
}
