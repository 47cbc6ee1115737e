//! Feed command handler.

use anyhow::Result;
use social_core::auth::Credentials;
use social_core::config::Config;
use social_core::dates::human_date;
use social_core::media::render_url;
use social_core::models::Post;
use social_tui::feed::EMPTY_FEED_MESSAGE;

use super::open_session;

pub async fn run(config: &Config, credentials: &Credentials) -> Result<()> {
    let (api, session) = open_session(config, credentials).await?;
    let posts = api.feed(&session).await?;

    if posts.is_empty() {
        println!("{EMPTY_FEED_MESSAGE}");
        return Ok(());
    }
    for (idx, post) in posts.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print!("{}", format_post(post));
    }
    Ok(())
}

/// One text block per post.
pub fn format_post(post: &Post) -> String {
    let owner = if post.is_owner { " [owner]" } else { "" };
    let mut block = format!(
        "{} • {}{owner}\n  id: {}\n  [{}] {}\n",
        post.email,
        human_date(&post.created_at),
        post.id,
        post.file_type.label(),
        render_url(&post.url, None),
    );
    if let Some(caption) = post.caption() {
        for line in caption.lines() {
            block.push_str("  ");
            block.push_str(line);
            block.push('\n');
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use social_core::models::{FileType, PostId};

    use super::*;

    #[test]
    fn test_format_post() {
        let post = Post {
            id: PostId::Number(7),
            email: "bob@example.com".to_string(),
            created_at: "2024-03-15T10:30:00Z".to_string(),
            caption: Some("hello".to_string()),
            file_type: FileType::Video,
            url: "https://cdn.example.com/clip.mp4".to_string(),
            is_owner: true,
        };
        assert_eq!(
            format_post(&post),
            "bob@example.com • Mar 15, 2024 [owner]\n  id: 7\n  [video] https://cdn.example.com/clip.mp4\n  hello\n"
        );
    }
}
