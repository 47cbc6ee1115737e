//! Delete command handler.

use anyhow::Result;
use social_core::auth::Credentials;
use social_core::config::Config;
use social_tui::feed::DELETED_MESSAGE;

use super::open_session;

/// Deletes `id`, but only if the feed marks it as the caller's post.
pub async fn run(config: &Config, credentials: &Credentials, id: &str) -> Result<()> {
    let (api, session) = open_session(config, credentials).await?;
    let posts = api.feed(&session).await?;

    let Some(post) = posts
        .iter()
        .find(|post| post.is_owner && post.id.to_string() == id)
    else {
        anyhow::bail!("Post {id} is not yours to delete");
    };

    api.delete_post(&session, &post.id).await?;
    println!("{DELETED_MESSAGE}");
    Ok(())
}
