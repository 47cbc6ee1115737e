//! Upload command handler.

use anyhow::{Context, Result};
use social_core::auth::Credentials;
use social_core::config::Config;
use social_core::media::{MediaFile, UploadRequest, normalize_input_path};
use social_tui::upload::POSTED_MESSAGE;
use tracing::info;

use super::open_session;

pub async fn run(
    config: &Config,
    credentials: &Credentials,
    file: &str,
    caption: Option<String>,
) -> Result<()> {
    let path = normalize_input_path(file);
    // Read before logging in so a bad path never costs a round trip.
    let file = MediaFile::read(&path)
        .await
        .with_context(|| format!("Upload failed: cannot read {}", path.display()))?;
    let caption = caption.filter(|c| !c.is_empty());

    let (api, session) = open_session(config, credentials).await?;
    info!(name = %file.name, kind = file.kind.extension(), "uploading");
    api.upload_post(&session, UploadRequest { file, caption }).await?;

    println!("{POSTED_MESSAGE}");
    Ok(())
}
