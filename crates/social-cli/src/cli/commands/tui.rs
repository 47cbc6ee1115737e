//! Interactive client command handler.

use std::path::PathBuf;

use anyhow::{Context, Result};
use social_core::config::Config;
use social_core::media::normalize_input_path;

pub async fn run(root: Option<PathBuf>, config: &Config) -> Result<()> {
    let media_root = match root {
        Some(root) => normalize_input_path(&root.to_string_lossy()),
        None => config.media_root(),
    };
    if !media_root.is_dir() {
        anyhow::bail!("Media root {} is not a directory", media_root.display());
    }

    social_tui::run_interactive(config, media_root)
        .await
        .context("interactive client failed")
}
