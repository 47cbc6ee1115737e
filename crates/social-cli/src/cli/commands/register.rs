//! Register command handler.

use anyhow::Result;
use social_core::api::ApiClient;
use social_core::auth::{self, Credentials};
use social_core::config::Config;
use social_tui::auth::REGISTERED_MESSAGE;

pub async fn run(config: &Config, credentials: &Credentials) -> Result<()> {
    let api = ApiClient::from_config(config)?;
    auth::register(&api, credentials).await?;
    println!("{REGISTERED_MESSAGE}");
    Ok(())
}
