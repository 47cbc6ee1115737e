//! CLI command handlers.

pub mod config;
pub mod delete;
pub mod feed;
pub mod register;
pub mod tui;
pub mod upload;

use anyhow::Result;
use social_core::api::ApiClient;
use social_core::auth::{self, Credentials};
use social_core::config::Config;
use social_core::session::Session;

/// Logs in and returns a session that lives for this invocation only.
async fn open_session(
    config: &Config,
    credentials: &Credentials,
) -> Result<(ApiClient, Session)> {
    let api = ApiClient::from_config(config)?;
    let outcome = auth::login(&api, credentials).await?;
    let mut session = Session::default();
    auth::apply_login(&mut session, outcome, config.auth.partial_login)?;
    Ok((api, session))
}
