//! Full-screen terminal client for Simple Social.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};
use std::path::PathBuf;

use anyhow::Result;
pub use features::{auth, feed, upload};
pub use runtime::TuiRuntime;
use social_core::config::Config;

/// Runs the interactive client until the user quits.
///
/// `media_root` is the directory the upload picker scans.
pub async fn run_interactive(config: &Config, media_root: PathBuf) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `social feed`, `social upload` or `social delete` for scripted use."
        );
    }

    let mut err = stderr();
    writeln!(err, "Simple Social")?;
    writeln!(err, "API: {}", config.api_base_url()?)?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone(), media_root)?;
    runtime.run()?;
    drop(runtime);

    // Terminal is restored by now.
    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
