//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use social_core::auth::Credentials;
use social_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "social")]
#[command(version)]
#[command(about = "Terminal client for Simple Social")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory scanned by the upload picker (default: config or current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

/// Account credentials for one-shot commands. Nothing is persisted between
/// invocations.
#[derive(clap::Args, Debug, Clone)]
struct AccountArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "SOCIAL_PASSWORD", hide_env_values = true)]
    password: String,
}

impl AccountArgs {
    fn credentials(&self) -> Credentials {
        Credentials::new(&self.email, &self.password)
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create an account
    Register {
        #[command(flatten)]
        account: AccountArgs,
    },
    /// Log in and print the feed
    Feed {
        #[command(flatten)]
        account: AccountArgs,
    },
    /// Log in and share a photo or video
    Upload {
        #[command(flatten)]
        account: AccountArgs,

        /// Media file (png, jpg, jpeg, mp4, avi, mov, mkv, webm)
        #[arg(long, value_name = "PATH")]
        file: String,

        /// Caption for the post
        #[arg(long)]
        caption: Option<String>,
    },
    /// Log in and delete one of your posts
    Delete {
        #[command(flatten)]
        account: AccountArgs,

        /// The ID of the post to delete
        #[arg(value_name = "POST_ID")]
        id: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config commands work even when the existing file is broken.
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    let config = config::Config::load().context("load config")?;
    let _log_guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli, &config).await })
}

async fn dispatch(cli: Cli, config: &config::Config) -> Result<()> {
    let Cli { command, root } = cli;

    // default to the interactive client
    let Some(command) = command else {
        return commands::tui::run(root, config).await;
    };

    match command {
        Commands::Register { account } => {
            commands::register::run(config, &account.credentials()).await
        }
        Commands::Feed { account } => commands::feed::run(config, &account.credentials()).await,
        Commands::Upload {
            account,
            file,
            caption,
        } => commands::upload::run(config, &account.credentials(), &file, caption).await,
        Commands::Delete { account, id } => {
            commands::delete::run(config, &account.credentials(), &id).await
        }
        // Handled in `run` before the config is loaded.
        Commands::Config { .. } => Ok(()),
    }
}
