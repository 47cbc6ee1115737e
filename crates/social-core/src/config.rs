//! Configuration management for the Simple Social client.
//!
//! Loads configuration from ${SOCIAL_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// What to do with a freshly issued token when the follow-up
/// current-user fetch fails during login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PartialLoginPolicy {
    /// Clear the whole session (token included).
    #[default]
    Discard,
    /// Keep the token without a confirmed user until the next login or logout.
    Retain,
}

/// Authentication settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub partial_login: PartialLoginPolicy,
}

/// Upload picker settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory scanned for media files (defaults to the working directory).
    pub media_root: Option<String>,
}

pub mod paths {
    //! Path resolution for configuration and log directories.
    //!
    //! SOCIAL_HOME resolution order:
    //! 1. SOCIAL_HOME environment variable (if set)
    //! 2. ~/.config/social (default)

    use std::path::PathBuf;

    /// Returns the client home directory.
    pub fn social_home() -> PathBuf {
        if let Ok(home) = std::env::var("SOCIAL_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("social")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        social_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        social_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend API
    pub api_url: String,

    /// Log filter used when SOCIAL_LOG is unset
    pub log_level: String,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

impl Config {
    pub const DEFAULT_API_URL: &str = "http://localhost:8000";
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Environment variable overriding `api_url`.
    pub const API_URL_ENV: &str = "SOCIAL_API_URL";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the API base URL with precedence: env > config > default.
    pub fn api_base_url(&self) -> Result<String> {
        let env_url = std::env::var(Self::API_URL_ENV).ok();
        resolve_base_url(env_url.as_deref(), Some(&self.api_url))
    }

    /// Returns the directory the upload picker scans.
    pub fn media_root(&self) -> PathBuf {
        match self.upload.media_root.as_deref().map(str::trim) {
            Some(root) if !root.is_empty() => crate::media::normalize_input_path(root),
            _ => PathBuf::from("."),
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            auth: AuthConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Picks the first non-empty candidate (env first, then config), falling back
/// to the default, and validates it as a URL.
fn resolve_base_url(env_url: Option<&str>, config_url: Option<&str>) -> Result<String> {
    let chosen = [env_url, config_url]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(Config::DEFAULT_API_URL);

    url::Url::parse(chosen).with_context(|| format!("Invalid API base URL: {chosen}"))?;
    Ok(chosen.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();

        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.auth.partial_login, PartialLoginPolicy::Discard);
        assert!(config.upload.media_root.is_none());
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[auth]\npartial_login = \"retain\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.auth.partial_login, PartialLoginPolicy::Retain);
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_rejects_unknown_policy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[auth]\npartial_login = \"sometimes\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_writes_template_and_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::init(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("api_url ="));
        assert!(contents.contains("partial_login"));

        // The template must parse back into the defaults.
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url, Config::DEFAULT_API_URL);

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_resolve_base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some("http://env:9000/"), Some("http://cfg:8000")).unwrap(),
            "http://env:9000"
        );
        assert_eq!(
            resolve_base_url(Some("  "), Some("http://cfg:8000")).unwrap(),
            "http://cfg:8000"
        );
        assert_eq!(
            resolve_base_url(None, None).unwrap(),
            Config::DEFAULT_API_URL
        );
    }

    #[test]
    fn test_resolve_base_url_rejects_garbage() {
        let err = resolve_base_url(None, Some("not a url")).unwrap_err();
        assert!(err.to_string().contains("Invalid API base URL"));
    }

    #[test]
    fn test_media_root_defaults_to_cwd() {
        let mut config = Config::default();
        assert_eq!(config.media_root(), PathBuf::from("."));

        config.upload.media_root = Some("/srv/media".to_string());
        assert_eq!(config.media_root(), PathBuf::from("/srv/media"));
    }
}
