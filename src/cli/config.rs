//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::web::{SiteSettings, load_stylesheet};

/// Application configuration loaded from config file and environment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the JSON file holding every note
    pub data_file: PathBuf,

    /// Address the web server listens on
    pub bind: String,

    /// Hex SHA-256 of the editing password (see `marginalia hash-password`)
    pub password_hash: Option<String>,

    pub site_title: String,

    /// Absolute URL the site is reachable at, used for feed links
    pub base_url: String,

    pub page_size: usize,
    pub search_limit: usize,
    pub feed_limit: usize,

    /// Theme name ("default", "dark") or path to a CSS file
    pub theme: Option<String>,

    /// Log filter, e.g. "info" or "marginalia=debug,tower_http=info"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("notes.json"),
            bind: "127.0.0.1:8000".to_string(),
            password_hash: None,
            site_title: "Notes".to_string(),
            base_url: "http://127.0.0.1:8000".to_string(),
            page_size: 8,
            search_limit: 16,
            feed_limit: 16,
            theme: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from a specific path, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file: {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/marginalia/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marginalia")
            .join("config.toml")
    }

    /// Apply `MARGINALIA_DATA`, `MARGINALIA_BIND`, `MARGINALIA_PASSWORD_HASH`
    /// and `MARGINALIA_LOG_LEVEL`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("MARGINALIA_DATA") {
            self.data_file = PathBuf::from(val);
        }
        if let Some(val) = lookup("MARGINALIA_BIND") {
            self.bind = val;
        }
        if let Some(val) = lookup("MARGINALIA_PASSWORD_HASH") {
            self.password_hash = Some(val);
        }
        if let Some(val) = lookup("MARGINALIA_LOG_LEVEL") {
            self.log_level = val;
        }
    }

    /// Resolve the data file, with CLI argument taking precedence.
    ///
    /// A leading `~/` expands to the home directory.
    pub fn data_file(&self, cli_data: Option<&PathBuf>) -> PathBuf {
        let path = cli_data.unwrap_or(&self.data_file);
        expand_tilde(path)
    }

    /// Builds the web layer's settings, reading the theme stylesheet.
    pub fn site_settings(&self) -> Result<SiteSettings> {
        let stylesheet = load_stylesheet(self.theme.as_deref())?;
        Ok(SiteSettings {
            site_title: self.site_title.clone(),
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            search_limit: self.search_limit,
            feed_limit: self.feed_limit,
            stylesheet,
        })
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
