//! Configuration management for the rent-tui dashboard.
//!
//! Loads the JSONC config file once at startup; everything downstream
//! receives the resulting `Config` explicitly rather than reading any
//! ambient state.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Color theme preference, persisted as the literal string
/// "light" or "dark".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light terminal palette
    Light,
    /// Dark terminal palette
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Display name, also the persisted form.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the portal API
    pub api_base_url: String,
    /// Bearer token; absent means signed out
    pub api_token: Option<String>,
    /// Rows per table page
    pub page_size: usize,
    /// Color theme
    pub theme: Theme,
    /// Bookmarks file path (relative to config dir or absolute)
    pub bookmarks_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            api_token: None,
            page_size: 10,
            theme: Theme::Dark,
            bookmarks_path: "bookmarks.json".to_string(),
        }
    }
}

/// Strip `//` line comments from JSONC content.
///
/// # Details
/// A `//` inside a string literal is kept; the check counts quotes before
/// the candidate position and does not handle escaped quotes.
fn strip_jsonc_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match line.find("//") {
            Some(pos) if line[..pos].matches('"').count() % 2 == 0 => line[..pos].trim_end(),
            _ => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses the default
    ///   location under the user config directory.
    ///
    /// # Details
    /// A missing file yields the default configuration; a present but
    /// malformed file is an error, since credentials and the API endpoint
    /// live here and must not be silently dropped.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_jsonc_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Save configuration to file, creating the config directory if needed.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Default configuration file path:
    /// `$XDG_CONFIG_HOME/rent-tui/config.jsonc` or the platform equivalent.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("rent-tui").join("config.jsonc"))
    }

    /// Resolved bookmarks file path.
    ///
    /// # Details
    /// Absolute paths are used as-is, relative ones resolve against the
    /// config directory.
    pub fn bookmarks_file_path(&self) -> Result<PathBuf> {
        let bookmarks_path = Path::new(&self.bookmarks_path);
        if bookmarks_path.is_absolute() {
            Ok(bookmarks_path.to_path_buf())
        } else {
            let config_dir = config_dir()
                .ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
            Ok(config_dir.join("rent-tui").join(&self.bookmarks_path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_token.is_none());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let config = Config {
            api_token: Some("token".to_string()),
            theme: Theme::Light,
            page_size: 5,
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_token.as_deref(), Some("token"));
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.page_size, 5);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // portal endpoint, no trailing slash
            "api_base_url": "https://portal.example.com/api",
            "theme": "light"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_base_url, "https://portal.example.com/api");
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn test_theme_persisted_as_literal_string() {
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
