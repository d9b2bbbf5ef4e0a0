//! Configuration management for hale.
//!
//! Loads configuration from ${HALE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for hale configuration and data directories.
    //!
    //! HALE_HOME resolution order:
    //! 1. HALE_HOME environment variable (if set)
    //! 2. ~/.config/hale (default)

    use std::path::PathBuf;

    /// Returns the hale home directory.
    ///
    /// Checks HALE_HOME env var first, falls back to ~/.config/hale
    pub fn hale_home() -> PathBuf {
        if let Ok(home) = std::env::var("HALE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("hale"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        hale_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        hale_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the member portal backend
    pub base_url: String,

    /// API token for the portal (set via `hale login`)
    pub token: Option<String>,

    /// Seconds between portal refreshes (0 disables auto-refresh)
    pub poll_interval_secs: u64,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "http://localhost:3000";
    const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

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

    /// Saves only the token field to the config file.
    ///
    /// Creates the file if it doesn't exist. `None` removes a stored token.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_token(token: Option<&str>) -> Result<()> {
        Self::save_token_to(&paths::config_path(), token)
    }

    /// Saves only the token field to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    pub fn save_token_to(path: &Path, token: Option<&str>) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        match token {
            Some(token) => {
                doc["token"] = value(token);
            }
            None => {
                doc.remove("token");
            }
        }

        Self::write_config(path, &doc.to_string())
    }

    /// Returns the interval between portal refreshes, or None when auto-refresh
    /// is disabled.
    pub fn poll_interval(&self) -> Option<Duration> {
        if self.poll_interval_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.poll_interval_secs))
        }
    }

    /// Returns the stored token if set and non-empty.
    pub fn effective_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            token: None,
            poll_interval_secs: Self::DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Config loading: missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.token, None);
        assert_eq!(config.poll_interval_secs, 5);
    }

    /// Config loading: partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "base_url = \"https://portal.example.com\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, "https://portal.example.com");
        assert_eq!(config.poll_interval_secs, 5);
    }

    /// Config init: creates file with defaults, creates parent dirs.
    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("localhost:3000"));
        assert!(contents.contains("# token ="));
    }

    /// Config init: fails if file exists (no silent overwrite).
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    /// Poll interval: zero disables auto-refresh.
    #[test]
    fn test_poll_interval_zero_disables() {
        let config = Config {
            poll_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.poll_interval(), None);
    }

    /// Token: empty/whitespace treated as unset.
    #[test]
    fn test_effective_token_empty_is_none() {
        let config = Config {
            token: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.effective_token(), None);
    }

    /// save_token: creates new config file with template if it doesn't exist.
    #[test]
    fn test_save_token_creates_file_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_token_to(&config_path, Some("secret-token")).unwrap();

        assert!(config_path.exists());

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.token.as_deref(), Some("secret-token"));

        // Template comments are preserved
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# Hale Configuration"));
        assert!(contents.contains("# Seconds between portal refreshes"));
    }

    /// save_token: preserves other fields in existing config.
    #[test]
    fn test_save_token_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"base_url = "https://portal.example.com"
poll_interval_secs = 30
"#,
        )
        .unwrap();

        Config::save_token_to(&config_path, Some("secret-token")).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.token.as_deref(), Some("secret-token"));
        assert_eq!(config.base_url, "https://portal.example.com"); // preserved
        assert_eq!(config.poll_interval_secs, 30); // preserved
    }

    /// save_token: None removes a previously stored token.
    #[test]
    fn test_save_token_none_removes_token() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_token_to(&config_path, Some("secret-token")).unwrap();
        Config::save_token_to(&config_path, None).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.token, None);
    }

    /// save_token: roundtrip keeps user values while adopting the template.
    #[test]
    fn test_save_token_merges_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        // Old format, no template comments
        fs::write(&config_path, "poll_interval_secs = 60\n").unwrap();

        Config::save_token_to(&config_path, Some("abc")).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# Hale Configuration"));

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.token.as_deref(), Some("abc"));
    }
}
