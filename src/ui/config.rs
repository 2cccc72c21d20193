//! # Settings
//!
//! What the `dodo` demo remembers between runs: the theme picked with `t`
//! and how the tree view draws itself.
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "show_lines": true,
//!   "indent": 2
//! }
//! ```
//!
//! The file lives at `<config_dir>/dodo/config.json`, resolved per platform by
//! `directories`. Every key is optional; unknown keys are rejected so typos
//! surface as errors instead of being ignored.

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Demo settings persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Built-in theme name, matched case-insensitively.
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Draw `│ ├ └` connectors in the tree view.
    #[serde(default = "default_show_lines")]
    pub show_lines: bool,

    /// Columns per tree depth level.
    #[serde(default = "default_indent")]
    pub indent: u16,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_show_lines() -> bool {
    true
}

fn default_indent() -> u16 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            show_lines: default_show_lines(),
            indent: default_indent(),
        }
    }
}

impl Config {
    /// Settings from the default location. A broken file is logged and
    /// replaced by defaults; the demo should still start.
    pub fn load() -> Self {
        match Self::default_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                warn!("using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Read settings from `path`. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))
            }
        };
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Write settings to `path`, creating missing directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Record `name` as the theme to start with next time. Returns whether
    /// anything changed, i.e. whether the file needs saving.
    pub fn remember_theme(&mut self, name: &str) -> bool {
        if self.theme == name {
            return false;
        }
        self.theme = name.to_string();
        true
    }

    /// `<config_dir>/dodo/config.json`.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "dodo")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert!(config.show_lines);
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_tree_settings_without_theme() {
        let config: Config =
            serde_json::from_str(r#"{"show_lines": false, "indent": 4}"#).expect("deserialize");
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert!(!config.show_lines);
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn test_save_creates_directories_and_reloads() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("nested").join("dodo").join("config.json");
        let config = Config {
            theme: "Dracula".to_string(),
            show_lines: false,
            indent: 3,
        };

        config.save_to(&path).expect("save_to");

        assert_eq!(Config::load_from(&path).expect("load_from"), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let loaded = Config::load_from(&temp_dir.path().join("absent.json")).expect("load_from");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_directory_instead_of_file_is_an_error() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let err = Config::load_from(temp_dir.path()).expect_err("should fail");
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write");

        let err = Config::load_from(&path).expect_err("should fail");
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"theme": "Nord", "indnet": 4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_remember_theme() {
        let mut config = Config::default();
        assert!(!config.remember_theme("Catppuccin Mocha"));
        assert!(config.remember_theme("Nord"));
        assert_eq!(config.theme, "Nord");
        assert!(!config.remember_theme("Nord"));
    }
}
