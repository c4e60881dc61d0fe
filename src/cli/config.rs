//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::Category;

/// Category used when none is given and the config doesn't name one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Auto-save interval used when the config doesn't set one.
pub const DEFAULT_AUTOSAVE_SECS: u64 = 30;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Notes file
    pub file: Option<PathBuf>,

    /// Editor command for editing notes
    pub editor: Option<String>,

    /// Category for new notes when `--category` is omitted
    pub default_category: Option<String>,

    /// Seconds between auto-saves while a note is open in the editor
    pub autosave_secs: Option<u64>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notepad/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notepad")
            .join("config.toml")
    }

    /// Resolve the notes file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--file` argument
    /// 2. Config file `file` setting
    /// 3. `notes.json` in the platform data directory
    pub fn notes_file(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(Self::default_notes_file)
    }

    /// Returns the default notes file location.
    ///
    /// Default: `~/.local/share/notepad/notes.json` (platform equivalent elsewhere)
    pub fn default_notes_file() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notepad")
            .join("notes.json")
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }

    /// Resolve the category for a command, with CLI argument taking precedence.
    pub fn category(&self, cli_category: Option<&str>) -> Result<Category> {
        let name = cli_category
            .or(self.default_category.as_deref())
            .unwrap_or(DEFAULT_CATEGORY);
        Category::new(name).with_context(|| format!("invalid category '{}'", name))
    }

    /// Returns the auto-save interval. Zero in the config is treated as one second.
    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(self.autosave_secs.unwrap_or(DEFAULT_AUTOSAVE_SECS).max(1))
    }
}
