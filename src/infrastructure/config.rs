//! Configuration management

use crate::error::{DevblogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the workspace metadata directory
pub const DEVBLOG_DIR: &str = ".devblog";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::detect_default_editor")]
    pub editor: String,
    /// Default output name for `export json`
    #[serde(default = "default_json_export")]
    pub json_export: String,
    /// Default output name for `export zip`
    #[serde(default = "default_archive_export")]
    pub archive_export: String,
}

fn default_json_export() -> String {
    "devblog_posts.json".to_string()
}

fn default_archive_export() -> String {
    "devblog_export.zip".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            json_export: default_json_export(),
            archive_export: default_archive_export(),
        }
    }
}

impl Config {
    /// Load config from .devblog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DEVBLOG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DevblogError::NotDevblogDirectory(path.to_path_buf())
            } else {
                DevblogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DevblogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .devblog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let devblog_dir = path.join(DEVBLOG_DIR);
        let config_path = devblog_dir.join(CONFIG_FILE);

        if !devblog_dir.exists() {
            fs::create_dir(&devblog_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}
