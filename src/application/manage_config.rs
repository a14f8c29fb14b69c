//! Config management use case

use crate::error::{DevblogError, Result};
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};

/// Keys accepted by `devblog config`
pub const CONFIG_KEYS: [&str; 3] = ["editor", "json_export", "archive_export"];

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "json_export" => Ok(config.json_export),
            "archive_export" => Ok(config.archive_export),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => config.editor = value.to_string(),
            "json_export" | "archive_export" => {
                if value.trim().is_empty() {
                    return Err(DevblogError::Config(format!(
                        "'{}' cannot be empty",
                        key
                    )));
                }
                if key == "json_export" {
                    config.json_export = value.to_string();
                } else {
                    config.archive_export = value.to_string();
                }
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> DevblogError {
    DevblogError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::BlogRepository;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("json_export", "backup.json").unwrap();
        service.set("editor", "code -w").unwrap();

        assert_eq!(service.get("json_export").unwrap(), "backup.json");
        assert_eq!(service.get("editor").unwrap(), "code -w");
        assert_eq!(service.get("archive_export").unwrap(), "devblog_export.zip");
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        match service.get("mode") {
            Err(DevblogError::Config(msg)) => assert!(msg.contains("Unknown config key: 'mode'")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(service.set("mode", "x").is_err());
    }

    #[test]
    fn test_empty_export_name_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("archive_export", "  ").is_err());
        assert_eq!(service.get("archive_export").unwrap(), "devblog_export.zip");
    }
}
