//! File system workspace holding the config, the post database and exports

use crate::error::{DevblogError, Result};
use crate::infrastructure::config::DEVBLOG_DIR;
use crate::infrastructure::{Config, SqliteStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATABASE_FILE: &str = "posts.db";

/// Abstract repository for workspace operations
pub trait BlogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .devblog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .devblog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .devblog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .devblog directory structure
    fn initialize(&self) -> Result<()>;

    /// Open the post database of this workspace
    fn open_store(&self) -> Result<SqliteStore>;
}

/// File system implementation of BlogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the workspace root.
    /// Checks DEVBLOG_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DEVBLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_devblog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DevblogError::Config(format!(
                    "DEVBLOG_ROOT is set to '{}' but no .devblog directory found. \
                    Run 'devblog init' in that directory or unset DEVBLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_devblog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DevblogError::NotDevblogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_devblog_dir(path: &Path) -> bool {
        path.join(DEVBLOG_DIR).is_dir()
    }

    /// Location of the post database
    pub fn database_path(&self) -> PathBuf {
        self.root.join(DEVBLOG_DIR).join(DATABASE_FILE)
    }

    /// Scratch file used while editing a post's content externally
    pub fn scratch_path(&self, name: &str) -> PathBuf {
        self.root.join(DEVBLOG_DIR).join(name)
    }

    /// Resolve an output path: relative paths are taken from the workspace root
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Write a file using a best-effort atomic replace: write to a temp file in
    /// the same directory, then rename into place. The temp file is removed
    /// whether or not the write succeeds.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.devblog-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("export"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        let result = Self::replace_with(&tmp_path, path, contents);
        if result.is_err() && tmp_path.exists() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn replace_with(tmp_path: &Path, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(tmp_path, contents)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(tmp_path, path)?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}

impl BlogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_devblog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let devblog_dir = self.root.join(DEVBLOG_DIR);

        if devblog_dir.exists() {
            return Err(DevblogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&devblog_dir)?;
        Ok(())
    }

    fn open_store(&self) -> Result<SqliteStore> {
        if !self.is_initialized() {
            return Err(DevblogError::NotDevblogDirectory(self.root.clone()));
        }
        SqliteStore::open(&self.database_path())
    }
}
