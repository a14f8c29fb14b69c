//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new blog workspace at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;

    // Creates the database file and schema up front
    repo.open_store()?;
    info!(root = %path.display(), "initialized workspace");

    println!("Initialized devblog workspace at {}", path.display());

    Ok(())
}
