//! Error types for devblog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for devblog application
#[derive(Debug, Error)]
pub enum DevblogError {
    #[error("Not a devblog directory: {0}")]
    NotDevblogDirectory(PathBuf),

    #[error("Post not found: {0}")]
    PostNotFound(i64),

    #[error("Invalid status: '{0}'. Valid statuses are: draft, published")]
    InvalidStatus(String),

    #[error("Import failed: {0}")]
    ImportParse(String),

    #[error("Import stopped at element {index}: {reason}")]
    ImportElement { index: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DevblogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DevblogError::NotDevblogDirectory(_) => 2,
            DevblogError::PostNotFound(_) => 3,
            DevblogError::ImportParse(_) | DevblogError::ImportElement { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DevblogError::NotDevblogDirectory(path) => {
                format!(
                    "Not a devblog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'devblog init' in this directory to create a new blog\n\
                    • Navigate to an existing devblog directory\n\
                    • Set DEVBLOG_ROOT environment variable to your blog path",
                    path.display()
                )
            }
            DevblogError::PostNotFound(id) => {
                format!(
                    "Post not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'devblog list' to see existing post ids",
                    id
                )
            }
            DevblogError::ImportParse(msg) => {
                format!(
                    "Import failed: {}\n\n\
                    The import file must be a JSON array of posts, e.g.\n\
                    [{{\"title\": \"Hello\", \"tags\": [\"rust\"], \"status\": \"draft\", \"content\": \"# Hi\"}}]",
                    msg
                )
            }
            DevblogError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: devblog config editor 'vim'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DevblogError
pub type Result<T> = std::result::Result<T, DevblogError>;
