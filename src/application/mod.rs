//! Application layer - Use cases and orchestration

pub mod editor;
pub mod export;
pub mod import;
pub mod init;
pub mod manage_config;
pub mod posts;

pub use editor::{EditorBuffer, EditorController, EditorState};
pub use export::{ExportFormat, ExportService};
pub use import::{import_file, import_posts, ImportOutcome};
pub use posts::{create_post, edit_post, ContentEditor, PostEdits};
