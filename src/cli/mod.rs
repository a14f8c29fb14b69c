//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ExportKind, PostArgs};
pub use output::{format_buffer, format_post_list};
