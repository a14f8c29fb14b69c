//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devblog")]
#[command(about = "Local content manager for markdown blog posts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Buffer fields shared by `new` and `edit`
#[derive(Args, Debug, Default)]
pub struct PostArgs {
    /// Post title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Comma-separated tags (e.g. "rust, cli")
    #[arg(long)]
    pub tags: Option<String>,

    /// Publish status (draft, published)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Markdown content
    #[arg(short, long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read markdown content from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Pretty-printed JSON array of all posts
    Json,
    /// Zip archive with posts.json and one markdown file per post
    Zip,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new blog workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a new post
    New {
        #[command(flatten)]
        post: PostArgs,
    },

    /// Edit an existing post
    Edit {
        /// Post id
        id: i64,

        #[command(flatten)]
        post: PostArgs,

        /// Open the content in the configured editor before saving
        #[arg(short, long)]
        editor: bool,
    },

    /// Show a post as it appears in the editor
    Show {
        /// Post id
        id: i64,

        /// Render the content as an HTML preview instead
        #[arg(long)]
        html: bool,
    },

    /// List all posts
    List,

    /// Delete a post
    Delete {
        /// Post id
        id: i64,
    },

    /// Export all posts
    Export {
        /// Output format
        #[arg(value_enum)]
        kind: ExportKind,

        /// Output file (default: configured export name in the workspace root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import posts from a JSON array
    Import {
        /// JSON file to import
        file: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
