//! devblog - Local content manager for markdown blog posts
//!
//! Posts live in a SQLite database inside a `.devblog` workspace and can be
//! edited, tagged, exported to JSON or a zip archive, and imported back.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DevblogError;
