//! Post entity and publish status

use crate::error::DevblogError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned primary key of a post
pub type PostId = i64;

/// Publish status of a post
///
/// Parsing is case-insensitive and ignores surrounding whitespace, both from
/// the command line and from JSON; serialization is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DevblogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            _ => Err(DevblogError::InvalidStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for PostStatus {
    type Error = DevblogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A persisted blog post.
///
/// `title`, `tags` and `content` are optional because imported records are
/// stored as given; a field missing from the import stays missing and is
/// omitted again on export. Posts created through the editor always carry all
/// three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Post {
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// The mutable part of a post: everything except `id` and `createdAt`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostFields {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: PostStatus,
    pub content: Option<String>,
}

/// Insert request for the store
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPost {
    pub fields: PostFields,
    /// Creation timestamp; the store stamps the current time when `None`
    pub created_at: Option<String>,
}

impl NewPost {
    pub fn new(fields: PostFields) -> Self {
        NewPost {
            fields,
            created_at: None,
        }
    }
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision,
/// e.g. `2025-01-17T09:30:00.000Z`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
