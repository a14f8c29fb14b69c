//! Output formatting utilities

use crate::application::EditorBuffer;
use crate::domain::Post;
use chrono::DateTime;

/// Format the post list: id, status, creation date and title per line
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        let title = match post.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => "(untitled)",
        };
        output.push_str(&format!(
            "{:>4}  {:<9}  {:<10}  {}\n",
            post.id,
            post.status.as_str(),
            created_date(&post.created_at),
            title
        ));
    }
    output
}

/// Date part of a stored timestamp; unparseable stamps are shown as stored
fn created_date(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|stamp| stamp.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

/// Format an editor buffer the way the edit form shows it
pub fn format_buffer(buffer: &EditorBuffer) -> String {
    format!(
        "Title:  {}\nTags:   {}\nStatus: {}\n\n{}",
        buffer.title, buffer.tags, buffer.status, buffer.content
    )
}
