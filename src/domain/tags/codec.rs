//! Conversion between the editor's comma-separated tag string and stored tags
//!
//! The round trip is lossy by nature: a tag containing a comma is split in
//! two, and whitespace around a tag is dropped.

/// Join tags with `", "`. Absent or empty input yields an empty string.
pub fn tags_to_string(tags: Option<&[String]>) -> String {
    match tags {
        Some(tags) => tags.join(", "),
        None => String::new(),
    }
}

/// Split on commas, trim each segment and drop the empty ones.
/// Order and duplicates are kept.
pub fn string_to_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
