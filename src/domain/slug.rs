//! Filename-safe slugs for exported posts

use crate::domain::PostId;
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder used when a title has no usable characters
pub const FALLBACK_SLUG: &str = "post";

fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lowercase the title, collapse every run of characters outside `[a-z0-9]`
/// into one hyphen and strip hyphens at both ends. May return an empty string.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let collapsed = separator_regex().replace_all(&lower, "-");
    collapsed.trim_matches('-').to_string()
}

/// Markdown file name for a post inside an export archive: `<slug>-<id>.md`.
/// The id suffix keeps names unique when titles collide.
pub fn markdown_filename(title: &str, id: PostId) -> String {
    let slug = slugify(title);
    let slug = if slug.is_empty() {
        FALLBACK_SLUG
    } else {
        slug.as_str()
    };
    format!("{}-{}.md", slug, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Rust  --  & Friends!!"), "rust-friends");
    }

    #[test]
    fn test_slugify_strips_edges() {
        assert_eq!(slugify("  ...Intro to SQL?  "), "intro-to-sql");
    }

    #[test]
    fn test_slugify_non_ascii_letters_become_separators() {
        assert_eq!(slugify("Café Über 2"), "caf-ber-2");
    }

    #[test]
    fn test_slugify_all_punctuation_is_empty() {
        assert_eq!(slugify("??? !!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_markdown_filename_uses_fallback() {
        assert_eq!(markdown_filename("??? !!!", 7), "post-7.md");
        assert_eq!(markdown_filename("", 1), "post-1.md");
    }

    #[test]
    fn test_markdown_filename_is_unique_per_id() {
        assert_eq!(markdown_filename("Same", 1), "same-1.md");
        assert_eq!(markdown_filename("Same", 2), "same-2.md");
    }
}
