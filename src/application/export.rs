//! Export use case: JSON document and zip archive snapshots of all posts

use crate::domain::{markdown_filename, Post};
use crate::error::Result;
use crate::infrastructure::{BlogRepository, FileSystemRepository, PostStore};
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Name of the JSON manifest inside an export archive
pub const MANIFEST_NAME: &str = "posts.json";

/// Export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Archive,
}

/// Pretty-printed JSON array of every post, all fields included
pub fn encode_json(posts: &[Post]) -> Result<String> {
    Ok(serde_json::to_string_pretty(posts)?)
}

/// Write a zip archive holding the JSON manifest and one `<slug>-<id>.md`
/// per post with its raw content.
pub fn encode_archive<W: Write + Seek>(posts: &[Post], writer: W) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(MANIFEST_NAME, options)?;
    zip.write_all(encode_json(posts)?.as_bytes())?;

    for post in posts {
        zip.start_file(markdown_filename(post.title_or_empty(), post.id), options)?;
        zip.write_all(post.content_or_empty().as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Service writing export files for a workspace
pub struct ExportService<'a, S: PostStore> {
    repository: &'a FileSystemRepository,
    store: &'a S,
}

impl<'a, S: PostStore> ExportService<'a, S> {
    pub fn new(repository: &'a FileSystemRepository, store: &'a S) -> Self {
        ExportService { repository, store }
    }

    /// Snapshot the store into `output`, or into the configured default file
    /// name when no output is given. Returns the written path.
    pub fn execute(&self, format: ExportFormat, output: Option<&Path>) -> Result<PathBuf> {
        let target = match output {
            Some(path) => self.repository.resolve_output(path),
            None => {
                let config = self.repository.load_config()?;
                let name = match format {
                    ExportFormat::Json => config.json_export,
                    ExportFormat::Archive => config.archive_export,
                };
                self.repository.root().join(name)
            }
        };

        let posts = self.store.list()?;
        let bytes = match format {
            ExportFormat::Json => encode_json(&posts)?.into_bytes(),
            ExportFormat::Archive => encode_archive(&posts, Cursor::new(Vec::new()))?.into_inner(),
        };

        self.repository.write_file_atomic(&target, &bytes)?;
        info!(
            path = %target.display(),
            posts = posts.len(),
            format = ?format,
            "exported posts"
        );
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostStatus;
    use std::io::Read;
    use zip::ZipArchive;

    fn post(id: i64, title: Option<&str>, content: Option<&str>) -> Post {
        Post {
            id,
            title: title.map(str::to_string),
            tags: Some(vec!["rust".to_string()]),
            status: PostStatus::Draft,
            content: content.map(str::to_string),
            created_at: "2025-01-17T09:30:00.000Z".to_string(),
        }
    }

    fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut file = archive.by_name(name).unwrap();
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_encode_json_is_pretty_array() {
        let json = encode_json(&[post(1, Some("A"), Some("x"))]).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(json.contains("\"createdAt\": \"2025-01-17T09:30:00.000Z\""));

        let parsed: Vec<Post> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![post(1, Some("A"), Some("x"))]);
    }

    #[test]
    fn test_encode_json_empty() {
        assert_eq!(encode_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_archive_contains_manifest_and_markdown() {
        let posts = vec![
            post(1, Some("Hello World"), Some("# Hi")),
            post(7, Some("??? !!!"), Some("punctuation only")),
            post(8, Some("Hello World"), None),
        ];

        let bytes = encode_archive(&posts, Cursor::new(Vec::new()))
            .unwrap()
            .into_inner();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 4);
        assert_eq!(read_entry(&mut archive, "hello-world-1.md"), "# Hi");
        assert_eq!(read_entry(&mut archive, "post-7.md"), "punctuation only");
        assert_eq!(read_entry(&mut archive, "hello-world-8.md"), "");
        assert_eq!(
            read_entry(&mut archive, MANIFEST_NAME),
            encode_json(&posts).unwrap()
        );
    }

    #[test]
    fn test_archive_for_untitled_post() {
        let bytes = encode_archive(&[post(3, None, Some("body"))], Cursor::new(Vec::new()))
            .unwrap()
            .into_inner();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(read_entry(&mut archive, "post-3.md"), "body");
    }
}
