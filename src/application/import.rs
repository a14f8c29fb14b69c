//! Import use case: bulk-insert posts from a JSON document

use crate::domain::{NewPost, PostFields, PostId, PostStatus};
use crate::error::{DevblogError, Result};
use crate::infrastructure::PostStore;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// One element of an import document. Fields are taken verbatim; anything
/// else in the object (such as an exported `id`) is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedPost {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    status: Option<PostStatus>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl ImportedPost {
    fn into_new_post(self) -> NewPost {
        NewPost {
            fields: PostFields {
                title: self.title,
                tags: self.tags,
                status: self.status.unwrap_or_default(),
                content: self.content,
            },
            created_at: self.created_at.filter(|stamp| !stamp.is_empty()),
        }
    }
}

/// What an import did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The document was valid JSON but not an array; nothing was inserted
    NotAnArray,
    /// Ids of the inserted posts, in document order
    Imported(Vec<PostId>),
}

impl ImportOutcome {
    pub fn imported_count(&self) -> usize {
        match self {
            ImportOutcome::NotAnArray => 0,
            ImportOutcome::Imported(ids) => ids.len(),
        }
    }
}

/// Parse `text` and insert every array element as a new post.
///
/// Elements are inserted one by one without a surrounding transaction: if an
/// element is malformed or the store fails, the posts inserted before it stay.
pub fn import_posts<S: PostStore>(store: &S, text: &str) -> Result<ImportOutcome> {
    let document: Value = serde_json::from_str(text).map_err(|e| {
        error!(error = %e, "import document is not valid JSON");
        DevblogError::ImportParse(e.to_string())
    })?;

    let Value::Array(elements) = document else {
        warn!("import document is not a JSON array; nothing imported");
        return Ok(ImportOutcome::NotAnArray);
    };

    let mut ids = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let imported: ImportedPost =
            serde_json::from_value(element).map_err(|e| DevblogError::ImportElement {
                index,
                reason: e.to_string(),
            })?;
        ids.push(store.add(&imported.into_new_post())?);
    }

    info!(count = ids.len(), "imported posts");
    Ok(ImportOutcome::Imported(ids))
}

/// Read an import file and hand its contents to [`import_posts`]
pub fn import_file<S: PostStore>(store: &S, path: &Path) -> Result<ImportOutcome> {
    let text = fs::read_to_string(path)?;
    import_posts(store, &text)
}
