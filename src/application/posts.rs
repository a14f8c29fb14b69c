//! Create and edit use cases driven through the editor controller

use crate::application::editor::{EditorBuffer, EditorController};
use crate::domain::{PostId, PostStatus};
use crate::error::Result;
use crate::infrastructure::{EditorSession, PostStore};
use std::path::Path;

/// Buffer overrides supplied on the command line. `None` keeps the value
/// already in the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostEdits {
    pub title: Option<String>,
    pub tags: Option<String>,
    pub status: Option<PostStatus>,
    pub content: Option<String>,
}

impl PostEdits {
    pub fn apply(self, buffer: &mut EditorBuffer) {
        if let Some(title) = self.title {
            buffer.title = title;
        }
        if let Some(tags) = self.tags {
            buffer.tags = tags;
        }
        if let Some(status) = self.status {
            buffer.status = status;
        }
        if let Some(content) = self.content {
            buffer.content = content;
        }
    }
}

/// External editor used to rewrite the content before saving
pub struct ContentEditor<'a> {
    pub session: &'a EditorSession,
    pub scratch: &'a Path,
}

/// Fill a fresh buffer and save it as a new post.
/// Returns `None` when the title is blank and nothing was saved.
pub fn create_post<S: PostStore>(
    controller: &mut EditorController<S>,
    edits: PostEdits,
) -> Result<Option<PostId>> {
    controller.select(None)?;
    edits.apply(controller.buffer_mut());
    controller.save()
}

/// Load an existing post, apply the overrides, optionally hand the content to
/// an external editor, and save.
pub fn edit_post<S: PostStore>(
    controller: &mut EditorController<S>,
    id: PostId,
    edits: PostEdits,
    content_editor: Option<ContentEditor<'_>>,
) -> Result<Option<PostId>> {
    controller.select(Some(id))?;
    edits.apply(controller.buffer_mut());

    if let Some(editor) = content_editor {
        let edited = editor
            .session
            .edit(editor.scratch, &controller.buffer().content)?;
        controller.buffer_mut().content = edited;
    }

    controller.save()
}
