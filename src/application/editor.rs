//! Editor state controller
//!
//! Holds the edit buffer for either a new post or the selected one. The
//! store is the only source of truth: the post list is re-read after every
//! mutation instead of being patched in place.

use crate::domain::{string_to_tags, tags_to_string, NewPost, Post, PostFields, PostId, PostStatus};
use crate::error::{DevblogError, Result};
use crate::infrastructure::PostStore;
use tracing::debug;

/// Transient, editor-facing view of a post. Tags are kept in their
/// comma-separated form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorBuffer {
    pub title: String,
    pub tags: String,
    pub status: PostStatus,
    pub content: String,
}

impl EditorBuffer {
    /// Project a stored post into its editable form
    pub fn from_post(post: &Post) -> Self {
        EditorBuffer {
            title: post.title_or_empty().to_string(),
            tags: tags_to_string(post.tags.as_deref()),
            status: post.status,
            content: post.content_or_empty().to_string(),
        }
    }

    fn to_fields(&self) -> PostFields {
        PostFields {
            title: Some(self.title.trim().to_string()),
            tags: Some(string_to_tags(&self.tags)),
            status: self.status,
            content: Some(self.content.clone()),
        }
    }
}

/// Which post the buffer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    New,
    Editing(PostId),
}

pub struct EditorController<S: PostStore> {
    store: S,
    posts: Vec<Post>,
    state: EditorState,
    buffer: EditorBuffer,
}

impl<S: PostStore> EditorController<S> {
    /// Start in the `New` state with the current post list loaded
    pub fn new(store: S) -> Result<Self> {
        let posts = store.list()?;
        Ok(EditorController {
            store,
            posts,
            state: EditorState::New,
            buffer: EditorBuffer::default(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Posts as of the last mutation, in store order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn selected_id(&self) -> Option<PostId> {
        match self.state {
            EditorState::New => None,
            EditorState::Editing(id) => Some(id),
        }
    }

    pub fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut EditorBuffer {
        &mut self.buffer
    }

    /// Switch selection, discarding unsaved buffer changes.
    ///
    /// `None` resets the buffer to new-post defaults. Selecting an id that is
    /// not in the store fails and leaves the controller untouched.
    pub fn select(&mut self, id: Option<PostId>) -> Result<()> {
        match id {
            None => {
                self.state = EditorState::New;
                self.buffer = EditorBuffer::default();
            }
            Some(id) => {
                let post = self
                    .posts
                    .iter()
                    .find(|p| p.id == id)
                    .ok_or(DevblogError::PostNotFound(id))?;
                self.buffer = EditorBuffer::from_post(post);
                self.state = EditorState::Editing(id);
            }
        }
        debug!(state = ?self.state, "selection changed");
        Ok(())
    }

    /// Push the buffer to the store.
    ///
    /// Returns the id of the saved post, or `None` when the trimmed title is
    /// empty and nothing was written.
    pub fn save(&mut self) -> Result<Option<PostId>> {
        if self.buffer.title.trim().is_empty() {
            debug!("save skipped: title is empty");
            return Ok(None);
        }

        let fields = self.buffer.to_fields();
        let id = match self.state {
            EditorState::New => {
                let id = self.store.add(&NewPost::new(fields))?;
                self.state = EditorState::Editing(id);
                id
            }
            EditorState::Editing(id) => {
                if !self.store.update(id, &fields)? {
                    return Err(DevblogError::PostNotFound(id));
                }
                id
            }
        };

        self.refresh()?;
        Ok(Some(id))
    }

    /// Delete the selected post and return to the `New` state.
    /// Returns `false` when nothing was selected. If the post is already gone
    /// from the store the controller still resets, then reports `PostNotFound`.
    pub fn delete(&mut self) -> Result<bool> {
        let EditorState::Editing(id) = self.state else {
            return Ok(false);
        };

        let removed = self.store.delete(id)?;
        self.refresh()?;
        self.select(None)?;

        if !removed {
            return Err(DevblogError::PostNotFound(id));
        }
        Ok(true)
    }

    /// Re-read the post list from the store
    pub fn refresh(&mut self) -> Result<()> {
        self.posts = self.store.list()?;
        Ok(())
    }
}
