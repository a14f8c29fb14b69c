//! Domain layer - Business logic and domain models

pub mod post;
pub mod preview;
pub mod slug;
pub mod tags;

pub use post::{now_timestamp, NewPost, Post, PostFields, PostId, PostStatus};
pub use preview::render_preview;
pub use slug::{markdown_filename, slugify};
pub use tags::{string_to_tags, tags_to_string};
