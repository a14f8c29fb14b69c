//! Tag handling

pub mod codec;

pub use codec::{string_to_tags, tags_to_string};
