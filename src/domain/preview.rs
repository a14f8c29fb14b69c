//! Markdown preview rendering

use pulldown_cmark::{html, Options, Parser as MdParser};

/// Shown instead of an empty body
pub const EMPTY_PREVIEW: &str = "Nothing to preview yet...";

/// Render post content to HTML. Empty content renders the placeholder text.
pub fn render_preview(content: &str) -> String {
    let source = if content.is_empty() {
        EMPTY_PREVIEW
    } else {
        content
    };

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = MdParser::new_ext(source, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
