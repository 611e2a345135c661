//! Markdown-to-HTML conversion for document bodies and the archive listing.

use pulldown_cmark::{html, Options, Parser};

/// Converts a markdown string to HTML. Pure function, no I/O.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut output = String::new();
    html::push_html(&mut output, Parser::new_ext(markdown, options));
    output
}
