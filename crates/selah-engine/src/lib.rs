pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    Document,
    blocks::Block,
    inline::{InlineOptions, Span, parse_inline, plain_text},
    parse_blocks, parse_document,
};
pub use render::{HtmlOptions, render_html};

/// Parses a message with default inline options.
pub fn render_document(text: &str) -> Document {
    parse_document(text, &InlineOptions::default())
}
