pub mod blocks;
pub mod inline;
pub mod text;

use serde::Serialize;

use blocks::{Block, BlockBuilder, MarkupLineClassifier};
use inline::{InlineOptions, Span, parse_inline_with};
use text::{lines, normalize_line_breaks};

/// A fully rendered message: blocks whose content is inline span trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block<Vec<Span>>>,
}

impl Document {
    /// True when the source produced no blocks (empty or whitespace-only).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Splits text into blocks without touching inline markup.
///
/// Total: every input yields a result, empty only for blank input.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let text = normalize_line_breaks(text);
    let classifier = MarkupLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in lines(&text) {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

/// Parses blocks, then renders each block's text (and each list item) into
/// inline spans.
pub fn parse_document(text: &str, options: &InlineOptions) -> Document {
    let blocks: Vec<_> = parse_blocks(text)
        .into_iter()
        .map(|b| b.map_content(|content| parse_inline_with(&content, options)))
        .collect();

    if log::log_enabled!(log::Level::Trace) {
        let kinds: Vec<_> = blocks.iter().map(Block::kind_name).collect();
        log::trace!("parsed {} bytes into {kinds:?}", text.len());
    }

    Document { blocks }
}

#[cfg(test)]
mod tests;
