use super::kinds::{BlockQuote, Heading, ListItem};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Borrowed slices point into the
/// already-trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// `#`..`######` heading with its trimmed content.
    Heading { depth: u8, content: &'a str },
    /// `>` quoted line.
    Quote { content: &'a str },
    /// `-`, `*`, `+` or `1.` list item.
    ListItem { ordered: bool, content: &'a str },
    /// Anything else: a paragraph line.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkupLineClassifier;

impl MarkupLineClassifier {
    /// Classifies a raw line into a [`LineClass`].
    ///
    /// The line is trimmed first, then openers are tried in fixed priority:
    /// heading, blockquote, unordered item, ordered item. The first match
    /// wins.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        let line = raw.trim();
        if line.is_empty() {
            return LineClass::Blank;
        }

        if let Some((depth, content)) = Heading::parse(line) {
            return LineClass::Heading { depth, content };
        }
        if let Some(content) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote { content };
        }
        if let Some(content) = ListItem::bullet(line) {
            return LineClass::ListItem {
                ordered: false,
                content,
            };
        }
        if let Some(content) = ListItem::ordinal(line) {
            return LineClass::ListItem {
                ordered: true,
                content,
            };
        }
        LineClass::Text(line)
    }
}
