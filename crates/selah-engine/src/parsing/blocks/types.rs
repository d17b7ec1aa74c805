use serde::Serialize;

/// A top-level structural unit of a parsed message.
///
/// Generic over its content: block parsing produces `Block<String>` (the raw,
/// line-joined text of each block), and inline rendering maps that into
/// `Block<Vec<Span>>` via [`Block::map_content`].
///
/// [`Span`]: crate::parsing::inline::Span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block<C = String> {
    /// Consecutive plain lines joined with single spaces.
    Paragraph { content: C },
    /// An ATX-style heading (`#` to `######`).
    Heading {
        /// Number of leading `#` characters, 1 to 6.
        depth: u8,
        content: C,
    },
    /// A run of list items sharing the same ordered/unordered flavour.
    List { ordered: bool, items: Vec<C> },
    /// A single `>` quoted line.
    Blockquote { content: C },
}

impl<C> Block<C> {
    /// Transforms every content slot of this block, keeping its shape.
    pub fn map_content<D>(self, mut f: impl FnMut(C) -> D) -> Block<D> {
        match self {
            Block::Paragraph { content } => Block::Paragraph {
                content: f(content),
            },
            Block::Heading { depth, content } => Block::Heading {
                depth,
                content: f(content),
            },
            Block::List { ordered, items } => Block::List {
                ordered,
                items: items.into_iter().map(f).collect(),
            },
            Block::Blockquote { content } => Block::Blockquote {
                content: f(content),
            },
        }
    }

    /// Short name of the variant, as it appears in trace logs and the
    /// serialized `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::List { .. } => "list",
            Block::Blockquote { .. } => "blockquote",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_content_keeps_heading_depth() {
        let block = Block::Heading {
            depth: 3,
            content: "Title".to_string(),
        };
        let mapped = block.map_content(|c| c.len());
        assert_eq!(
            mapped,
            Block::Heading {
                depth: 3,
                content: 5
            }
        );
    }

    #[test]
    fn map_content_visits_every_list_item() {
        let block = Block::List {
            ordered: true,
            items: vec!["a".to_string(), "bb".to_string()],
        };
        let mut seen = vec![];
        let mapped = block.map_content(|c| {
            seen.push(c.clone());
            c.to_uppercase()
        });
        assert_eq!(seen, vec!["a", "bb"]);
        assert_eq!(
            mapped,
            Block::List {
                ordered: true,
                items: vec!["A".to_string(), "BB".to_string()],
            }
        );
    }

    #[test]
    fn kind_names() {
        let p: Block = Block::Paragraph {
            content: String::new(),
        };
        assert_eq!(p.kind_name(), "paragraph");
        let q: Block = Block::Blockquote {
            content: String::new(),
        };
        assert_eq!(q.kind_name(), "blockquote");
    }
}
