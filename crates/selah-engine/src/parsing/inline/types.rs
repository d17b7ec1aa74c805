use serde::Serialize;

/// A parsed inline node.
///
/// Nodes own their text; the tree is built bottom-up in a single
/// left-to-right pass and handed to the caller outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Span {
    /// Literal text that isn't part of any recognized token.
    Text { value: String },
    /// `**strong**` or `__strong__`.
    Strong { children: Vec<Span> },
    /// `*emphasis*` or `_emphasis_`.
    Emphasis { children: Vec<Span> },
    /// A code span (backtick-delimited). This is a "raw zone": no parsing inside.
    Code { value: String },
    /// `[text](href)`; the href is kept exactly as written.
    Link { href: String, children: Vec<Span> },
}

impl Span {
    pub fn text(value: impl Into<String>) -> Self {
        Span::Text {
            value: value.into(),
        }
    }

    pub fn strong(children: Vec<Span>) -> Self {
        Span::Strong { children }
    }

    pub fn emphasis(children: Vec<Span>) -> Self {
        Span::Emphasis { children }
    }

    pub fn code(value: impl Into<String>) -> Self {
        Span::Code {
            value: value.into(),
        }
    }

    pub fn link(href: impl Into<String>, children: Vec<Span>) -> Self {
        Span::Link {
            href: href.into(),
            children,
        }
    }

    /// Nested children, empty for leaf variants.
    pub fn children(&self) -> &[Span] {
        match self {
            Span::Strong { children }
            | Span::Emphasis { children }
            | Span::Link { children, .. } => children,
            Span::Text { .. } | Span::Code { .. } => &[],
        }
    }

    /// The visible text of this span with all formatting dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Span::Text { value } | Span::Code { value } => out.push_str(value),
            _ => {
                for child in self.children() {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

/// Concatenates the visible text of a span sequence.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::plain_text).collect()
}
