use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

use crate::parsing::{
    Document,
    blocks::Block,
    inline::{InlineOptions, Span, plain_text},
    parse_document,
};

/// Default cap on emitted heading levels; chat bubbles have no room for
/// `<h1>`-sized text, so deeper levels render no larger than `<h4>`.
pub const DEFAULT_MAX_HEADING_LEVEL: u8 = 4;

/// URL schemes a link may use and still be emitted as an anchor.
pub const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Tunables for HTML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Highest `<hN>` level emitted; deeper headings are clamped to it.
    /// Clamped itself to 1..=6.
    pub max_heading_level: u8,
    /// Open links in a new tab (`target="_blank" rel="noreferrer"`).
    pub external_links: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            max_heading_level: DEFAULT_MAX_HEADING_LEVEL,
            external_links: true,
        }
    }
}

impl HtmlOptions {
    fn heading_level(&self, depth: u8) -> u8 {
        depth.clamp(1, self.max_heading_level.clamp(1, 6))
    }
}

/// Parses `source` and renders it as HTML.
///
/// Blank input has no blocks; it is echoed back verbatim in a single
/// `<p class="plain">` so the message bubble is never empty.
pub fn render_html(source: &str, inline: &InlineOptions, options: &HtmlOptions) -> String {
    let doc = parse_document(source, inline);
    if doc.is_empty() {
        return format!(r#"<p class="plain">{}</p>"#, encode_text(source));
    }
    doc.to_html(options)
}

impl Document {
    /// Renders the blocks as HTML, one block per line.
    pub fn to_html(&self, options: &HtmlOptions) -> String {
        let mut w = HtmlWriter {
            out: String::new(),
            options,
        };
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                w.out.push('\n');
            }
            w.block(block);
        }
        w.out
    }
}

struct HtmlWriter<'o> {
    out: String,
    options: &'o HtmlOptions,
}

impl HtmlWriter<'_> {
    fn block(&mut self, block: &Block<Vec<Span>>) {
        match block {
            Block::Paragraph { content } => self.wrapped("p", content),
            Block::Heading { depth, content } => {
                let tag = format!("h{}", self.options.heading_level(*depth));
                self.wrapped(&tag, content);
            }
            Block::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                self.open(tag);
                for item in items {
                    self.wrapped("li", item);
                }
                self.close(tag);
            }
            Block::Blockquote { content } => self.wrapped("blockquote", content),
        }
    }

    fn spans(&mut self, spans: &[Span]) {
        for span in spans {
            self.span(span);
        }
    }

    fn span(&mut self, span: &Span) {
        match span {
            Span::Text { value } => self.out.push_str(&encode_text(value)),
            Span::Strong { children } => self.wrapped("strong", children),
            Span::Emphasis { children } => self.wrapped("em", children),
            Span::Code { value } => {
                self.open("code");
                self.out.push_str(&encode_text(value));
                self.close("code");
            }
            Span::Link { href, children } => {
                if !is_safe_href(href) {
                    log::debug!(
                        "rendering {:?} without an anchor, unsafe href {href:?}",
                        plain_text(children)
                    );
                    self.spans(children);
                    return;
                }
                self.out.push_str(r#"<a href=""#);
                self.out.push_str(&encode_double_quoted_attribute(href));
                self.out.push('"');
                if self.options.external_links {
                    self.out.push_str(r#" target="_blank" rel="noreferrer""#);
                }
                self.out.push('>');
                self.spans(children);
                self.close("a");
            }
        }
    }

    fn wrapped(&mut self, tag: &str, children: &[Span]) {
        self.open(tag);
        self.spans(children);
        self.close(tag);
    }

    fn open(&mut self, tag: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn close(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}

/// Whether `href` may be emitted as an anchor target.
///
/// Relative references and fragments pass; absolute URLs must use one of
/// [`SAFE_SCHEMES`].
pub fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    let Some(colon) = href.find(':') else {
        return true;
    };
    let scheme = &href[..colon];
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    SAFE_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s))
}
