//! Converts a parsed [`Document`] into styled terminal lines.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span as TuiSpan},
};
use selah_engine::{Block, Document, Span};

const BULLET: &str = "• ";
const QUOTE_BAR: &str = "│ ";

pub fn document_lines(doc: &Document) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in &doc.blocks {
        match block {
            Block::Heading { depth, content } => {
                let style = Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
                let mut spans = vec![TuiSpan::styled(
                    format!("{} ", "#".repeat(*depth as usize)),
                    style,
                )];
                push_spans(content, style, &mut spans);
                lines.push(Line::from(spans));
            }
            Block::Paragraph { content } => {
                lines.push(styled_line(content, Style::default()));
            }
            Block::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}. ", i + 1)
                    } else {
                        BULLET.to_string()
                    };
                    let mut spans = vec![TuiSpan::styled(marker, Style::default().fg(Color::Green))];
                    push_spans(item, Style::default(), &mut spans);
                    lines.push(Line::from(spans));
                }
            }
            Block::Blockquote { content } => {
                let mut spans = vec![TuiSpan::styled(
                    QUOTE_BAR,
                    Style::default().fg(Color::DarkGray),
                )];
                push_spans(content, Style::default().add_modifier(Modifier::ITALIC), &mut spans);
                lines.push(Line::from(spans));
            }
        }
        lines.push(Line::default()); // Empty line between blocks
    }

    lines.pop();
    lines
}

fn styled_line(content: &[Span], style: Style) -> Line<'static> {
    let mut spans = Vec::new();
    push_spans(content, style, &mut spans);
    Line::from(spans)
}

/// Flattens a span tree, layering each node's style over its parent's.
fn push_spans(content: &[Span], style: Style, out: &mut Vec<TuiSpan<'static>>) {
    for span in content {
        match span {
            Span::Text { value } => out.push(TuiSpan::styled(value.clone(), style)),
            Span::Strong { children } => {
                push_spans(children, style.add_modifier(Modifier::BOLD), out)
            }
            Span::Emphasis { children } => {
                push_spans(children, style.add_modifier(Modifier::ITALIC), out)
            }
            Span::Code { value } => {
                out.push(TuiSpan::styled(value.clone(), style.fg(Color::Yellow)))
            }
            Span::Link { href, children } => {
                push_spans(
                    children,
                    style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                    out,
                );
                out.push(TuiSpan::styled(
                    format!(" <{href}>"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
}
