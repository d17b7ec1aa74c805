//! Behaviour tests for the parsing module as a whole.
//!
//! Per-line and per-token cases live next to the code they exercise; these
//! tests drive full messages through `parse_blocks` and `parse_document`.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::parsing::{
    Document,
    blocks::Block,
    inline::{InlineOptions, Span},
    parse_blocks, parse_document,
};

fn paragraph(s: &str) -> Block {
    Block::Paragraph {
        content: s.to_string(),
    }
}

fn list(ordered: bool, items: &[&str]) -> Block {
    Block::List {
        ordered,
        items: items.iter().map(|i| i.to_string()).collect(),
    }
}

fn render(s: &str) -> Document {
    parse_document(s, &InlineOptions::default())
}

#[test]
fn heading() {
    assert_eq!(
        parse_blocks("# Hello"),
        vec![Block::Heading {
            depth: 1,
            content: "Hello".to_string()
        }]
    );
}

#[test]
fn unordered_list() {
    assert_eq!(parse_blocks("- a\n- b"), vec![list(false, &["a", "b"])]);
}

#[test]
fn ordered_list() {
    assert_eq!(parse_blocks("1. a\n2. b"), vec![list(true, &["a", "b"])]);
}

#[test]
fn quote_then_paragraph() {
    assert_eq!(
        parse_blocks(">Quote\n\nNormal text"),
        vec![
            Block::Blockquote {
                content: "Quote".to_string()
            },
            paragraph("Normal text"),
        ]
    );
}

#[test]
fn empty_document() {
    assert!(parse_blocks("").is_empty());
    assert!(render("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_blocks("\n\n \t\n").is_empty());
}

#[test]
fn bom_only_message_is_empty() {
    assert!(parse_blocks("\u{feff}").is_empty());
    assert!(parse_blocks("\u{feff}\r\n  ").is_empty());
}

#[test]
fn leading_bom_does_not_hide_heading() {
    assert_eq!(
        parse_blocks("\u{feff}# Hi"),
        vec![Block::Heading {
            depth: 1,
            content: "Hi".to_string()
        }]
    );
}

#[test]
fn paragraph_lines_are_trimmed_and_joined() {
    assert_eq!(
        parse_blocks("  Be still,  \n and know\n"),
        vec![paragraph("Be still, and know")]
    );
}

#[test]
fn crlf_input_matches_lf_input() {
    assert_eq!(
        parse_blocks("# Psalm 46\r\n\r\n- verse one\r\n- verse two\r\n"),
        parse_blocks("# Psalm 46\n\n- verse one\n- verse two\n")
    );
}

#[test]
fn paragraph_interrupted_by_list_keeps_order() {
    assert_eq!(
        parse_blocks("Steps for today:\n1. Read\n2. Reflect\nThen rest."),
        vec![
            paragraph("Steps for today:"),
            list(true, &["Read", "Reflect"]),
            paragraph("Then rest."),
        ]
    );
}

#[test]
fn mixed_list_flavours_split() {
    assert_eq!(
        parse_blocks("- a\n1. b\n* c"),
        vec![
            list(false, &["a"]),
            list(true, &["b"]),
            list(false, &["c"]),
        ]
    );
}

#[test]
fn every_quote_line_is_its_own_block() {
    assert_eq!(
        parse_blocks("> one\n> two"),
        vec![
            Block::Blockquote {
                content: "one".to_string()
            },
            Block::Blockquote {
                content: "two".to_string()
            },
        ]
    );
}

#[test]
fn heading_interrupts_paragraph() {
    assert_eq!(
        parse_blocks("intro\n## Prayer\nclosing"),
        vec![
            paragraph("intro"),
            Block::Heading {
                depth: 2,
                content: "Prayer".to_string()
            },
            paragraph("closing"),
        ]
    );
}

#[test]
fn document_renders_block_content() {
    assert_eq!(
        render("**bold *nested* text**").blocks,
        vec![Block::Paragraph {
            content: vec![Span::strong(vec![
                Span::text("bold "),
                Span::emphasis(vec![Span::text("nested")]),
                Span::text(" text"),
            ])]
        }]
    );
}

#[test]
fn document_renders_each_list_item() {
    assert_eq!(
        render("- `code`\n- *soft*").blocks,
        vec![Block::List {
            ordered: false,
            items: vec![
                vec![Span::code("code")],
                vec![Span::emphasis(vec![Span::text("soft")])],
            ]
        }]
    );
}

#[test]
fn unterminated_emphasis_in_document() {
    assert_eq!(
        render("*oops").blocks,
        vec![Block::Paragraph {
            content: vec![Span::text("*oops")]
        }]
    );
}

#[test]
fn code_is_not_retokenized_in_document() {
    assert_eq!(
        render("`*not bold*`").blocks,
        vec![Block::Paragraph {
            content: vec![Span::code("*not bold*")]
        }]
    );
}

#[test]
fn document_serializes_with_type_tags() {
    let value = serde_json::to_value(render("# Hi [there](https://example.com)")).unwrap();
    let heading = &value["blocks"][0];
    assert_eq!(heading["type"], "heading");
    assert_eq!(heading["type"], render("# Hi").blocks[0].kind_name());
    assert_eq!(heading["depth"], 1);
    assert_eq!(heading["content"][0]["type"], "text");
    assert_eq!(heading["content"][1]["type"], "link");
    assert_eq!(heading["content"][1]["href"], "https://example.com");
}

proptest! {
    #[test]
    fn never_fails_and_is_empty_only_for_blank_input(s in "\\PC*") {
        let blocks = parse_blocks(&s);
        prop_assert_eq!(blocks.is_empty(), s.trim().is_empty());
    }

    #[test]
    fn markup_heavy_input_never_fails(s in "[-*_`#>\\[\\]()+1. a\n]{0,200}") {
        let doc = render(&s);
        prop_assert_eq!(doc.is_empty(), s.trim().is_empty());
    }

    #[test]
    fn plain_words_survive_as_single_paragraph(words in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let s = words.join(" ");
        prop_assert_eq!(
            render(&s).blocks,
            vec![Block::Paragraph { content: vec![Span::text(s.clone())] }]
        );
    }

    #[test]
    fn rendering_is_deterministic(s in "\\PC{0,120}") {
        prop_assert_eq!(render(&s), render(&s));
    }
}
