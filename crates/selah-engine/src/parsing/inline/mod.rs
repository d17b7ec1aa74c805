//! # Inline Parsing
//!
//! Cursor-based inline rendering of one block's text into a `Span` tree.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the joined
//! content of each block (paragraph, heading, quote, and every list item on
//! its own).
//!
//! A single forward scan recognizes strong, emphasis, code spans and links.
//! Strong, emphasis and link text is re-scanned recursively on a strictly
//! shorter slice, so recursion always terminates; a depth guard from
//! `InlineOptions` bounds it further.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Text, Strong, Emphasis, Code, Link)
//! - **`kinds`**: inline-specific types with owned delimiters (CodeSpan, Emphasis, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`options`**: `InlineOptions` (nesting limit)
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans are opaque once opened: `` `*not bold*` `` parses as a single
//! Code span. Position order still wins, so an emphasis that opened earlier
//! closes on the first matching marker even inside backticks.

pub mod cursor;
pub mod kinds;
pub mod options;
pub mod parser;
pub mod types;

pub use options::InlineOptions;
pub use parser::{parse_inline, parse_inline_with};
pub use types::{Span, plain_text};
