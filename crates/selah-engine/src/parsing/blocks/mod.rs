//! # Block Parsing
//!
//! Two-phase, single-pass block parsing over the lines of one message.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and classified
//!    into a `LineClass` (blank, heading, quote, list item, plain text) using
//!    only local facts
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps one pending
//!    paragraph and one pending list, flushing them into `Block`s as the
//!    classified lines arrive
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: block-specific types with owned delimiters (Heading, BlockQuote, ListItem, Paragraph)
//! - **`classify`**: `MarkupLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks come out in the order their lines went in
//! - Headings and quotes are never buffered; each quote line is its own block
//! - Every non-blank line contributes to exactly one block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkupLineClassifier};
pub use types::Block;
