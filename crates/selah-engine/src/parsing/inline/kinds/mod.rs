//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `*` and `_`, single for emphasis and doubled for strong,
//!   plus the closer searches for both
//! - **`Link`**: `[`, `]`, `(`, `)`, plus `LinkScan`, the shared lookahead
//!   that keeps bracket-heavy text linear
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Link, LinkScan, NextByte};
