//! # Presentation
//!
//! Turns a parsed [`Document`](crate::parsing::Document) into output a chat
//! front end can show directly. Only HTML lives here; terminal display is in
//! the CLI crate.

pub mod html;

pub use html::{HtmlOptions, render_html};
