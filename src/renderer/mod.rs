//! Output shapes for formatted addresses
//!
//! Plain text lines are produced by the formatter; this module packages them
//! as HTML markup.

pub mod config;
pub mod html;

pub use config::FormatConfig;
pub use html::{escape_html, unescape_html, HtmlFragment};
