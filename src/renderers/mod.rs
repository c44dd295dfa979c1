//! Renderers for the ChordPro song sheet core
//!
//! This module turns a parsed `Document` into an HTML fragment meant for
//! insertion into the song catalog page (no surrounding document shell).

pub mod escape;
pub mod html;

// Re-export commonly used functions
pub use escape::escape_html;
pub use html::{render_document, render_line, render_song};
