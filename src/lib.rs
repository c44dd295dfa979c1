//! ChordPro Song Sheet WASM Module
//!
//! This is the WASM module for the song catalog's ChordPro rendering core.
//! It converts ChordPro notation (metadata directives, inline bracketed
//! chords, blank-line section breaks) into a renderable document model and
//! an HTML fragment with chords aligned above their lyric syllables.

pub mod models;
pub mod parse;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use models::song::{ChordToken, Document, LineFragment, Metadata};
pub use parse::grammar::parse_song;
pub use renderers::html::{render_document, render_song};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("ChordPro WASM module initialized");
}
