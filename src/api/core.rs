//! Exported API functions
//!
//! The catalog page calls `renderSong` on every editor keystroke (the page
//! owns debouncing); all three functions are stateless, so interleaved calls
//! cannot leak state between songs.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, log_debug, serialize};
use crate::models::Document;
use crate::parse::parse_song;
use crate::renderers::html::{render_document, render_song};

/// Parse raw ChordPro text into a Document object.
///
/// Returns `{ metadata: {...}, lines: [...] }` with one line fragment per
/// input line. Never fails on malformed input; malformed directives are
/// dropped and unmatched brackets stay in the lyric text.
#[wasm_bindgen(js_name = parseSong)]
pub fn parse_song_js(content: &str) -> Result<JsValue, JsValue> {
    log_debug(&format!("parseSong called: {} bytes", content.len()));

    let document = parse_song(content);
    serialize(&document, "Failed to serialize Document")
}

/// Parse and render raw ChordPro text into an HTML fragment in one step.
///
/// The fragment is a metadata block plus a content block, meant for
/// insertion into the page's song pane; it is not a self-contained document.
#[wasm_bindgen(js_name = renderSong)]
pub fn render_song_js(content: &str) -> String {
    render_song(content)
}

/// Render an already-parsed Document (as returned by `parseSong`) into an
/// HTML fragment.
#[wasm_bindgen(js_name = renderDocument)]
pub fn render_document_js(document_js: JsValue) -> Result<String, JsValue> {
    let document: Document = deserialize(document_js, "Failed to deserialize Document")?;
    Ok(render_document(&document))
}
