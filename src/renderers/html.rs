//! HTML fragment assembly
//!
//! Builds the markup the catalog page inserts into its song pane: a metadata
//! block (title, subtitles, key/tempo badges) followed by a content block
//! with one element per body line. Chord lines render as two aligned rows,
//! a chords row over a lyrics row, using `&nbsp;` filler cells so horizontal
//! position corresponds to character offset. A monospace font is assumed;
//! proportional fonts are not compensated for.

use crate::models::{ChordToken, Document, LineFragment, Metadata};
use crate::parse::parse_song;
use crate::renderers::escape::escape_html;

/// Parse raw ChordPro text and render it in one step.
///
/// This is the only operation the catalog page needs; it is stateless and
/// two calls with the same input produce byte-identical fragments.
pub fn render_song(content: &str) -> String {
    render_document(&parse_song(content))
}

/// Render a parsed `Document` into an HTML fragment.
pub fn render_document(document: &Document) -> String {
    let mut html = String::from("<div class=\"chordpro-song\">");

    write_metadata(&mut html, &document.metadata);

    html.push_str("<div class=\"song-content\">");
    let body: Vec<String> = document.lines.iter().map(render_line).collect();
    html.push_str(&body.join("\n"));
    html.push_str("</div>");

    html.push_str("</div>");
    html
}

/// Render a single line fragment
pub fn render_line(fragment: &LineFragment) -> String {
    match fragment {
        LineFragment::Spacer => "<div class=\"song-spacer\"></div>".to_string(),
        LineFragment::PlainLyric { text } => {
            format!("<div class=\"lyrics-line\">{}</div>", escape_html(text))
        }
        LineFragment::ChordLyric { chords, lyrics } => {
            let mut html = String::from("<div class=\"chord-line-container\">");
            write_chords_row(&mut html, chords);
            html.push_str(&format!(
                "<div class=\"lyrics-row\">{}</div>",
                escape_html(lyrics)
            ));
            html.push_str("</div>");
            html
        }
    }
}

/// Write the chords row: filler spans covering the gap since the previous
/// chord, then the chord itself. Chords arrive in original order with
/// non-decreasing columns; ties (adjacent markers) emit no filler between.
fn write_chords_row(html: &mut String, chords: &[ChordToken]) {
    html.push_str("<div class=\"chords-row\">");

    // One cell per emitted chord, so the cursor advances by 1 per chord
    let mut cursor = 0;
    for chord in chords {
        if chord.column > cursor {
            html.push_str(&format!(
                "<span class=\"chord-spacer\">{}</span>",
                "&nbsp;".repeat(chord.column - cursor)
            ));
        }
        html.push_str(&format!(
            "<span class=\"chord\">{}</span>",
            escape_html(&chord.symbol)
        ));
        cursor = chord.column + 1;
    }

    html.push_str("</div>");
}

/// Write the metadata block: title, subtitles in accumulation order, then a
/// badge row shown only if key or tempo is present.
fn write_metadata(html: &mut String, metadata: &Metadata) {
    if let Some(title) = &metadata.title {
        html.push_str(&format!(
            "<h2 class=\"song-title\">{}</h2>",
            escape_html(title)
        ));
    }

    for subtitle in &metadata.subtitles {
        html.push_str(&format!(
            "<p class=\"song-subtitle text-muted fst-italic\">{}</p>",
            escape_html(subtitle)
        ));
    }

    if metadata.key.is_some() || metadata.tempo.is_some() {
        html.push_str("<div class=\"song-metadata\">");
        if let Some(key) = &metadata.key {
            html.push_str(&format!(
                "<span class=\"badge bg-info me-2\">Key: {}</span>",
                escape_html(key)
            ));
        }
        if let Some(tempo) = &metadata.tempo {
            html.push_str(&format!(
                "<span class=\"badge bg-secondary\">Tempo: {}</span>",
                escape_html(tempo)
            ));
        }
        html.push_str("</div>");
    }
}
