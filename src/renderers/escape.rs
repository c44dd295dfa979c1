//! HTML escaping
//!
//! Every free-text value emitted into the fragment (chord symbols, lyric
//! text, titles, subtitles, badges) passes through `escape_html` exactly
//! once before concatenation. This is the single point of injection defense;
//! no other sanitization is performed.

/// Escape the five reserved HTML characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
