// Test HTML fragment rendering: chord/lyric row alignment, metadata block,
// escaping of every text-emitting path, and call-to-call stability.

use chordpro_wasm::parse::parse_song;
use chordpro_wasm::renderers::html::{render_document, render_song};

#[test]
fn test_chord_row_sits_above_lyrics_row() {
    let html = render_song("[Am]Hola [G]mundo");

    let chords_row = html.find("chords-row").expect("should emit chords row");
    let lyrics_row = html.find("lyrics-row").expect("should emit lyrics row");
    assert!(chords_row < lyrics_row, "chords row should precede lyrics row");

    // Am at column 0, G at column 5: one chord cell then four filler cells
    assert!(html.contains(
        "<span class=\"chord\">Am</span>\
         <span class=\"chord-spacer\">&nbsp;&nbsp;&nbsp;&nbsp;</span>\
         <span class=\"chord\">G</span>"
    ));
    assert!(html.contains("<div class=\"lyrics-row\">Hola mundo</div>"));
}

#[test]
fn test_script_injection_is_escaped() {
    let html = render_song("<script>alert('x')</script>");
    assert!(
        !html.contains("<script>"),
        "literal <script> must not appear in output"
    );
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&#39;x&#39;"));
}

#[test]
fn test_metadata_is_escaped_too() {
    let html = render_song("{title: Tom & <Jerry>}\n{key: \"A\"}");
    assert!(html.contains("<h2 class=\"song-title\">Tom &amp; &lt;Jerry&gt;</h2>"));
    assert!(html.contains("Key: &quot;A&quot;"));
}

#[test]
fn test_chord_symbol_injection_is_escaped() {
    let html = render_song("[<b>]letra");
    assert!(!html.contains("<b>"));
    assert!(html.contains("<span class=\"chord\">&lt;b&gt;</span>"));
}

#[test]
fn test_unmatched_bracket_renders_as_plain_text() {
    let html = render_song("Hola [mundo");
    assert!(html.contains("<div class=\"lyrics-line\">Hola [mundo</div>"));
    assert!(!html.contains("chords-row"));
}

#[test]
fn test_blank_lines_render_as_spacers() {
    let html = render_song("a\n\n\nb");
    assert_eq!(html.matches("<div class=\"song-spacer\"></div>").count(), 2);
}

#[test]
fn test_render_is_byte_stable_across_calls() {
    let content = "{title: T}\n{subtitle: S}\n[Am]Hola [G]mundo\n\nletra";
    assert_eq!(render_song(content), render_song(content));
}

#[test]
fn test_render_document_matches_render_song() {
    let content = "{title: T}\n[C]la la";
    let doc = parse_song(content);
    assert_eq!(render_document(&doc), render_song(content));
}

#[test]
fn test_metadata_block_precedes_content_block() {
    let html = render_song("{title: T}\n{tempo: Vals}\nletra");
    let title = html.find("song-title").unwrap();
    let badges = html.find("song-metadata").unwrap();
    let content = html.find("song-content").unwrap();
    assert!(title < badges && badges < content);
    assert!(html.contains("<span class=\"badge bg-secondary\">Tempo: Vals</span>"));
}

#[test]
fn test_empty_input_renders_empty_fragment() {
    let html = render_song("");
    assert_eq!(
        html,
        "<div class=\"chordpro-song\"><div class=\"song-content\"></div></div>"
    );
}

#[test]
fn test_non_ascii_alignment_uses_char_columns() {
    // "Canción " is 8 chars; the G chord must get 7 filler cells after
    // the first chord cell, regardless of byte length
    let html = render_song("[Am]Canción [G]más");
    assert!(html.contains(
        "<span class=\"chord\">Am</span>\
         <span class=\"chord-spacer\">&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;</span>\
         <span class=\"chord\">G</span>"
    ));
    assert!(html.contains("<div class=\"lyrics-row\">Canción más</div>"));
}
