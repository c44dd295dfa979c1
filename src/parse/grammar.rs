//! Line classifier and top-level parse entry point
//!
//! Classification is purely local per line: after trimming, a line is a
//! directive (`{...}`), a spacer (empty), a chord line (contains `[`), or a
//! plain lyric line. Only metadata accumulation is order-dependent, and only
//! for subtitles.

use crate::models::{Document, LineFragment};
use crate::parse::chord_line::parse_chord_line;
use crate::parse::directive::Directive;

/// Parse raw ChordPro text into a `Document`.
///
/// Stateless and re-entrant: every call builds a fresh `Document` with its
/// own metadata accumulator, so interleaved calls (live preview on each
/// keystroke) cannot observe each other. Line breaks may be `\n` or `\r\n`.
pub fn parse_song(content: &str) -> Document {
    let mut document = Document::new();

    for raw_line in content.lines() {
        let line = raw_line.trim();

        // Metadata directives
        if line.starts_with('{') && line.ends_with('}') {
            if let Some(directive) = Directive::parse(line) {
                document.metadata.apply_directive(&directive);
            }
            continue;
        }

        // Blank line
        if line.is_empty() {
            document.lines.push(LineFragment::Spacer);
            continue;
        }

        // Lines with chord markers
        if line.contains('[') {
            document.lines.push(parse_chord_line(line));
        } else {
            document.lines.push(LineFragment::PlainLyric {
                text: line.to_string(),
            });
        }
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChordToken;

    #[test]
    fn test_parse_song_classifies_all_line_kinds() {
        let content = "{title: Test}\n[Am]Hola [G]mundo\n\nsolo letra";
        let doc = parse_song(content);

        assert_eq!(doc.metadata.title.as_deref(), Some("Test"));
        assert_eq!(doc.lines.len(), 3);
        assert_eq!(
            doc.lines[0],
            LineFragment::ChordLyric {
                chords: vec![ChordToken::new("Am", 0), ChordToken::new("G", 5)],
                lyrics: "Hola mundo".to_string(),
            }
        );
        assert_eq!(doc.lines[1], LineFragment::Spacer);
        assert_eq!(
            doc.lines[2],
            LineFragment::PlainLyric {
                text: "solo letra".to_string()
            }
        );
    }

    #[test]
    fn test_subtitle_accumulation_order() {
        let doc = parse_song("{subtitle: A}\n{subtitle: B}");
        assert_eq!(doc.metadata.subtitles, vec!["A", "B"]);
    }

    #[test]
    fn test_single_valued_overwrite() {
        let doc = parse_song("{key: C}\n{key: D}");
        assert_eq!(doc.metadata.key.as_deref(), Some("D"));
    }

    #[test]
    fn test_consecutive_blank_lines_map_one_to_one() {
        let doc = parse_song("uno\n\n\n\ndos");
        assert_eq!(doc.lines.len(), 5);
        assert_eq!(
            doc.lines[1..4],
            [LineFragment::Spacer, LineFragment::Spacer, LineFragment::Spacer]
        );
    }

    #[test]
    fn test_whitespace_only_line_is_spacer() {
        let doc = parse_song("uno\n   \t \ndos");
        assert_eq!(doc.lines[1], LineFragment::Spacer);
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        let doc = parse_song("");
        assert_eq!(doc, Document::new());
    }

    #[test]
    fn test_crlf_line_breaks() {
        let doc = parse_song("{title: T}\r\nletra\r\n");
        assert_eq!(doc.metadata.title.as_deref(), Some("T"));
        assert_eq!(
            doc.lines,
            vec![LineFragment::PlainLyric {
                text: "letra".to_string()
            }]
        );
    }

    #[test]
    fn test_malformed_directive_has_no_effect() {
        let doc = parse_song("{start_of_chorus}\n{capo: 3}\nletra");
        assert_eq!(doc.metadata, Default::default());
        assert_eq!(doc.lines.len(), 1);
    }

    #[test]
    fn test_unclosed_brace_line_is_lyric_text() {
        let doc = parse_song("{title: no closing brace");
        assert_eq!(
            doc.lines,
            vec![LineFragment::PlainLyric {
                text: "{title: no closing brace".to_string()
            }]
        );
        assert_eq!(doc.metadata.title, None);
    }
}
