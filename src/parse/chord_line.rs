//! Chord line parsing and alignment
//!
//! A chord line mixes lyric text with inline `[Symbol]` markers, e.g.
//! `[Am]Hola [G]mundo`. Parsing strips the bracket spans out of the line and
//! re-derives each chord's column against the stripped text, so the chord
//! renders above the syllable it annotates.
//!
//! Positions are character offsets, not byte offsets; lyric and chord text
//! may be non-ASCII.

use crate::models::{ChordToken, LineFragment};

/// Parse one raw line containing `[` into a `ChordLyric` fragment.
///
/// Scans left to right collecting every `[Symbol]` occurrence (non-empty
/// symbol, anything up to the first `]`). Each chord's column is its raw
/// char offset minus the total width of the bracket spans removed before it,
/// which is the position it occupies in the stripped lyric text. Adjacent
/// markers like `[Am][G]` resolve to the same column; that is not a
/// collision, both render there in original order.
///
/// A `[` with no matching `]` before line end, and the empty pair `[]`, are
/// not chord markers; they remain in the lyric text uninterpreted. If the
/// line yields no chords at all it falls back to a `PlainLyric` fragment.
pub fn parse_chord_line(line: &str) -> LineFragment {
    let chars: Vec<char> = line.chars().collect();
    let mut chords: Vec<ChordToken> = Vec::new();
    let mut lyrics = String::new();
    // Total chars deleted by bracket spans to the left of the cursor
    let mut removed = 0;
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos] == '[' {
            if let Some(close) = find_char(&chars, pos + 1, ']') {
                // Empty `[]` is not a chord marker
                if close > pos + 1 {
                    let symbol: String = chars[pos + 1..close].iter().collect();
                    chords.push(ChordToken::new(symbol, pos - removed));
                    removed += close - pos + 1;
                    pos = close + 1;
                    continue;
                }
            }
        }

        lyrics.push(chars[pos]);
        pos += 1;
    }

    if chords.is_empty() {
        // Caller saw a `[` but nothing matched; keep the line as plain text
        LineFragment::PlainLyric {
            text: line.to_string(),
        }
    } else {
        LineFragment::ChordLyric { chords, lyrics }
    }
}

fn find_char(chars: &[char], start: usize, target: char) -> Option<usize> {
    (start..chars.len()).find(|&i| chars[i] == target)
}
