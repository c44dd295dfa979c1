//! Core data structures for parsed ChordPro songs
//!
//! A parsed song is a `Document`: accumulated `Metadata` plus an ordered
//! sequence of `LineFragment`s, one per input line. Documents are produced
//! fresh on every parse call and are immutable after construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Song metadata accumulated from `{name: value}` directives
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    /// Song title from `{title: ...}` / `{t: ...}` (later directives overwrite)
    pub title: Option<String>,

    /// Subtitles from `{subtitle: ...}` / `{st: ...}`, in directive order
    pub subtitles: Vec<String>,

    /// Musical key from `{key: ...}` (later directives overwrite)
    pub key: Option<String>,

    /// Tempo/rhythm indication from `{tempo: ...}` (later directives overwrite)
    pub tempo: Option<String>,

    /// Free-form key/value pairs from `{meta: key value}` directives
    pub meta: HashMap<String, String>,
}

/// A chord symbol positioned above the lyric text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordToken {
    /// Chord symbol text with brackets removed (e.g., "Am", "G7")
    pub symbol: String,

    /// Zero-based character offset into the bracket-stripped lyric text.
    /// Two chords with nothing between them share the same column.
    pub column: usize,
}

impl ChordToken {
    /// Create a new ChordToken
    pub fn new(symbol: impl Into<String>, column: usize) -> Self {
        Self {
            symbol: symbol.into(),
            column,
        }
    }
}

/// One classified input line of the song body
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum LineFragment {
    /// Blank line, rendered as a section spacer
    Spacer,

    /// Lyric line with no chord markers
    PlainLyric {
        /// Original line text (trimmed, unescaped)
        text: String,
    },

    /// Lyric line annotated with bracketed chords
    ChordLyric {
        /// Chord tokens in original left-to-right order
        chords: Vec<ChordToken>,

        /// The line with all `[...]` markers deleted in place
        lyrics: String,
    },
}

/// A fully parsed song: metadata plus body lines in input order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// Accumulated directive metadata
    pub metadata: Metadata,

    /// Body lines, one fragment per input line, in input order
    pub lines: Vec<LineFragment>,
}

impl Document {
    /// Create a new empty Document
    pub fn new() -> Self {
        Self::default()
    }
}
