//! Directive parsing and metadata accumulation
//!
//! ChordPro directives are lines of the form `{name: value}`. Recognized
//! names feed the song `Metadata`; unrecognized names are accepted
//! syntactically but have no effect, and a directive without a colon is
//! dropped. Both behaviors are deliberate permissiveness, not errors.

use crate::models::Metadata;

// ============================================================================
// DIRECTIVE REGISTRY - Single Source of Truth
// ============================================================================

/// Metadata field a recognized directive feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Song title (single-valued, later overwrites earlier)
    Title,
    /// Subtitle (multi-valued, accumulates in directive order)
    Subtitle,
    /// Musical key (single-valued)
    Key,
    /// Tempo/rhythm (single-valued)
    Tempo,
    /// Free-form `key value` pair
    Meta,
}

/// Definition of a recognized directive
#[derive(Debug, Clone)]
pub struct DirectiveDefinition {
    /// Primary directive name
    pub name: &'static str,
    /// Aliases (short forms)
    pub aliases: &'static [&'static str],
    /// Metadata field this directive feeds
    pub kind: DirectiveKind,
    /// Brief description
    pub description: &'static str,
}

/// Registry of all recognized directives
pub struct DirectiveRegistry;

impl DirectiveRegistry {
    /// Get all recognized directives
    pub fn all_directives() -> &'static [DirectiveDefinition] {
        &[
            DirectiveDefinition {
                name: "title",
                aliases: &["t"],
                kind: DirectiveKind::Title,
                description: "Song title",
            },
            DirectiveDefinition {
                name: "subtitle",
                aliases: &["st"],
                kind: DirectiveKind::Subtitle,
                description: "Subtitle (author, album); repeatable",
            },
            DirectiveDefinition {
                name: "key",
                aliases: &[],
                kind: DirectiveKind::Key,
                description: "Musical key",
            },
            DirectiveDefinition {
                name: "tempo",
                aliases: &[],
                kind: DirectiveKind::Tempo,
                description: "Tempo or rhythm indication",
            },
            DirectiveDefinition {
                name: "meta",
                aliases: &[],
                kind: DirectiveKind::Meta,
                description: "Free-form key/value metadata",
            },
        ]
    }

    /// Check if a directive name is recognized (including aliases).
    /// Names are case-sensitive.
    pub fn is_recognized(name: &str) -> bool {
        Self::kind_for(name).is_some()
    }

    /// Get the metadata kind for a directive name (including aliases)
    pub fn kind_for(name: &str) -> Option<DirectiveKind> {
        Self::all_directives()
            .iter()
            .find(|def| def.name == name || def.aliases.contains(&name))
            .map(|def| def.kind)
    }
}

// ============================================================================

/// Transient parsed form of a `{name: value}` line.
/// Consumed immediately into `Metadata`, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Directive name, trimmed (may be unrecognized)
    pub name: String,
    /// Raw value text after the first colon, trimmed
    pub value: String,
}

impl Directive {
    /// Parse a trimmed directive line (`{...}`, braces still present).
    ///
    /// Returns `None` when the braced content has no colon; such lines are
    /// silently dropped.
    pub fn parse(line: &str) -> Option<Directive> {
        let content = line[1..line.len() - 1].trim();

        let colon_index = content.find(':')?;
        let name = content[..colon_index].trim().to_string();
        let value = content[colon_index + 1..].trim().to_string();

        Some(Directive { name, value })
    }
}

impl Metadata {
    /// Fold one directive into the metadata accumulator.
    ///
    /// Single-valued fields overwrite; subtitles append; unrecognized
    /// directive names have no effect.
    pub fn apply_directive(&mut self, directive: &Directive) {
        match DirectiveRegistry::kind_for(&directive.name) {
            Some(DirectiveKind::Title) => self.title = Some(directive.value.clone()),
            Some(DirectiveKind::Subtitle) => self.subtitles.push(directive.value.clone()),
            Some(DirectiveKind::Key) => self.key = Some(directive.value.clone()),
            Some(DirectiveKind::Tempo) => self.tempo = Some(directive.value.clone()),
            Some(DirectiveKind::Meta) => {
                // Value is `key` followed by the remainder after the first
                // whitespace run; a bare key stores an empty value.
                let mut parts = directive.value.splitn(2, char::is_whitespace);
                if let Some(meta_key) = parts.next() {
                    if !meta_key.is_empty() {
                        let meta_value = parts.next().map(str::trim_start).unwrap_or("");
                        self.meta.insert(meta_key.to_string(), meta_value.to_string());
                    }
                }
            }
            None => {} // Unrecognized directive, ignore
        }
    }
}
