//! Placeholder substitution for copied template files.
//! Performs literal, non-recursive token replacement: `{{KEY}}` markers whose
//! key is present in the token map are replaced in a single left-to-right
//! pass; everything else passes through verbatim. This is deliberately not a
//! templating language.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::PathBuf;

/// Opening marker of a placeholder token.
pub const OPEN_MARKER: &str = "{{";
/// Closing marker of a placeholder token.
pub const CLOSE_MARKER: &str = "}}";

/// Declares which file gets rewritten and with which token values.
///
/// Token order is preserved as declared; keys are unique within one rule.
/// Deserializes from JSON as `{"file": ".env", "tokens": {"API_KEY": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubstitutionRule {
    /// Path of the file to rewrite, relative to the target directory
    #[serde(rename = "file")]
    pub relative_path: PathBuf,

    /// Mapping from token key to literal replacement value
    pub tokens: IndexMap<String, String>,
}

/// Replaces `{{KEY}}` tokens in `text` with values from `tokens`.
///
/// Pure function: no I/O, same inputs always produce the same output.
///
/// Matching is a single left-to-right pass with non-overlapping matches:
/// * a key not present in the map is left untouched, markers included, so a
///   later stage or the end user can still find and fill it;
/// * an open marker that is never closed, or that is followed by another open
///   marker before any close marker, is emitted as literal text;
/// * replacement values are never rescanned (no recursive expansion).
pub fn apply(text: &str, tokens: &IndexMap<String, String>) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(OPEN_MARKER) {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + OPEN_MARKER.len()..];

        let close = after_open.find(CLOSE_MARKER);
        let next_open = after_open.find(OPEN_MARKER);

        match close {
            // Well-formed token: no inner open marker before the close.
            Some(close) if next_open.map_or(true, |n| close < n) => {
                let key = &after_open[..close];
                match tokens.get(key) {
                    Some(value) => output.push_str(value),
                    None => {
                        output.push_str(OPEN_MARKER);
                        output.push_str(key);
                        output.push_str(CLOSE_MARKER);
                    }
                }
                rest = &after_open[close + CLOSE_MARKER.len()..];
            }
            // Malformed: keep the open marker literal and resume scanning
            // right after it.
            _ => {
                output.push_str(OPEN_MARKER);
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}
