//! Text Normalizer
//!
//! Flattens safety-data-sheet text to a single line so that statement codes
//! split across line breaks or loosely spaced around `+` can be matched.

use regex::Regex;
use std::sync::LazyLock;

static PLUS_JOINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\+\s*").expect("plus joiner pattern is valid"));

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("line break pattern is valid"));

/// Normalize raw sheet text.
///
/// Whitespace around every `+` becomes exactly one space on each side, then
/// each run of line breaks becomes a single space. The `+` pass runs first
/// because `\s` also consumes the line breaks next to a joiner, which turns
/// `"P302\n+\nP352"` into `"P302 + P352"`.
pub fn normalize(text: &str) -> String {
    let joined = PLUS_JOINER.replace_all(text, " + ");
    LINE_BREAKS.replace_all(&joined, " ").into_owned()
}
