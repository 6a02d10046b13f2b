//! Text normalization used for FAQ comparisons.

use regex::Regex;
use std::sync::LazyLock;

static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Lowercases `text` and replaces every character that is neither a word
/// character nor whitespace with a single space, then trims the ends.
///
/// Interior whitespace is left alone, so `"what's"` becomes `"what s"`.
/// Total and idempotent.
pub fn normalize(text: &str) -> String {
    PUNCT_RE
        .replace_all(&text.to_lowercase(), " ")
        .trim()
        .to_string()
}
