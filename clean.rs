//! The two text normalizations.
//!
//! Preview cleaning keeps the text human-readable: tags go away and every
//! whitespace run becomes a single line break. Counting cleaning produces
//! the dense stream the segmenter expects: tags, punctuation and whitespace
//! are all deleted. The two are deliberately not interchangeable; word
//! counts must only ever be taken over [`clean_for_count`] output.

use once_cell::sync::Lazy;
use regex::Regex;

// Compile regexes once
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static PUNCT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WS_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static WS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").unwrap());

/// Strip tag-like substrings and collapse whitespace runs to single line
/// breaks. Total over arbitrary input.
pub fn clean_for_preview(text: &str) -> String {
    let text = TAG_REGEX.replace_all(text, "");
    WS_RUN_REGEX.replace_all(&text, "\n").into_owned()
}

/// Strip tag-like substrings, then punctuation, then delete (not collapse)
/// all whitespace. Total over arbitrary input.
///
/// `[^\w\s]` is Unicode-aware, so CJK characters count as word characters
/// and survive the punctuation pass.
pub fn clean_for_count(text: &str) -> String {
    let text = TAG_REGEX.replace_all(text, "");
    let text = PUNCT_REGEX.replace_all(&text, "");
    WS_REGEX.replace_all(&text, "").into_owned()
}
