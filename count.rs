//! Script-aware tokenization and frequency ranking.

use std::collections::HashMap;

use jieba_rs::Jieba;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::clean::clean_for_count;
use crate::types::WordCount;

static CJK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\u4E00-\u9FFF]").unwrap());

// Loading the default dictionary is expensive; share one instance.
static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

/// Which tokenizer a text routes through. Resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFamily {
    /// At least one codepoint in U+4E00..=U+9FFF.
    Cjk,
    Latin,
}

/// A single CJK codepoint anywhere classifies the whole text as CJK, even
/// when the bulk is Latin. Mixed-script segmentation quality is a known
/// limitation of that rule; keep the rule as-is.
pub fn detect_script(text: &str) -> ScriptFamily {
    if CJK_REGEX.is_match(text) {
        ScriptFamily::Cjk
    } else {
        ScriptFamily::Latin
    }
}

fn segment(text: &str) -> Vec<&str> {
    let family = detect_script(text);
    let tokens = match family {
        ScriptFamily::Cjk => JIEBA.cut(text, true),
        ScriptFamily::Latin => text.unicode_words().collect(),
    };
    debug!(script = ?family, tokens = tokens.len(), "segmented text");
    tokens
}

/// Rank tokens by exact-match frequency and keep the top `num_words`.
///
/// Applies the counting normalization itself, so callers hand in source
/// text. No stemming, no case folding. Ties keep first-encountered order
/// (the sort is stable over first-seen insertion order). An empty token
/// stream yields an empty vec; this never fails.
pub fn top_words(text: &str, num_words: usize) -> WordCount {
    let cleaned = clean_for_count(text);
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for token in segment(&cleaned) {
        if token.is_empty() {
            continue;
        }
        counts
            .entry(token)
            .and_modify(|n| *n += 1)
            .or_insert_with(|| {
                first_seen.push(token);
                1
            });
    }
    let mut ranked: WordCount = first_seen
        .into_iter()
        .map(|token| (token.to_string(), counts[token]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(num_words);
    ranked
}
