use serde_json::Value;

use crate::chart::ChartKind;

pub const MIN_WORDS: usize = 1;
pub const MAX_WORDS: usize = 100;
pub const DEFAULT_WORDS: usize = 20;

/// Where the source text comes from. One of the two acquisition paths.
#[derive(Debug, Clone)]
pub enum TextSource {
    /// Fetched with a synchronous GET; body text extracted from the markup.
    Url(String),
    /// Raw uploaded bytes, decoded as UTF-8 directly.
    Upload(Vec<u8>),
}

/// Everything one pipeline run needs, collected up front. There is no
/// process-wide state; each run recomputes from scratch.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: TextSource,
    /// Top-N cap, clamped to 1..=100.
    pub num_words: usize,
    pub chart: ChartKind,
}

impl RunConfig {
    pub fn new(source: TextSource, num_words: usize, chart: ChartKind) -> Self {
        Self {
            source,
            num_words: num_words.clamp(MIN_WORDS, MAX_WORDS),
            chart,
        }
    }
}

/// Ranked (token, frequency) pairs, descending by frequency, at most the
/// configured cap long. Tokens are non-empty and unique.
pub type WordCount = Vec<(String, usize)>;

/// One run's worth of output. `chart` is `None` when there was nothing to
/// rank; callers treat that as a valid no-op, not a failure.
#[derive(Debug)]
pub struct RunOutput {
    /// Decoded source text as acquired, before either normalization. The
    /// word-cloud renderer works from this.
    pub source_text: String,
    /// Preview-normalized text (tags stripped, whitespace collapsed to line
    /// breaks). Never fed to the counter.
    pub preview: String,
    pub word_counts: WordCount,
    pub chart: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_cap_is_clamped_to_bounds() {
        let over = RunConfig::new(TextSource::Upload(Vec::new()), 500, ChartKind::Pie);
        assert_eq!(over.num_words, MAX_WORDS);
        let under = RunConfig::new(TextSource::Upload(Vec::new()), 0, ChartKind::Pie);
        assert_eq!(under.num_words, MIN_WORDS);
        let in_range = RunConfig::new(TextSource::Upload(Vec::new()), DEFAULT_WORDS, ChartKind::Pie);
        assert_eq!(in_range.num_words, DEFAULT_WORDS);
    }
}
