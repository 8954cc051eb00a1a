//! wordviz: interactive word-frequency visualizer.
//!
//! A linear pipeline: acquire text (URL fetch or upload), normalize it twice
//! (once for human preview, once for counting), segment it by script family,
//! rank token frequencies, and map the ranking onto a chart and a word
//! cloud. Single-threaded and synchronous; one [`run`] per interaction, no
//! state shared between runs.
//!
//! ```no_run
//! use wordviz::{ChartKind, RunConfig, TextSource};
//!
//! let config = RunConfig::new(
//!     TextSource::Upload("猫 and 狗".as_bytes().to_vec()),
//!     20,
//!     ChartKind::Bar,
//! );
//! let output = wordviz::run(&config).unwrap();
//! assert!(output.chart.is_some());
//! ```

pub mod chart;
pub mod clean;
pub mod cloud;
pub mod count;
pub mod error;
pub mod export;
pub mod fetch;
pub mod types;

pub use crate::chart::ChartKind;
pub use crate::count::ScriptFamily;
pub use crate::error::WordvizError;
pub use crate::types::{
    DEFAULT_WORDS, MAX_WORDS, MIN_WORDS, RunConfig, RunOutput, TextSource, WordCount,
};

/// Run the whole pipeline for one interaction.
///
/// The word cloud is not rendered here; it works from `source_text` in the
/// returned output, and the shell decides where the image lands.
pub fn run(config: &RunConfig) -> Result<RunOutput, WordvizError> {
    let source_text = match &config.source {
        TextSource::Url(url) => fetch::fetch_url(url)?,
        TextSource::Upload(bytes) => fetch::decode_upload(bytes),
    };
    let preview = clean::clean_for_preview(&source_text);
    let word_counts = count::top_words(&source_text, config.num_words);
    let chart = chart::render(&word_counts, config.chart);
    tracing::info!(
        chars = source_text.chars().count(),
        ranked = word_counts.len(),
        chart = %config.chart,
        "pipeline run complete"
    );
    Ok(RunOutput {
        source_text,
        preview,
        word_counts,
        chart,
    })
}
