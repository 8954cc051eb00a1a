//! Word-cloud rendering.
//!
//! Sizing and placement are delegated to `wcloud` (and its built-in font);
//! this module only decides the canvas and where the image lands.

use std::path::{Path, PathBuf};

use tracing::info;
use wcloud::{WordCloud, WordCloudSize};

use crate::error::WordvizError;

const CLOUD_WIDTH: u32 = 1024;
const CLOUD_HEIGHT: u32 = 512;

/// Lay out `text` as a word cloud and write it as a PNG at `path`.
///
/// Empty or whitespace-only text produces no image: the result is
/// `Ok(None)`, which callers treat as a valid silent no-op.
pub fn render_to_png(text: &str, path: &Path) -> Result<Option<PathBuf>, WordvizError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let size = WordCloudSize::FromDimensions {
        width: CLOUD_WIDTH,
        height: CLOUD_HEIGHT,
    };
    let image = WordCloud::default().generate_from_text(text, size, 1.0);
    image
        .save(path)
        .map_err(|e| WordvizError::CloudWrite(e.to_string()))?;
    info!(path = %path.display(), "wrote word cloud");
    Ok(Some(path.to_path_buf()))
}
