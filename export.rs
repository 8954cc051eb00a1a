//! Download-link affordance: the preview text as a `data:` URI anchor.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Base64 payload for the download link. The shell embeds this in a
/// `data:text/plain;base64,` URI, so nothing is ever persisted server-side.
pub fn download_payload(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Full anchor markup for the download link, with a fixed filename.
pub fn text_download_link(text: &str, filename: &str, label: &str) -> String {
    format!(
        "<a href=\"data:text/plain;base64,{}\" download=\"{}\">{}</a>",
        download_payload(text),
        filename,
        label
    )
}
