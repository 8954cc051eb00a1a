//! Text acquisition: URL fetch and upload decode.

use std::io::Read;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::{info, warn};
use url::Url;

use crate::error::WordvizError;

/// Fetch a page and return the text content of its `<body>`.
///
/// Synchronous GET with the transport's default timeouts; no retries.
/// Network failure and non-2xx responses propagate as [`WordvizError::Fetch`].
/// Response bytes are decoded as UTF-8 lossily, so a page that lies about
/// its encoding yields garbled text rather than an error.
pub fn fetch_url(raw_url: &str) -> Result<String, WordvizError> {
    let url = Url::parse(raw_url)?;
    let response = ureq::get(url.as_str()).call()?;
    let mut bytes = Vec::new();
    response.into_reader().read_to_end(&mut bytes)?;
    let (decoded, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        warn!(url = %url, "response was not clean utf-8, kept lossy decode");
    }
    let text = extract_body_text(&decoded);
    info!(url = %url, bytes = bytes.len(), chars = text.chars().count(), "fetched page text");
    Ok(text)
}

/// Decode uploaded bytes as UTF-8, lossily. Total; never fails.
pub fn decode_upload(bytes: &[u8]) -> String {
    let (decoded, _, _) = encoding_rs::UTF_8.decode(bytes);
    decoded.into_owned()
}

/// Extract body text using html5ever+RcDom, skipping script/style content.
///
/// Markup structure is discarded but markup-adjacent text is kept. The
/// parser always synthesizes a `<body>`, so even a bare text fragment comes
/// back intact.
pub fn extract_body_text(input: &str) -> String {
    let dom: RcDom = parse_document(RcDom::default(), Default::default()).one(input);
    let mut text = String::new();
    match find_body(&dom.document) {
        Some(body) => collect_text(&body, &mut text),
        None => collect_text(&dom.document, &mut text),
    }
    text
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref().eq_ignore_ascii_case("body") {
            return Some(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        if let Some(body) = find_body(child) {
            return Some(body);
        }
    }
    None
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Element { name, .. } = &handle.data {
        let tag = name.local.as_ref();
        if tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style") {
            return;
        }
    }
    // capture text nodes
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    // recurse into children
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}
