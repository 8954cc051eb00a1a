use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// Only the fetch path and the image write can fail. Decoding never appears
/// here (it is lossy by contract), and empty inputs are absence values
/// handled by the renderers, not errors.
#[derive(Debug, Error)]
pub enum WordvizError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport failure or non-2xx response. Fatal for the current run, no
    /// retries.
    #[error("request failed: {0}")]
    Fetch(Box<ureq::Error>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not write word cloud image: {0}")]
    CloudWrite(String),
}

impl From<ureq::Error> for WordvizError {
    fn from(err: ureq::Error) -> Self {
        WordvizError::Fetch(Box::new(err))
    }
}
