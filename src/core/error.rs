use thiserror::Error;

/// Everything that can go wrong while driving the viewer.
///
/// None of these are fatal: callers log them and skip the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("no content for topic '{0}'")]
    MissingContent(String),
    #[error("playback failed: {0}")]
    Playback(String),
    #[error("js error: {0}")]
    Js(String),
}

pub type ViewerResult<T> = Result<T, ViewerError>;
