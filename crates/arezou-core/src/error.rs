//! Error type for page rendering and streaming.

/// Errors raised while producing a page response.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Section '{0}' failed: {1}")]
    SectionFailed(String, String),

    #[error("No page is served at {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
