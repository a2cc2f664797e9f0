//! Error types for the framelet runtime.

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while delegating navigation to a child frame.
#[derive(Debug, Error)]
pub enum Error {
    /// No matching response arrived before the configured deadline.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The child frame was removed from the document before a response
    /// arrived, either by `close()` or out-of-band.
    #[error("Frame removed: {0}")]
    FrameRemoved(String),

    /// Operation attempted on a controller whose frame is already gone.
    #[error("Frame disposed: {0}")]
    Disposed(String),

    /// The host document cannot receive frames (no document, no body).
    #[error("Host document unavailable: {0}")]
    HostUnavailable(String),

    /// The event channel to the child frame closed unexpectedly.
    #[error("Context event channel closed unexpectedly")]
    ChannelClosed,

    /// A URL failed to parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// Returns true if the navigation was interrupted by the frame going
    /// away rather than by the protocol or the clock.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::FrameRemoved(_) | Error::Disposed(_))
    }
}
