//! Common error types used throughout sponsorskip.
//!
//! None of these errors are fatal to playback. They describe why a piece of
//! evidence (a remote segment, a chapter title, a host request) could not be
//! used, so callers can log and degrade.

/// Common error type for sponsorskip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A segment interval violated `0 <= start < end` or was not finite.
    #[error("Invalid segment: {0}")]
    InvalidSegment(String),

    /// A category label or wire token is not part of the fixed table.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The host player rejected or failed a request.
    #[error("Host error: {0}")]
    Host(String),
}

impl Error {
    /// Create a new InvalidSegment error.
    pub fn invalid_segment<S: Into<String>>(msg: S) -> Self {
        Self::InvalidSegment(msg.into())
    }

    /// Create a new UnknownCategory error.
    pub fn unknown_category<S: Into<String>>(name: S) -> Self {
        Self::UnknownCategory(name.into())
    }

    /// Create a new Host error.
    pub fn host<S: Into<String>>(msg: S) -> Self {
        Self::Host(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
