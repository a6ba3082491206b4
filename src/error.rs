use thiserror::Error;

/// Unified error type for drafterino operations
#[derive(Error, Debug)]
pub enum DrafterError {
    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Unknown bump kind: '{0}' (expected one of major, minor, patch, post)")]
    UnknownBumpKind(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event payload error: {0}")]
    Event(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in drafterino
pub type Result<T> = std::result::Result<T, DrafterError>;

impl DrafterError {
    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        DrafterError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DrafterError::Config(msg.into())
    }

    /// Create an event payload error with context
    pub fn event(msg: impl Into<String>) -> Self {
        DrafterError::Event(msg.into())
    }

    /// Create a GitHub API error with context
    pub fn api(msg: impl Into<String>) -> Self {
        DrafterError::Api(msg.into())
    }
}
