use thiserror::Error;

/// Unified error type for release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("{context}: HTTP {status}")]
    Api { context: String, status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid semantic version: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in gh-release-cut
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an API error for an unexpected HTTP status
    pub fn api(context: impl Into<String>, status: u16) -> Self {
        ReleaseError::Api {
            context: context.into(),
            status,
        }
    }

    /// Create a transport error with context
    pub fn transport(msg: impl Into<String>) -> Self {
        ReleaseError::Transport(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// HTTP status carried by an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ReleaseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
