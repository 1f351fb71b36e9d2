//! Error types shared across OmniScroll crates.

use std::path::PathBuf;

/// Top-level error type for OmniScroll operations.
#[derive(Debug, thiserror::Error)]
pub enum OmniScrollError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Sample stream error: {message}")]
    Stream { message: String },

    #[error("Replay error: {message}")]
    Replay { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using OmniScrollError.
pub type OmniScrollResult<T> = Result<T, OmniScrollError>;

impl OmniScrollError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn stream(msg: impl Into<String>) -> Self {
        Self::Stream {
            message: msg.into(),
        }
    }

    pub fn replay(msg: impl Into<String>) -> Self {
        Self::Replay {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_messages() {
        assert_eq!(
            OmniScrollError::stream("bad record").to_string(),
            "Sample stream error: bad record"
        );
        assert_eq!(
            OmniScrollError::replay("unknown profile: slow").to_string(),
            "Replay error: unknown profile: slow"
        );
        assert_eq!(
            OmniScrollError::config("smoothing must be in [1, 5]").to_string(),
            "Configuration error: smoothing must be in [1, 5]"
        );
    }

    #[test]
    fn test_file_not_found_shows_path() {
        let err = OmniScrollError::FileNotFound {
            path: PathBuf::from("/tmp/missing.jsonl"),
        };
        assert_eq!(err.to_string(), "File not found: /tmp/missing.jsonl");
    }
}
