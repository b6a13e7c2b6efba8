//! Error types for similarscan.
//!
//! Library crates use [`ScanError`] via `thiserror`.
//! The CLI crate wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all similarscan operations.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Configuration loading or validation error. Fatal at startup.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error while fetching a recommendation page.
    /// Absorbed by the traversal engine — a failed page is skipped,
    /// its fetch-call budget is still consumed.
    #[error("network error: {0}")]
    Network(String),

    /// Markup missing expected structure, or result serialization failure.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error (result-file writes).
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
