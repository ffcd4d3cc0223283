//! Error types for the shortcut library.
//!
//! Every fallible operation in the crate returns [`ShortcutError`]. Nothing in
//! the library recovers from these on its own; callers decide how to report.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the shortcut library.
#[derive(Debug, Error)]
pub enum ShortcutError {
    // Binary container errors
    #[error("Malformed shortcut file at byte {offset}: {message}")]
    Format { message: String, offset: usize },

    // Tree <-> record errors
    #[error("Field {field} should be {expected}, found {found}")]
    SchemaMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    // Lookup errors
    #[error("No shortcut found with {what}")]
    NotFound { what: String },

    // Configuration errors (bad keys, missing settings)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Received non-success response {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("SteamGridDB error: {0}")]
    GridDb(String),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for shortcut operations.
pub type Result<T> = std::result::Result<T, ShortcutError>;

impl From<std::io::Error> for ShortcutError {
    fn from(err: std::io::Error) -> Self {
        ShortcutError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ShortcutError {
    fn from(err: serde_json::Error) -> Self {
        ShortcutError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for ShortcutError {
    fn from(err: reqwest::Error) -> Self {
        ShortcutError::Network {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ShortcutError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ShortcutError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a format error at the given byte offset.
    pub fn format(message: impl Into<String>, offset: usize) -> Self {
        ShortcutError::Format {
            message: message.into(),
            offset,
        }
    }

    /// Create a not-found error describing what was searched for.
    pub fn not_found(what: impl Into<String>) -> Self {
        ShortcutError::NotFound { what: what.into() }
    }

    /// Whether this is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShortcutError::NotFound { .. })
    }

    /// Process exit code for a command that failed with this error.
    ///
    /// Every reported error exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
