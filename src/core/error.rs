//! Error types for scaffold-check.
//!
//! Only conditions that prevent a check from deciding PASS or FAIL end up
//! here. A missing file is an outcome, never an error.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in scaffold-check.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Configuration file not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path where config was expected.
        path: PathBuf,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        /// Description of the parse error.
        message: String,
        /// Optional source error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {field} - {message}")]
    ConfigInvalid {
        /// Field name that is invalid.
        field: String,
        /// Description of why it's invalid.
        message: String,
    },

    /// Project root does not exist or is not a directory.
    #[error("Project root is not a directory: {path}")]
    RootNotDirectory {
        /// The path that was given as root.
        path: PathBuf,
    },

    // =========================================================================
    // Inspection errors (abort the run)
    // =========================================================================
    /// A file exists but could not be read.
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        /// File that could not be read.
        path: PathBuf,
        /// Source error.
        #[source]
        source: std::io::Error,
    },

    /// A file exists but is not valid UTF-8.
    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding {
        /// File with invalid contents.
        path: PathBuf,
    },

    /// A JSON file exists but does not parse.
    #[error("Malformed JSON in {path}: {source}")]
    MalformedJson {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A built-in pattern is not a valid glob or regular expression.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Parser message.
        message: String,
    },

    // =========================================================================
    // I/O errors
    // =========================================================================
    /// File I/O error.
    #[error("I/O error: {message}")]
    Io {
        /// Description of what failed.
        message: String,
        /// Source error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new configuration parse error with source.
    pub fn config_parse_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new I/O error with context.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Creates an error for a file that exists but cannot be read.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error was raised while inspecting the project tree.
    pub const fn is_fatal_inspection(&self) -> bool {
        matches!(
            self,
            Self::Unreadable { .. }
                | Self::InvalidEncoding { .. }
                | Self::MalformedJson { .. }
                | Self::InvalidPattern { .. }
        )
    }
}
