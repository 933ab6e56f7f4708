//! Error types for railnet.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading, building or rendering railway data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error, optionally tied to the file being read or written.
    #[error("I/O error{}: {source}", fmt_path(.path))]
    Io {
        /// File involved, if known
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        /// CSV file being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: csv::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of entity ("station", "node", ...)
        kind: String,
        /// Identifier that was looked up
        id: String,
    },

    /// A required input file is absent.
    #[error("Missing required file: {}", .path.display())]
    MissingFile {
        /// Expected location
        path: PathBuf,
    },

    /// Input data is present but unusable.
    #[error("Data error: {message}")]
    Data {
        /// What is wrong with the data
        message: String,
    },
}

/// Convenience `Result` type alias for railnet operations.
pub type Result<T> = std::result::Result<T, Error>;

fn fmt_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}

impl Error {
    /// Creates an I/O error without path context.
    pub fn io(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }

    /// Creates an I/O error for a specific file.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a CSV error for a specific file.
    pub fn csv_with_path(source: csv::Error, path: impl AsRef<Path>) -> Self {
        Error::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a not-found error for an entity of the given kind.
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Creates a missing-file error.
    pub fn missing_file(path: impl AsRef<Path>) -> Self {
        Error::MissingFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a data error.
    pub fn data<S: Into<String>>(message: S) -> Self {
        Error::Data {
            message: message.into(),
        }
    }

    /// Returns whether this error stems from user input (paths, config, ids)
    /// rather than from a fault while processing.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::MissingFile { .. } | Error::NotFound { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::io(source)
    }
}
