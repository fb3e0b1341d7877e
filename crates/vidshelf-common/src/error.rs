//! Error types shared by the catalog and the range server.
//!
//! Every failure a request or a catalog build can hit is a variant of
//! [`Error`], which carries enough context for the HTTP layer to derive a
//! status code via [`Error::http_status`].

use std::path::PathBuf;

/// Unified error type for vidshelf.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog root is missing, not a directory, or unreadable.
    #[error("Directory unavailable: {}: {source}", path.display())]
    DirectoryUnavailable {
        /// The root that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// No catalog entry exists for the requested index.
    #[error("Video not found: {index}")]
    NotFound {
        /// The index as supplied by the caller.
        index: String,
    },

    /// The file behind a catalog entry vanished after the catalog was built.
    #[error("File unavailable: {}: {source}", path.display())]
    FileUnavailable {
        /// Absolute path recorded in the catalog.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The requested start offset lies at or beyond the end of the file.
    #[error("Range not satisfiable: start {start} for file of {file_size} bytes")]
    RangeNotSatisfiable {
        /// Requested start offset.
        start: u64,
        /// Size of the file at request time.
        file_size: u64,
    },

    /// Fewer bytes were read than the validated window length.
    #[error("Incomplete read: expected {expected} bytes, got {actual}")]
    IncompleteRead {
        /// Window length.
        expected: u64,
        /// Bytes actually read.
        actual: u64,
    },

    /// A configuration or request value is invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::DirectoryUnavailable { .. } => 400,
            Error::NotFound { .. } => 404,
            Error::FileUnavailable { .. } => 410,
            Error::RangeNotSatisfiable { .. } => 416,
            Error::IncompleteRead { .. } => 500,
            Error::InvalidInput(_) => 400,
            Error::Io { .. } => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Error::DirectoryUnavailable { .. } => "directory_unavailable",
            Error::NotFound { .. } => "not_found",
            Error::FileUnavailable { .. } => "file_unavailable",
            Error::RangeNotSatisfiable { .. } => "range_not_satisfiable",
            Error::IncompleteRead { .. } => "incomplete_read",
            Error::InvalidInput(_) => "invalid_input",
            Error::Io { .. } => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }

    /// Message safe to show to HTTP clients.
    ///
    /// Never includes filesystem paths or underlying OS errors.
    pub fn public_message(&self) -> String {
        match self {
            Error::DirectoryUnavailable { .. } => "Directory unavailable".to_string(),
            Error::NotFound { index } => format!("Video not found: {index}"),
            Error::FileUnavailable { .. } => "Video file is no longer available".to_string(),
            Error::RangeNotSatisfiable { .. } => "Requested range not satisfiable".to_string(),
            Error::InvalidInput(msg) => format!("Invalid input: {msg}"),
            Error::IncompleteRead { .. } | Error::Io { .. } | Error::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(index: impl std::fmt::Display) -> Self {
        Error::NotFound {
            index: index.to_string(),
        }
    }

    /// Convenience constructor for [`Error::DirectoryUnavailable`].
    pub fn directory_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::DirectoryUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Convenience constructor for [`Error::FileUnavailable`].
    pub fn file_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Convenience constructor for [`Error::InvalidInput`].
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
