//! Error types for the waybill library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all scheduling, rendering and storage
/// operations.
#[derive(Error, Debug)]
pub enum WaybillError {
    /// The trip needs more on-duty time than the driver has left in the cycle
    #[error(
        "Insufficient cycle hours remaining: trip requires {required:.2}h, only {remaining:.2}h left"
    )]
    CapacityExceeded { required: f64, remaining: f64 },
    /// Route metrics that cannot be scheduled
    #[error("Invalid route, '{field}': {reason}")]
    InvalidRoute { field: String, reason: String },
    /// A scheduling invariant was broken; always a bug signal
    #[error("Internal error: {message}")]
    Internal { message: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Trip not found for the given ID
    #[error("Trip with ID {id} not found")]
    TripNotFound { id: u64 },
    /// Driver not found for the given ID
    #[error("Driver with ID {id} not found")]
    DriverNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Drawing backend failures while painting a log document
    #[error("Render error: {message}")]
    Render { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WaybillError {
        WaybillError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WaybillError {
        WaybillError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WaybillError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for a route rejection on `field`.
    pub fn invalid_route(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRoute {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an internal invariant violation.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Wraps a failed tokio blocking task.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }

    /// Whether the error is a user-recoverable rejection rather than a fault.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. } | Self::InvalidRoute { .. } | Self::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WaybillError::database(message).with_source(e))
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait FileSystemResultExt<T> {
    /// Map an I/O error into [`WaybillError::FileSystem`] at `path`.
    fn fs_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|source| WaybillError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for waybill operations
pub type Result<T> = std::result::Result<T, WaybillError>;
