//! Error types for the RegLens workspace.

/// Errors that can occur across the RegLens metrics pipeline.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The relational store cannot be reached or a query against it failed.
    ///
    /// Surfaced to HTTP clients as a 5xx response, never as a partial result.
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// Human-readable description of the failure
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Client-side fetch failure: non-2xx response or transport-level error.
    ///
    /// Caught locally and rendered as a user-facing error panel; the cause
    /// is not distinguished beyond the message.
    #[error("Fetch failed: {message}")]
    FetchFailed {
        /// Human-readable description of the failure
        message: String,
    },

    /// No agency metrics row exists for the requested name.
    #[error("Agency not found: {name}")]
    AgencyNotFound {
        /// Agency name that was not found
        name: String,
    },

    /// A row or snapshot violates a data model invariant.
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for RegLens operations.
///
/// This is the standard Result type used throughout the RegLens codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Retryable errors are transient failures: an unreachable store, a
    /// failed fetch, network-level I/O. Validation and not-found errors
    /// are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::StoreUnavailable { .. } => true,
            Error::FetchFailed { .. } => true,
            Error::Database(_) => true,
            Error::Io(_) => true,
            Error::AgencyNotFound { .. } => false,
            Error::Validation { .. } => false,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new store-unavailable error with a message.
    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        Error::StoreUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new store-unavailable error with a message and source error.
    pub fn store_unavailable_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::StoreUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new fetch-failed error.
    pub fn fetch_failed<S: Into<String>>(message: S) -> Self {
        Error::FetchFailed {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
