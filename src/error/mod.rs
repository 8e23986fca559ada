//! Error types for the dogshouse service.
//!
//! This module defines a hierarchical error system:
//! - [`ServiceError`]: Errors surfaced by the record service
//! - [`QueryError`]: Listing-parameter validation errors
//! - [`StorageError`]: Database operation errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility. The core
//! components surface these typed errors without logging, retrying, or
//! swallowing them; translation to HTTP responses happens once at the
//! transport boundary.

use thiserror::Error;

/// Listing-parameter validation errors.
///
/// Produced by [`crate::query::QueryPlan::build`] when sorting or paging
/// inputs cannot be turned into a valid plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A paired parameter was given without its counterpart, or an order
    /// value other than `asc`/`desc` was supplied.
    #[error("{message}")]
    InvalidInput {
        /// Human-readable description of what's invalid.
        message: String,
        /// Offending parameter, when a single one is identifiable.
        parameter: Option<String>,
    },

    /// Unknown sortable attribute name.
    #[error("Invalid attribute name")]
    InvalidField {
        /// The parameter that carried the unknown attribute.
        parameter: String,
    },

    /// Page number or page size below 1.
    #[error("Invalid pageNumber or/and pageSize")]
    OutOfRange,
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// A uniqueness constraint rejected a write.
    ///
    /// Raised when an insert loses the race between the service-level
    /// pre-check and the commit; the service re-signals this as
    /// [`ServiceError::DuplicateName`].
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation {
        /// The constraint that rejected the write.
        constraint: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Record service errors.
///
/// This is the error type surfaced by [`crate::service::DogService`] to the
/// transport layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Listing parameters failed validation.
    ///
    /// Planner errors propagate through the service unchanged.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A record with the requested name already exists.
    ///
    /// Signaled both by the pre-check lookup and by the storage-level
    /// uniqueness backstop, so callers see one error kind regardless of
    /// which layer caught the collision.
    #[error("Name is already taken")]
    DuplicateName,

    /// An unanticipated storage failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
