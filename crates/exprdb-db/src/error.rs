//! Database error types for exprdb-db.

use exprdb_core::errors::CoreError;
use exprdb_core::ids::FeatureRef;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A row that the operation requires does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A row with the same identifying key already exists.
    #[error("{entity} already exists: {key}")]
    AlreadyExists { entity: &'static str, key: String },

    /// A link row names a feature that does not exist.
    #[error("Dangling feature reference: {reference}")]
    Resolution { reference: FeatureRef },

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Domain validation failed (discriminator, measurement, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether this error means a stored tag was outside the closed feature set.
    #[must_use]
    pub const fn is_invalid_discriminator(&self) -> bool {
        matches!(self, Self::Core(CoreError::InvalidDiscriminator { .. }))
    }
}
