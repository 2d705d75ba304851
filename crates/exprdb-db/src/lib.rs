//! # exprdb-db
//!
//! libSQL storage for the expression database.
//!
//! Handles all relational state: genomes, datasets, samples, annotations,
//! the four feature tables and the three polymorphic link tables. On top of
//! the store it provides link resolution in both directions, dataset/sample
//! filtering of expression links, and per-feature expression entropy.

pub mod error;
pub mod filter;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use exprdb_config::DatabaseConfig;
use libsql::Builder;

/// Central database handle for all exprdb state operations.
///
/// Wraps a libSQL database and connection.
pub struct ExprDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ExprDb {
    /// Open a local database at the given path with foreign keys enforced.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open(&DatabaseConfig {
            path: path.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(&config.path).build().await?;
        let conn = db.connect()?;

        // Foreign keys are per-connection in SQLite
        if config.foreign_keys {
            conn.execute("PRAGMA foreign_keys = ON", ())
                .await
                .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        }

        let expr_db = Self { db, conn };
        expr_db.run_migrations().await?;
        tracing::debug!(path = %config.path, "opened expression store");
        Ok(expr_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
