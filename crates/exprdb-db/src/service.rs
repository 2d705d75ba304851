//! Service layer exposing repository operations over one store handle.
//!
//! `ExprService` wraps `ExprDb` (raw database access). All repo methods are
//! implemented as `impl ExprService` blocks in `crate::repos`. The service
//! holds no state besides the connection; callers pass it explicitly.

use exprdb_config::DatabaseConfig;

use crate::ExprDb;
use crate::error::DatabaseError;

pub struct ExprService {
    db: ExprDb,
}

impl ExprService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ExprDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service for the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = ExprDb::open(config).await?;
        Ok(Self { db })
    }

    /// Create from an existing `ExprDb`.
    #[must_use]
    pub const fn from_db(db: ExprDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ExprDb {
        &self.db
    }
}
