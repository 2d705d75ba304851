//! External database repository.

use exprdb_core::entities::ExternalDb;

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::ExprService;
use crate::store::{Filter, Record, Table};

impl Record for ExternalDb {
    const TABLE: Table = Table::ExternalDbs;
    const COLUMNS: &'static str = "id, name, description";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            name: row.get::<String>(1)?,
            description: get_opt_string(row, 2)?,
        })
    }
}

impl ExprService {
    pub async fn create_external_db(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ExternalDb, DatabaseError> {
        let id = self
            .db()
            .insert(
                Table::ExternalDbs,
                &["name", "description"],
                vec![name.into(), description.into()],
            )
            .await?;

        Ok(ExternalDb {
            id,
            name: name.to_string(),
            description: description.map(String::from),
        })
    }

    pub async fn find_external_db(&self, id: i64) -> Result<Option<ExternalDb>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn find_external_db_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ExternalDb>, DatabaseError> {
        self.db().find_one(&Filter::new().eq("name", name)).await
    }
}
