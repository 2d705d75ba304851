//! Dataset repository.

use exprdb_core::entities::{CufflinksGene, Dataset, Sample};

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::ExprService;
use crate::store::{Filter, Record, Table};

impl Record for Dataset {
    const TABLE: Table = Table::Datasets;
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
    pub async fn create_dataset(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Dataset, DatabaseError> {
        let id = self
            .db()
            .insert(
                Table::Datasets,
                &["name", "description"],
                vec![name.into(), description.into()],
            )
            .await?;

        Ok(Dataset {
            id,
            name: name.to_string(),
            description: description.map(String::from),
        })
    }

    pub async fn find_dataset(&self, id: i64) -> Result<Option<Dataset>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn find_dataset_by_name(&self, name: &str) -> Result<Option<Dataset>, DatabaseError> {
        self.db().find_one(&Filter::new().eq("name", name)).await
    }

    /// Samples of a dataset, ordered by name.
    pub async fn samples_of_dataset(&self, dataset_id: i64) -> Result<Vec<Sample>, DatabaseError> {
        self.db()
            .find_where(&Filter::new().eq("dataset_id", dataset_id), Some("name, id"))
            .await
    }

    pub async fn cufflinks_genes_of_dataset(
        &self,
        dataset_id: i64,
    ) -> Result<Vec<CufflinksGene>, DatabaseError> {
        self.db()
            .find_where(&Filter::new().eq("dataset_id", dataset_id), Some("accession"))
            .await
    }
}
