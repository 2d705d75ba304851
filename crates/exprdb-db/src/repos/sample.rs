//! Sample repository.

use exprdb_core::entities::{Dataset, Sample};

use crate::error::DatabaseError;
use crate::service::ExprService;
use crate::store::{Filter, Record, Table};

impl Record for Sample {
    const TABLE: Table = Table::Samples;
    const COLUMNS: &'static str = "id, name, dataset_id";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            name: row.get::<String>(1)?,
            dataset_id: row.get::<i64>(2)?,
        })
    }
}

impl ExprService {
    pub async fn create_sample(&self, dataset_id: i64, name: &str) -> Result<Sample, DatabaseError> {
        let id = self
            .db()
            .insert(
                Table::Samples,
                &["name", "dataset_id"],
                vec![name.into(), dataset_id.into()],
            )
            .await?;

        Ok(Sample {
            id,
            name: name.to_string(),
            dataset_id,
        })
    }

    pub async fn find_sample(&self, id: i64) -> Result<Option<Sample>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn find_sample_by_name(
        &self,
        dataset_id: i64,
        name: &str,
    ) -> Result<Option<Sample>, DatabaseError> {
        self.db()
            .find_one(&Filter::new().eq("dataset_id", dataset_id).eq("name", name))
            .await
    }

    /// The dataset a sample belongs to. A sample without one is corrupt data.
    pub async fn dataset_of_sample(&self, sample: &Sample) -> Result<Dataset, DatabaseError> {
        self.find_dataset(sample.dataset_id).await?.ok_or_else(|| {
            DatabaseError::InvalidState(format!(
                "sample {} references missing dataset {}",
                sample.id, sample.dataset_id
            ))
        })
    }
}
