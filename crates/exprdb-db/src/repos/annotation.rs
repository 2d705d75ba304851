//! Annotation repository.

use exprdb_core::entities::{Annotation, Gene};
use exprdb_core::enums::AnnotationSource;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_enum};
use crate::service::ExprService;
use crate::store::{Filter, Record, Table};

impl Record for Annotation {
    const TABLE: Table = Table::Annotations;
    const COLUMNS: &'static str = "id, source, release_label";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            source: parse_enum(&row.get::<String>(1)?)?,
            release: get_opt_string(row, 2)?,
        })
    }
}

impl ExprService {
    pub async fn create_annotation(
        &self,
        source: AnnotationSource,
        release: Option<&str>,
    ) -> Result<Annotation, DatabaseError> {
        let id = self
            .db()
            .insert(
                Table::Annotations,
                &["source", "release_label"],
                vec![source.as_str().into(), release.into()],
            )
            .await?;

        Ok(Annotation {
            id,
            source,
            release: release.map(String::from),
        })
    }

    pub async fn find_annotation(&self, id: i64) -> Result<Option<Annotation>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn genes_of_annotation(
        &self,
        annotation_id: i64,
    ) -> Result<Vec<Gene>, DatabaseError> {
        self.db()
            .find_where(&Filter::new().eq("annotation_id", annotation_id), Some("id"))
            .await
    }
}
