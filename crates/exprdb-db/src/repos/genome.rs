//! Genome repository.

use exprdb_core::entities::{CufflinksGene, Gene, Genome};

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::ExprService;
use crate::store::{Filter, Record, Table};

impl Record for Genome {
    const TABLE: Table = Table::Genomes;
    const COLUMNS: &'static str = "id, species, assembly";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            species: row.get::<String>(1)?,
            assembly: get_opt_string(row, 2)?,
        })
    }
}

impl ExprService {
    pub async fn create_genome(
        &self,
        species: &str,
        assembly: Option<&str>,
    ) -> Result<Genome, DatabaseError> {
        let id = self
            .db()
            .insert(
                Table::Genomes,
                &["species", "assembly"],
                vec![species.into(), assembly.into()],
            )
            .await?;

        Ok(Genome {
            id,
            species: species.to_string(),
            assembly: assembly.map(String::from),
        })
    }

    pub async fn find_genome(&self, id: i64) -> Result<Option<Genome>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn genes_of_genome(&self, genome_id: i64) -> Result<Vec<Gene>, DatabaseError> {
        self.db()
            .find_where(&Filter::new().eq("genome_id", genome_id), Some("id"))
            .await
    }

    pub async fn cufflinks_genes_of_genome(
        &self,
        genome_id: i64,
    ) -> Result<Vec<CufflinksGene>, DatabaseError> {
        self.db()
            .find_where(&Filter::new().eq("genome_id", genome_id), Some("id"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_genome_roundtrip() {
        let svc = test_service().await;
        let genome = svc.create_genome("Mus musculus", Some("GRCm38")).await.unwrap();

        let fetched = svc.find_genome(genome.id).await.unwrap().unwrap();
        assert_eq!(fetched, genome);
        assert_eq!(fetched.assembly.as_deref(), Some("GRCm38"));
    }

    #[tokio::test]
    async fn missing_genome_is_none() {
        let svc = test_service().await;
        assert!(svc.find_genome(42).await.unwrap().is_none());
    }
}
