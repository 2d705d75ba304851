//! Annotated gene and transcript repository.

use exprdb_core::entities::{Gene, Transcript};

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::ExprService;
use crate::store::{Filter, Record, Table};

impl Record for Gene {
    const TABLE: Table = Table::Genes;
    const COLUMNS: &'static str = "id, stable_id, symbol, biotype, genome_id, annotation_id";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            stable_id: row.get::<String>(1)?,
            symbol: get_opt_string(row, 2)?,
            biotype: get_opt_string(row, 3)?,
            genome_id: row.get::<i64>(4)?,
            annotation_id: row.get::<i64>(5)?,
        })
    }
}

impl Record for Transcript {
    const TABLE: Table = Table::Transcripts;
    const COLUMNS: &'static str = "id, stable_id, gene_id";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            stable_id: row.get::<String>(1)?,
            gene_id: row.get::<i64>(2)?,
        })
    }
}

/// Fields of a gene row as delivered by ingestion.
#[derive(Debug, Clone, Default)]
pub struct NewGene<'a> {
    pub stable_id: &'a str,
    pub symbol: Option<&'a str>,
    pub biotype: Option<&'a str>,
    pub genome_id: i64,
    pub annotation_id: i64,
}

impl ExprService {
    pub async fn create_gene(&self, gene: &NewGene<'_>) -> Result<Gene, DatabaseError> {
        let id = self
            .db()
            .insert(
                Table::Genes,
                &["stable_id", "symbol", "biotype", "genome_id", "annotation_id"],
                vec![
                    gene.stable_id.into(),
                    gene.symbol.into(),
                    gene.biotype.into(),
                    gene.genome_id.into(),
                    gene.annotation_id.into(),
                ],
            )
            .await?;

        Ok(Gene {
            id,
            stable_id: gene.stable_id.to_string(),
            symbol: gene.symbol.map(String::from),
            biotype: gene.biotype.map(String::from),
            genome_id: gene.genome_id,
            annotation_id: gene.annotation_id,
        })
    }

    pub async fn create_transcript(
        &self,
        gene_id: i64,
        stable_id: &str,
    ) -> Result<Transcript, DatabaseError> {
        let id = self
            .db()
            .insert(
                Table::Transcripts,
                &["stable_id", "gene_id"],
                vec![stable_id.into(), gene_id.into()],
            )
            .await?;

        Ok(Transcript {
            id,
            stable_id: stable_id.to_string(),
            gene_id,
        })
    }

    pub async fn find_gene(&self, id: i64) -> Result<Option<Gene>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn find_gene_by_stable_id(
        &self,
        stable_id: &str,
    ) -> Result<Option<Gene>, DatabaseError> {
        self.db().find_one(&Filter::new().eq("stable_id", stable_id)).await
    }

    pub async fn find_transcript(&self, id: i64) -> Result<Option<Transcript>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn find_transcript_by_stable_id(
        &self,
        stable_id: &str,
    ) -> Result<Option<Transcript>, DatabaseError> {
        self.db().find_one(&Filter::new().eq("stable_id", stable_id)).await
    }

    pub async fn transcripts_of_gene(&self, gene_id: i64) -> Result<Vec<Transcript>, DatabaseError> {
        self.db()
            .find_where(&Filter::new().eq("gene_id", gene_id), Some("stable_id"))
            .await
    }

    /// The gene a transcript belongs to.
    pub async fn gene_of_transcript(&self, transcript: &Transcript) -> Result<Gene, DatabaseError> {
        self.find_gene(transcript.gene_id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "gene",
                key: transcript.gene_id.to_string(),
            })
    }
}
