//! Cufflinks gene/transcript model repository.
//!
//! Cufflinks accessions are only unique inside the dataset that produced
//! them, so accession lookups always take a [`ScopedAccession`].

use exprdb_core::entities::{CufflinksGene, CufflinksTranscript, Dataset};
use exprdb_core::ids::ScopedAccession;

use crate::error::DatabaseError;
use crate::service::ExprService;
use crate::store::{Filter, Record, Table};

impl Record for CufflinksGene {
    const TABLE: Table = Table::CufflinksGenes;
    const COLUMNS: &'static str = "id, dataset_id, accession, genome_id, annotation_id";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            dataset_id: row.get::<i64>(1)?,
            accession: row.get::<String>(2)?,
            genome_id: row.get::<i64>(3)?,
            annotation_id: row.get::<i64>(4)?,
        })
    }
}

impl Record for CufflinksTranscript {
    const TABLE: Table = Table::CufflinksTranscripts;
    // dataset_id is not stored on the transcript; it is the owning gene's.
    const COLUMNS: &'static str = "id, cufflinks_gene_id, \
        (SELECT g.dataset_id FROM cufflinks_genes g WHERE g.id = cufflinks_transcripts.cufflinks_gene_id), \
        accession";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let id = row.get::<i64>(0)?;
        let dataset_id = row.get::<Option<i64>>(2)?.ok_or_else(|| {
            DatabaseError::InvalidState(format!(
                "cufflinks transcript {id} has no owning cufflinks gene"
            ))
        })?;
        Ok(Self {
            id,
            cufflinks_gene_id: row.get::<i64>(1)?,
            dataset_id,
            accession: row.get::<String>(3)?,
        })
    }
}

impl ExprService {
    pub async fn create_cufflinks_gene(
        &self,
        dataset_id: i64,
        accession: &str,
        genome_id: i64,
        annotation_id: i64,
    ) -> Result<CufflinksGene, DatabaseError> {
        let id = self
            .db()
            .insert(
                Table::CufflinksGenes,
                &["dataset_id", "accession", "genome_id", "annotation_id"],
                vec![
                    dataset_id.into(),
                    accession.into(),
                    genome_id.into(),
                    annotation_id.into(),
                ],
            )
            .await?;

        Ok(CufflinksGene {
            id,
            dataset_id,
            accession: accession.to_string(),
            genome_id,
            annotation_id,
        })
    }

    /// Insert a transcript model under `gene`.
    ///
    /// Accessions are unique across the whole dataset of `gene`, not just
    /// under one gene; a clash with any gene of that dataset is rejected.
    pub async fn create_cufflinks_transcript(
        &self,
        gene: &CufflinksGene,
        accession: &str,
    ) -> Result<CufflinksTranscript, DatabaseError> {
        let key = ScopedAccession::new(gene.dataset_id, accession);
        if self.find_cufflinks_transcript_by_accession(&key).await?.is_some() {
            tracing::warn!(%key, cufflinks_gene = gene.id, "rejected duplicate cufflinks transcript");
            return Err(DatabaseError::AlreadyExists {
                entity: "cufflinks transcript",
                key: key.to_string(),
            });
        }

        let id = self
            .db()
            .insert(
                Table::CufflinksTranscripts,
                &["cufflinks_gene_id", "accession"],
                vec![gene.id.into(), accession.into()],
            )
            .await?;

        Ok(CufflinksTranscript {
            id,
            cufflinks_gene_id: gene.id,
            dataset_id: gene.dataset_id,
            accession: accession.to_string(),
        })
    }

    pub async fn find_cufflinks_gene(&self, id: i64) -> Result<Option<CufflinksGene>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn find_cufflinks_gene_by_accession(
        &self,
        key: &ScopedAccession,
    ) -> Result<Option<CufflinksGene>, DatabaseError> {
        self.db()
            .find_one(
                &Filter::new()
                    .eq("dataset_id", key.dataset_id)
                    .eq("accession", key.accession.as_str()),
            )
            .await
    }

    pub async fn find_cufflinks_transcript(
        &self,
        id: i64,
    ) -> Result<Option<CufflinksTranscript>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    pub async fn find_cufflinks_transcript_by_accession(
        &self,
        key: &ScopedAccession,
    ) -> Result<Option<CufflinksTranscript>, DatabaseError> {
        let gene_ids: Vec<i64> = self
            .cufflinks_genes_of_dataset(key.dataset_id)
            .await?
            .into_iter()
            .map(|g| g.id)
            .collect();

        let mut matches: Vec<CufflinksTranscript> = self
            .db()
            .find_where(
                &Filter::new()
                    .is_in("cufflinks_gene_id", gene_ids)
                    .eq("accession", key.accession.as_str()),
                None,
            )
            .await?;
        if matches.len() > 1 {
            return Err(DatabaseError::InvalidState(format!(
                "{} cufflinks transcripts share accession {key}",
                matches.len()
            )));
        }
        Ok(matches.pop())
    }

    pub async fn transcripts_of_cufflinks_gene(
        &self,
        cufflinks_gene_id: i64,
    ) -> Result<Vec<CufflinksTranscript>, DatabaseError> {
        self.db()
            .find_where(
                &Filter::new().eq("cufflinks_gene_id", cufflinks_gene_id),
                Some("accession"),
            )
            .await
    }

    /// The Cufflinks gene a transcript model belongs to.
    pub async fn cufflinks_gene_of_transcript(
        &self,
        transcript: &CufflinksTranscript,
    ) -> Result<CufflinksGene, DatabaseError> {
        self.find_cufflinks_gene(transcript.cufflinks_gene_id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "cufflinks gene",
                key: transcript.cufflinks_gene_id.to_string(),
            })
    }

    /// The dataset a Cufflinks gene model was predicted from.
    pub async fn dataset_of_cufflinks_gene(
        &self,
        gene: &CufflinksGene,
    ) -> Result<Dataset, DatabaseError> {
        self.find_dataset(gene.dataset_id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "dataset",
                key: gene.dataset_id.to_string(),
            })
    }
}
