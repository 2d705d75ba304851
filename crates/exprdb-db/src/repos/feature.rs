//! Feature lookup across the four feature tables.
//!
//! A `FeatureRef` is resolved by a single dispatch on its kind; the id is
//! only ever looked up in the table that kind names.

use exprdb_core::entities::Feature;
use exprdb_core::enums::FeatureKind;
use exprdb_core::errors::CoreError;
use exprdb_core::ids::{FeatureRef, ScopedAccession};

use crate::error::DatabaseError;
use crate::service::ExprService;

impl ExprService {
    /// Load the feature a `(kind, id)` pair names. Absence is `Ok(None)`.
    pub async fn find_feature(&self, reference: FeatureRef) -> Result<Option<Feature>, DatabaseError> {
        let id = reference.id;
        let feature = match reference.kind {
            FeatureKind::Gene => self.find_gene(id).await?.map(Feature::Gene),
            FeatureKind::Transcript => self.find_transcript(id).await?.map(Feature::Transcript),
            FeatureKind::CufflinksGene => self
                .find_cufflinks_gene(id)
                .await?
                .map(Feature::CufflinksGene),
            FeatureKind::CufflinksTranscript => self
                .find_cufflinks_transcript(id)
                .await?
                .map(Feature::CufflinksTranscript),
        };
        Ok(feature)
    }

    /// Load a feature that a stored link points at.
    ///
    /// Unlike [`Self::find_feature`], absence is a consistency violation and
    /// is reported as `DatabaseError::Resolution`.
    pub async fn require_feature(&self, reference: FeatureRef) -> Result<Feature, DatabaseError> {
        match self.find_feature(reference).await? {
            Some(feature) => Ok(feature),
            None => {
                tracing::debug!(%reference, "dangling feature reference");
                Err(DatabaseError::Resolution { reference })
            }
        }
    }

    /// Look up a feature by its human-facing identifier.
    ///
    /// Genes and transcripts are looked up by stable id. Cufflinks models are
    /// looked up by accession inside `dataset_id`, which is required for them.
    pub async fn find_feature_by_accession(
        &self,
        kind: FeatureKind,
        accession: &str,
        dataset_id: Option<i64>,
    ) -> Result<Option<Feature>, DatabaseError> {
        let scoped = || -> Result<ScopedAccession, DatabaseError> {
            dataset_id
                .map(|dataset_id| ScopedAccession::new(dataset_id, accession))
                .ok_or_else(|| {
                    DatabaseError::Core(CoreError::Validation(format!(
                        "{kind} accessions are only unique within a dataset; a dataset is required"
                    )))
                })
        };

        let feature = match kind {
            FeatureKind::Gene => self
                .find_gene_by_stable_id(accession)
                .await?
                .map(Feature::Gene),
            FeatureKind::Transcript => self
                .find_transcript_by_stable_id(accession)
                .await?
                .map(Feature::Transcript),
            FeatureKind::CufflinksGene => self
                .find_cufflinks_gene_by_accession(&scoped()?)
                .await?
                .map(Feature::CufflinksGene),
            FeatureKind::CufflinksTranscript => self
                .find_cufflinks_transcript_by_accession(&scoped()?)
                .await?
                .map(Feature::CufflinksTranscript),
        };
        Ok(feature)
    }
}
