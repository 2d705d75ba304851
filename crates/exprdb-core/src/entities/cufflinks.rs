use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{FeatureRef, ScopedAccession};

/// A de-novo gene model predicted by Cufflinks for one dataset.
///
/// The accession is only unique within `dataset_id`; use [`Self::scoped`]
/// whenever two models are compared by accession.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CufflinksGene {
    pub id: i64,
    pub dataset_id: i64,
    pub accession: String,
    pub genome_id: i64,
    pub annotation_id: i64,
}

impl CufflinksGene {
    #[must_use]
    pub fn scoped(&self) -> ScopedAccession {
        ScopedAccession::new(self.dataset_id, self.accession.clone())
    }
}

/// A de-novo transcript model belonging to one [`CufflinksGene`].
///
/// `dataset_id` is the owning gene's dataset, carried here so the scoped
/// identity is available without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CufflinksTranscript {
    pub id: i64,
    pub cufflinks_gene_id: i64,
    pub dataset_id: i64,
    pub accession: String,
}

impl CufflinksTranscript {
    #[must_use]
    pub fn scoped(&self) -> ScopedAccession {
        ScopedAccession::new(self.dataset_id, self.accession.clone())
    }
}

impl From<&CufflinksGene> for FeatureRef {
    fn from(gene: &CufflinksGene) -> Self {
        Self::cufflinks_gene(gene.id)
    }
}

impl From<&CufflinksTranscript> for FeatureRef {
    fn from(transcript: &CufflinksTranscript) -> Self {
        Self::cufflinks_transcript(transcript.id)
    }
}
