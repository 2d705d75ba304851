//! Identity types for features.
//!
//! Every feature variant has an independent integer id space, so a bare
//! `i64` never identifies a feature on its own. `FeatureRef` pairs the id
//! with its discriminator. Cufflinks accessions are only unique within one
//! dataset, so they are looked up through `ScopedAccession`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::FeatureKind;

/// The `(source_type, source_id)` pair carried by every link row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FeatureRef {
    pub kind: FeatureKind,
    pub id: i64,
}

impl FeatureRef {
    #[must_use]
    pub const fn new(kind: FeatureKind, id: i64) -> Self {
        Self { kind, id }
    }

    #[must_use]
    pub const fn gene(id: i64) -> Self {
        Self::new(FeatureKind::Gene, id)
    }

    #[must_use]
    pub const fn transcript(id: i64) -> Self {
        Self::new(FeatureKind::Transcript, id)
    }

    #[must_use]
    pub const fn cufflinks_gene(id: i64) -> Self {
        Self::new(FeatureKind::CufflinksGene, id)
    }

    #[must_use]
    pub const fn cufflinks_transcript(id: i64) -> Self {
        Self::new(FeatureKind::CufflinksTranscript, id)
    }
}

impl fmt::Display for FeatureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Accession of a Cufflinks model, qualified by the dataset that produced it.
///
/// `XLOC_000001` in one dataset and `XLOC_000001` in another are unrelated
/// loci; equality and hashing include the dataset id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ScopedAccession {
    pub dataset_id: i64,
    pub accession: String,
}

impl ScopedAccession {
    #[must_use]
    pub fn new(dataset_id: i64, accession: impl Into<String>) -> Self {
        Self {
            dataset_id,
            accession: accession.into(),
        }
    }
}

impl fmt::Display for ScopedAccession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@dataset:{}", self.accession, self.dataset_id)
    }
}
