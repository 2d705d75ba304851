use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CufflinksGene, CufflinksTranscript, Gene, Transcript};
use crate::enums::FeatureKind;
use crate::ids::{FeatureRef, ScopedAccession};

/// Any entity a link row can point at.
///
/// Serialized with an explicit `kind` tag carrying the same string as the
/// `source_type` column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feature {
    Gene(Gene),
    Transcript(Transcript),
    CufflinksGene(CufflinksGene),
    CufflinksTranscript(CufflinksTranscript),
}

impl Feature {
    #[must_use]
    pub const fn kind(&self) -> FeatureKind {
        match self {
            Self::Gene(_) => FeatureKind::Gene,
            Self::Transcript(_) => FeatureKind::Transcript,
            Self::CufflinksGene(_) => FeatureKind::CufflinksGene,
            Self::CufflinksTranscript(_) => FeatureKind::CufflinksTranscript,
        }
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Gene(g) => g.id,
            Self::Transcript(t) => t.id,
            Self::CufflinksGene(g) => g.id,
            Self::CufflinksTranscript(t) => t.id,
        }
    }

    #[must_use]
    pub const fn feature_ref(&self) -> FeatureRef {
        FeatureRef::new(self.kind(), self.id())
    }

    /// Human-facing identifier: the stable id for annotated features, the
    /// accession for Cufflinks models.
    #[must_use]
    pub fn accession(&self) -> &str {
        match self {
            Self::Gene(g) => &g.stable_id,
            Self::Transcript(t) => &t.stable_id,
            Self::CufflinksGene(g) => &g.accession,
            Self::CufflinksTranscript(t) => &t.accession,
        }
    }

    /// Dataset-qualified accession, for Cufflinks models only.
    #[must_use]
    pub fn scoped_accession(&self) -> Option<ScopedAccession> {
        match self {
            Self::Gene(_) | Self::Transcript(_) => None,
            Self::CufflinksGene(g) => Some(g.scoped()),
            Self::CufflinksTranscript(t) => Some(t.scoped()),
        }
    }
}

impl From<&Feature> for FeatureRef {
    fn from(feature: &Feature) -> Self {
        feature.feature_ref()
    }
}
