use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FeatureKind;
use crate::ids::FeatureRef;

/// One FPKM measurement of a feature in a sample (`xref_samples`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExpressionLink {
    pub id: i64,
    pub source_type: FeatureKind,
    pub source_id: i64,
    pub sample_id: i64,
    pub fpkm: f64,
}

/// A cross-reference from a feature to an external database entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeatureXref {
    pub id: i64,
    pub source_type: FeatureKind,
    pub source_id: i64,
    pub external_db_id: i64,
    /// Identifier of the entry inside the external database.
    pub accession: String,
    pub description: Option<String>,
}

/// An aligned-feature prediction (motif or target hit) on a feature.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AlignFeature {
    pub id: i64,
    pub source_type: FeatureKind,
    pub source_id: i64,
    pub external_db_id: i64,
    pub hit_name: String,
}

impl ExpressionLink {
    #[must_use]
    pub const fn source(&self) -> FeatureRef {
        FeatureRef::new(self.source_type, self.source_id)
    }
}

impl FeatureXref {
    #[must_use]
    pub const fn source(&self) -> FeatureRef {
        FeatureRef::new(self.source_type, self.source_id)
    }
}

impl AlignFeature {
    #[must_use]
    pub const fn source(&self) -> FeatureRef {
        FeatureRef::new(self.source_type, self.source_id)
    }
}
