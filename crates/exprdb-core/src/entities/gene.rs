use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::FeatureRef;

/// An annotated gene from a reference annotation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Gene {
    pub id: i64,
    /// Stable external identifier, e.g. `ENSMUSG00000000001`.
    pub stable_id: String,
    pub symbol: Option<String>,
    pub biotype: Option<String>,
    pub genome_id: i64,
    pub annotation_id: i64,
}

/// An annotated transcript. Always belongs to one gene.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Transcript {
    pub id: i64,
    pub stable_id: String,
    pub gene_id: i64,
}

impl From<&Gene> for FeatureRef {
    fn from(gene: &Gene) -> Self {
        Self::gene(gene.id)
    }
}

impl From<&Transcript> for FeatureRef {
    fn from(transcript: &Transcript) -> Self {
        Self::transcript(transcript.id)
    }
}
