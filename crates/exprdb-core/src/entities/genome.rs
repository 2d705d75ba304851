use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reference genome. Owns annotated genes and Cufflinks gene models.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Genome {
    pub id: i64,
    pub species: String,
    /// Assembly label, e.g. `GRCm38`.
    pub assembly: Option<String>,
}
