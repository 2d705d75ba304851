use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tissue sample. Always belongs to exactly one dataset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Sample {
    pub id: i64,
    pub name: String,
    pub dataset_id: i64,
}
