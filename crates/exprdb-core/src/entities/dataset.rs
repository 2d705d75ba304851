use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A set of samples processed together by one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Dataset {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
