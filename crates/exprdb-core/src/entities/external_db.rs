use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An external annotation source (domain database, motif collection, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExternalDb {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
