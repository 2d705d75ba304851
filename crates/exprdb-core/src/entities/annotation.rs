use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AnnotationSource;

/// Provenance of a set of gene models.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Annotation {
    pub id: i64,
    pub source: AnnotationSource,
    pub release: Option<String>,
}
