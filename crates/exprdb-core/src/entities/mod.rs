//! Entity structs for all exprdb domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `exprdb-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod annotation;
mod cufflinks;
mod dataset;
mod external_db;
mod feature;
mod gene;
mod genome;
mod links;
mod sample;

pub use annotation::Annotation;
pub use cufflinks::{CufflinksGene, CufflinksTranscript};
pub use dataset::Dataset;
pub use external_db::ExternalDb;
pub use feature::Feature;
pub use gene::{Gene, Transcript};
pub use genome::Genome;
pub use links::{AlignFeature, ExpressionLink, FeatureXref};
pub use sample::Sample;
