//! Repository modules implementing store operations for all exprdb entities.
//!
//! Each module implements [`crate::store::Record`] for its entities and adds
//! methods to `ExprService` via `impl ExprService` blocks. Plain `create_*`
//! methods are the ingestion-side inserts; link inserts in [`links`] are
//! additionally gated by the feature discriminator.

pub mod annotation;
pub mod cufflinks;
pub mod dataset;
pub mod expression;
pub mod external_db;
pub mod feature;
pub mod gene;
pub mod genome;
pub mod links;
pub mod sample;
