//! # exprdb-core
//!
//! Core types for the expression database.
//!
//! This crate provides the foundational types shared across all exprdb crates:
//! - Entity structs for genomes, datasets, samples, annotations and features
//! - The closed `FeatureKind` discriminator used by every polymorphic link table
//! - The `Feature` tagged union and `FeatureRef` link-side identity
//! - Dataset-scoped identity for Cufflinks models
//! - Cross-cutting error types
//! - Shannon entropy of an expression distribution

pub mod entities;
pub mod entropy;
pub mod enums;
pub mod errors;
pub mod ids;
