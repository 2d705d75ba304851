//! Cross-cutting error types for exprdb.
//!
//! Errors raised while validating domain values, independent of any store.
//! Storage errors (`DatabaseError`) live in `exprdb-db` and wrap these.

use thiserror::Error;

/// Errors that can be raised by any exprdb crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A `source_type` value outside the closed feature set.
    #[error("Invalid feature discriminator: '{value}'")]
    InvalidDiscriminator { value: String },

    /// An FPKM value that is negative, NaN or infinite.
    #[error("Invalid FPKM measurement: {value}")]
    InvalidMeasurement { value: f64 },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Check that an FPKM value can be stored.
///
/// Zero is accepted: it means "not detected".
///
/// # Errors
///
/// Returns `CoreError::InvalidMeasurement` for negative or non-finite values.
pub fn validate_fpkm(value: f64) -> Result<f64, CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CoreError::InvalidMeasurement { value })
    }
}
