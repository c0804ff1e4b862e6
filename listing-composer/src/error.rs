//! Composer error types

use crate::validate::ValidationReport;
use catalog_client::CatalogError;
use thiserror::Error;

/// Submission failure
///
/// Neither variant is fatal: validation errors are recoverable by user
/// edits, and catalog errors leave the draft untouched for retry.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed local validation
    #[error("validation failed in {:?}", .0.section)]
    Invalid(ValidationReport),

    /// The catalog collaborator rejected or failed the submission
    #[error("submission failed: {0}")]
    Catalog(#[from] CatalogError),
}

impl From<ValidationReport> for SubmitError {
    fn from(report: ValidationReport) -> Self {
        SubmitError::Invalid(report)
    }
}
