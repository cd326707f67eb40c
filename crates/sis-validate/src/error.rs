//! Error types for validation checks.

use sis_ingest::IngestError;
use thiserror::Error;

/// Faults while validating. Row problems are exclusions, not errors.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, ValidateError>;
