//! Error types for join and derivation.

use polars::prelude::PolarsError;
use sis_ingest::IngestError;
use sis_model::PipelineHalt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A contract condition stopped the run.
    #[error(transparent)]
    Halted(#[from] PipelineHalt),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<PolarsError> for TransformError {
    fn from(err: PolarsError) -> Self {
        TransformError::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
