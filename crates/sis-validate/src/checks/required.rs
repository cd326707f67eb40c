//! Required canonical fields after alias resolution.

use sis_ingest::Dataset;
use sis_model::{CanonicalField, PipelineHalt};
use tracing::error;

/// Required fields of the dataset's role that are not columns, in contract order.
pub fn missing_fields(dataset: &Dataset) -> Vec<CanonicalField> {
    dataset
        .role()
        .required_fields()
        .iter()
        .copied()
        .filter(|field| !dataset.has_column(field.as_str()))
        .collect()
}

/// Halts when any required field is absent.
pub fn check(dataset: &Dataset) -> Result<(), PipelineHalt> {
    let missing = missing_fields(dataset);
    if missing.is_empty() {
        return Ok(());
    }
    let halt = PipelineHalt::MissingRequiredFields {
        role: dataset.role(),
        missing,
    };
    error!(file = %dataset.role(), "{halt}");
    Err(halt)
}
