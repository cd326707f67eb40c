//! Individual validation checks, run in pipeline order.

pub mod consequence_type;
pub mod dates;
pub mod required;

use sis_ingest::Dataset;
use sis_model::ExclusionRecord;

/// The rows a check kept, plus what it removed and why.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub dataset: Dataset,
    pub exclusions: Vec<ExclusionRecord>,
    pub flags: Vec<String>,
}

/// Source positions of the rows a mask drops.
pub(crate) fn dropped_origins(dataset: &Dataset, keep: &[bool]) -> Vec<usize> {
    dataset
        .origin()
        .iter()
        .zip(keep)
        .filter(|(_, keep)| !**keep)
        .map(|(origin, _)| *origin)
        .collect()
}
