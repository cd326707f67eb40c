use std::fmt;

use serde::Serialize;

/// Why a consequence row was removed before the join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    InvalidConsequenceType,
    MissingDate,
    StartAfterEnd,
}

impl ExclusionReason {
    pub const fn description(self) -> &'static str {
        match self {
            ExclusionReason::InvalidConsequenceType => {
                "Invalid consequence_type (not in approved enum)"
            }
            ExclusionReason::MissingDate => "Missing consequence start or end date",
            ExclusionReason::StartAfterEnd => {
                "Consequence start after end (consequence_start_date > consequence_end_date)"
            }
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Rows removed by one validation rule.
///
/// `row_indices` are 0-based positions of data rows in the source file, so an
/// operator can find them again regardless of earlier exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExclusionRecord {
    pub reason: ExclusionReason,
    pub description: &'static str,
    pub count: usize,
    pub row_indices: Vec<usize>,
}

impl ExclusionRecord {
    pub fn new(reason: ExclusionReason, row_indices: Vec<usize>) -> Self {
        Self {
            reason,
            description: reason.description(),
            count: row_indices.len(),
            row_indices,
        }
    }
}
