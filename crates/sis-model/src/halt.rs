//! Structured pipeline halts.
//!
//! A halt is fatal: the run stops and the caller gets nothing but this error.
//! Row-level problems are never halts; they become [`ExclusionRecord`]s.
//!
//! [`ExclusionRecord`]: crate::ExclusionRecord

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::JOIN_SUCCESS_THRESHOLD;
use crate::field::{CanonicalField, FileRole};
use crate::report::format_percent;

/// Label used when a halt concerns the relation between both files.
pub const BOTH_FILES_LABEL: &str = "Both (Incident + Consequence)";

/// Fatal conditions that stop a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineHalt {
    /// Source file does not exist.
    #[error("{role} file not found: {}", path.display())]
    FileNotFound { role: FileRole, path: PathBuf },

    /// Source file exists but is not well-formed CSV.
    #[error("{role} file is not parseable ({}): {message}", path.display())]
    NotParseable {
        role: FileRole,
        path: PathBuf,
        message: String,
    },

    /// Required canonical fields absent after alias resolution.
    #[error("required columns missing from {role} file: {}", field_list(missing))]
    MissingRequiredFields {
        role: FileRole,
        missing: Vec<CanonicalField>,
    },

    /// Too few incidents found a consequence row.
    #[error(
        "join success {} is below the required {} ({matched} of {total} incidents matched)",
        format_percent(*rate, 1),
        format_percent(JOIN_SUCCESS_THRESHOLD, 0)
    )]
    JoinBelowThreshold {
        rate: f64,
        matched: usize,
        total: usize,
    },

    /// A joined row has neither explicit minutes nor valid dates.
    #[error("cannot compute instructional minutes for joined row {row}")]
    MinutesUndeterminable { row: usize, join_success_rate: f64 },
}

fn field_list(fields: &[CanonicalField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl PipelineHalt {
    /// Short human-readable reason.
    pub fn reason(&self) -> String {
        match self {
            PipelineHalt::FileNotFound { role, .. } => format!("{role} file not found"),
            PipelineHalt::NotParseable { role, .. } => format!("{role} file is not parseable"),
            PipelineHalt::MissingRequiredFields { .. } => "Required columns missing".to_string(),
            PipelineHalt::JoinBelowThreshold { .. } => {
                "Join success below required threshold".to_string()
            }
            PipelineHalt::MinutesUndeterminable { .. } => {
                "Cannot compute instructional minutes: no explicit minutes and no valid dates"
                    .to_string()
            }
        }
    }

    pub fn affected_file(&self) -> String {
        match self {
            PipelineHalt::FileNotFound { path, .. } | PipelineHalt::NotParseable { path, .. } => {
                path.display().to_string()
            }
            PipelineHalt::MissingRequiredFields { role, .. } => role.label().to_string(),
            PipelineHalt::JoinBelowThreshold { .. } => BOTH_FILES_LABEL.to_string(),
            PipelineHalt::MinutesUndeterminable { .. } => FileRole::Consequence.label().to_string(),
        }
    }

    /// Missing or invalid field names, empty when the halt is about a file.
    pub fn fields(&self) -> Vec<String> {
        match self {
            PipelineHalt::FileNotFound { .. } | PipelineHalt::NotParseable { .. } => Vec::new(),
            PipelineHalt::MissingRequiredFields { missing, .. } => {
                missing.iter().map(ToString::to_string).collect()
            }
            PipelineHalt::JoinBelowThreshold { .. } => vec!["incident_number match".to_string()],
            PipelineHalt::MinutesUndeterminable { .. } => vec![
                CanonicalField::InstructionalMinutes.to_string(),
                CanonicalField::ConsequenceStartDate.to_string(),
                CanonicalField::ConsequenceEndDate.to_string(),
            ],
        }
    }

    /// Join rate, when the run got far enough to compute it.
    pub fn join_success_rate(&self) -> Option<f64> {
        match self {
            PipelineHalt::JoinBelowThreshold { rate, .. } => Some(*rate),
            PipelineHalt::MinutesUndeterminable {
                join_success_rate, ..
            } => Some(*join_success_rate),
            _ => None,
        }
    }

    /// Ordered operator fix steps.
    pub fn remediation(&self) -> Vec<String> {
        match self {
            PipelineHalt::FileNotFound { path, .. } => vec![
                format!("Verify the path is correct: {}", path.display()),
                "Ensure the file has been exported before running ingestion.".to_string(),
            ],
            PipelineHalt::NotParseable { message, .. } => vec![
                "Verify the file is a valid CSV.".to_string(),
                format!("Parse error: {message}"),
            ],
            PipelineHalt::MissingRequiredFields { missing, .. } => vec![
                format!("Add or rename missing column(s): {}", field_list(missing)),
                "Ensure column headers match expected names or known variants.".to_string(),
                "Or supply an operator override mapping the raw headers to these fields."
                    .to_string(),
            ],
            PipelineHalt::JoinBelowThreshold { rate, .. } => vec![
                format!(
                    "Join success is {}; minimum required is {}.",
                    format_percent(*rate, 1),
                    format_percent(JOIN_SUCCESS_THRESHOLD, 0)
                ),
                "Verify both files originate from the same SIS export run.".to_string(),
                "Check that incident_number formatting is consistent (no leading zeros dropped, no extra spaces).".to_string(),
                "Identify incidents in the Incident file that have no matching row in the Consequence file.".to_string(),
            ],
            PipelineHalt::MinutesUndeterminable { .. } => vec![
                "Provide at least one of: (a) an explicit instructional minutes column, or (b) valid consequence start and end dates.".to_string(),
                "Without this, the instructional impact of the removal cannot be reported honestly.".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_halt_carries_rate_and_steps() {
        let halt = PipelineHalt::JoinBelowThreshold {
            rate: 0.9,
            matched: 18,
            total: 20,
        };
        assert_eq!(halt.join_success_rate(), Some(0.9));
        assert_eq!(halt.affected_file(), BOTH_FILES_LABEL);
        let steps = halt.remediation();
        assert_eq!(steps[0], "Join success is 90.0%; minimum required is 95%.");
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn missing_fields_are_named() {
        let halt = PipelineHalt::MissingRequiredFields {
            role: FileRole::Consequence,
            missing: vec![
                CanonicalField::ConsequenceType,
                CanonicalField::ConsequenceEndDate,
            ],
        };
        assert_eq!(halt.fields(), vec!["consequence_type", "consequence_end_date"]);
        assert_eq!(halt.affected_file(), "Consequence");
        assert_eq!(halt.join_success_rate(), None);
        assert_eq!(
            halt.to_string(),
            "required columns missing from Consequence file: consequence_type, consequence_end_date"
        );
    }
}
