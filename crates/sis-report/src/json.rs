//! JSON rendering.

use serde::Serialize;
use sis_model::{PipelineHalt, ReadinessReport};

/// Flat, serializable view of a halt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HaltSummary {
    pub kind: &'static str,
    pub reason: String,
    pub affected_file: String,
    pub fields: Vec<String>,
    pub join_success_rate: Option<f64>,
    pub remediation: Vec<String>,
}

impl HaltSummary {
    pub fn from_halt(halt: &PipelineHalt) -> Self {
        let kind = match halt {
            PipelineHalt::FileNotFound { .. } => "file_not_found",
            PipelineHalt::NotParseable { .. } => "not_parseable",
            PipelineHalt::MissingRequiredFields { .. } => "missing_required_fields",
            PipelineHalt::JoinBelowThreshold { .. } => "join_below_threshold",
            PipelineHalt::MinutesUndeterminable { .. } => "minutes_undeterminable",
        };
        Self {
            kind,
            reason: halt.reason(),
            affected_file: halt.affected_file(),
            fields: halt.fields(),
            join_success_rate: halt.join_success_rate(),
            remediation: halt.remediation(),
        }
    }
}

pub fn render_report_json(report: &ReadinessReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_halt_json(halt: &PipelineHalt) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&HaltSummary::from_halt(halt))
}
