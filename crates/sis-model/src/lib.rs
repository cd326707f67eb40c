//! Shared domain types for discipline-data ingestion.
//!
//! Holds the canonical schema, the contract-locked constants, row exclusion
//! records, the readiness report and the structured halt. Every other crate
//! in the workspace depends on this one and nothing here does I/O.

pub mod constants;

mod consequence;
mod exclusion;
mod field;
mod halt;
mod report;

pub use consequence::ConsequenceType;
pub use exclusion::{ExclusionReason, ExclusionRecord};
pub use field::{CanonicalField, FileRole};
pub use halt::{BOTH_FILES_LABEL, PipelineHalt};
pub use report::{
    AliasSource, AppliedAlias, FileAliasMap, MinutesSummary, ReadinessReport, ReportDraft,
    SourceFile, format_percent,
};
