//! The readiness report: an immutable record of one successful run.

use std::path::PathBuf;

use serde::Serialize;

use crate::constants::{JOIN_SUCCESS_THRESHOLD, MethodAssumption, methodology_assumptions};
use crate::exclusion::ExclusionRecord;
use crate::field::{CanonicalField, FileRole};

/// Identity of one source export as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub role: FileRole,
    /// File name without directories.
    pub name: String,
    pub path: PathBuf,
    /// First 12 hex digits of the SHA-256 of the raw bytes.
    pub sha256: String,
    /// Data rows (header excluded) before any exclusion.
    pub rows: usize,
    pub columns: usize,
}

/// Where a file's alias map came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasSource {
    Automatic,
    Override,
}

impl AliasSource {
    pub const fn label(self) -> &'static str {
        match self {
            AliasSource::Automatic => "automatic",
            AliasSource::Override => "operator override",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedAlias {
    pub raw: String,
    pub canonical: CanonicalField,
}

/// Resolutions applied to one file, headers already in canonical form
/// included, plus the headers that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAliasMap {
    pub role: FileRole,
    pub source: AliasSource,
    pub applied: Vec<AppliedAlias>,
    pub unmatched: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MinutesSummary {
    pub explicit: usize,
    pub date_derived: usize,
}

/// Everything the pipeline gathered, handed over once to build the report.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub generated_at: String,
    pub incident_file: SourceFile,
    pub consequence_file: SourceFile,
    pub consequence_rows_retained: usize,
    pub matched_incidents: usize,
    pub joined_rows: usize,
    pub join_success_rate: f64,
    pub exclusions: Vec<ExclusionRecord>,
    pub minutes: MinutesSummary,
    pub incident_aliases: FileAliasMap,
    pub consequence_aliases: FileAliasMap,
    pub flags: Vec<String>,
}

/// Immutable summary of a run. Fields are only readable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    generated_at: String,
    incident_file: SourceFile,
    consequence_file: SourceFile,
    consequence_rows_retained: usize,
    matched_incidents: usize,
    joined_rows: usize,
    join_success_rate: f64,
    join_threshold: f64,
    exclusions: Vec<ExclusionRecord>,
    minutes: MinutesSummary,
    assumptions: Vec<MethodAssumption>,
    alias_maps: Vec<FileAliasMap>,
    flags: Vec<String>,
}

impl ReadinessReport {
    pub fn new(draft: ReportDraft) -> Self {
        Self {
            generated_at: draft.generated_at,
            incident_file: draft.incident_file,
            consequence_file: draft.consequence_file,
            consequence_rows_retained: draft.consequence_rows_retained,
            matched_incidents: draft.matched_incidents,
            joined_rows: draft.joined_rows,
            join_success_rate: draft.join_success_rate,
            join_threshold: JOIN_SUCCESS_THRESHOLD,
            exclusions: draft.exclusions,
            minutes: draft.minutes,
            assumptions: methodology_assumptions(),
            alias_maps: vec![draft.incident_aliases, draft.consequence_aliases],
            flags: draft.flags,
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn incident_file(&self) -> &SourceFile {
        &self.incident_file
    }

    pub fn consequence_file(&self) -> &SourceFile {
        &self.consequence_file
    }

    pub fn incident_row_count(&self) -> usize {
        self.incident_file.rows
    }

    pub fn consequence_row_count(&self) -> usize {
        self.consequence_file.rows
    }

    pub fn consequence_rows_retained(&self) -> usize {
        self.consequence_rows_retained
    }

    pub fn matched_incidents(&self) -> usize {
        self.matched_incidents
    }

    pub fn joined_rows(&self) -> usize {
        self.joined_rows
    }

    pub fn join_success_rate(&self) -> f64 {
        self.join_success_rate
    }

    pub fn join_threshold(&self) -> f64 {
        self.join_threshold
    }

    pub fn join_passed(&self) -> bool {
        self.join_success_rate >= self.join_threshold
    }

    pub fn exclusions(&self) -> &[ExclusionRecord] {
        &self.exclusions
    }

    pub fn total_excluded(&self) -> usize {
        self.exclusions.iter().map(|record| record.count).sum()
    }

    pub fn minutes(&self) -> MinutesSummary {
        self.minutes
    }

    pub fn assumptions(&self) -> &[MethodAssumption] {
        &self.assumptions
    }

    pub fn alias_maps(&self) -> &[FileAliasMap] {
        &self.alias_maps
    }

    pub fn alias_map(&self, role: FileRole) -> Option<&FileAliasMap> {
        self.alias_maps.iter().find(|map| map.role == role)
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }
}

/// Formats a ratio as a percentage, e.g. `0.95` with 2 decimals is `95.00%`.
pub fn format_percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}
