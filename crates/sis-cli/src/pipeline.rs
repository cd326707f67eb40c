//! Readiness pipeline with explicit stages.
//!
//! The stages run in this order and each one sees the complete output of
//! the previous one:
//! 1. **Load**: read both exports, halting on a missing or malformed file
//! 2. **Normalize**: strip byte-order marks, invisible characters, padding
//! 3. **Alias**: rename resolved headers to canonical fields
//! 4. **Required**: halt when a required canonical field is absent
//! 5. **Consequence type**: exclude rows outside the approved codes
//! 6. **Dates**: exclude rows with missing or inverted dates
//! 7. **Join**: exact join on `incident_number`, then the success gate
//! 8. **Minutes**: derive instructional minutes per joined row
//! 9. **Report**: assemble the immutable readiness report
//!
//! A halt at any stage discards everything built so far.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use polars::prelude::DataFrame;
use thiserror::Error;
use tracing::{debug, error, info, info_span, trace, warn};

use sis_ingest::{
    Dataset, HeaderFixKind, IngestError, LoadedSource, load_source, mechanical_normalize,
};
use sis_map::{
    AliasRegistry, ColumnResolver, OperatorOverrides, ResolvedColumns, resolve_with_override,
    unmatched_columns,
};
use sis_model::{
    AliasSource, AppliedAlias, ExclusionRecord, FileAliasMap, FileRole, PipelineHalt,
    ReadinessReport, ReportDraft,
};
use sis_transform::{TransformError, derive_minutes, exact_join};
use sis_validate::ValidateError;
use sis_validate::checks::{consequence_type, dates, required};

use crate::logging::redact_value;

/// Timestamp layout of the report's generated field.
const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Everything one run needs besides the registry.
#[derive(Debug, Clone)]
pub struct PipelineInputs {
    pub incident_path: PathBuf,
    pub consequence_path: PathBuf,
    pub overrides: OperatorOverrides,
}

/// A successful run: the joined rows and the report describing them.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub data: DataFrame,
    pub report: ReadinessReport,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A contract condition stopped the run.
    #[error(transparent)]
    Halted(#[from] PipelineHalt),

    /// Fault unrelated to the input contract.
    #[error("internal pipeline error: {0}")]
    Internal(String),
}

impl From<IngestError> for PipelineError {
    fn from(err: IngestError) -> Self {
        PipelineError::Internal(err.to_string())
    }
}

impl From<ValidateError> for PipelineError {
    fn from(err: ValidateError) -> Self {
        PipelineError::Internal(err.to_string())
    }
}

impl From<TransformError> for PipelineError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Halted(halt) => PipelineError::Halted(halt),
            other => PipelineError::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Runs every stage over one incident/consequence pair.
///
/// The registry is only read. Each run works on its own copies of the data,
/// so independent pairs can be processed concurrently.
pub fn run_pipeline(registry: &AliasRegistry, inputs: &PipelineInputs) -> Result<PipelineOutput> {
    let run_start = Instant::now();
    let mut flags = Vec::new();

    // Stage 1: Load
    let (incident_source, consequence_source) = info_span!("load").in_scope(|| -> Result<_> {
        ensure_exists(&inputs.incident_path, FileRole::Incident)?;
        ensure_exists(&inputs.consequence_path, FileRole::Consequence)?;
        let incident = load_stage(&inputs.incident_path, FileRole::Incident, &mut flags)?;
        let consequence = load_stage(&inputs.consequence_path, FileRole::Consequence, &mut flags)?;
        Ok((incident, consequence))
    })?;

    // Stage 2: Normalize
    let (incidents, consequences) = info_span!("normalize").in_scope(|| -> Result<_> {
        let incidents = normalize_stage(&incident_source.dataset, &mut flags)?;
        let consequences = normalize_stage(&consequence_source.dataset, &mut flags)?;
        Ok((incidents, consequences))
    })?;

    // Stage 3: Alias
    let (incidents, incident_aliases, consequences, consequence_aliases) =
        info_span!("alias").in_scope(|| -> Result<_> {
            let (incidents, incident_aliases) =
                alias_stage(registry, &incidents, &inputs.overrides, &mut flags)?;
            let (consequences, consequence_aliases) =
                alias_stage(registry, &consequences, &inputs.overrides, &mut flags)?;
            Ok((incidents, incident_aliases, consequences, consequence_aliases))
        })?;

    // Stage 4: Required fields
    info_span!("required").in_scope(|| -> Result<()> {
        required::check(&incidents)?;
        required::check(&consequences)?;
        Ok(())
    })?;

    // Stages 5-6: Row exclusions
    let mut exclusions: Vec<ExclusionRecord> = Vec::new();
    let consequences = info_span!("consequence_type").in_scope(|| -> Result<Dataset> {
        let outcome = consequence_type::check(&consequences)?;
        exclusions.extend(outcome.exclusions);
        flags.extend(outcome.flags);
        Ok(outcome.dataset)
    })?;
    let consequences = info_span!("dates").in_scope(|| -> Result<Dataset> {
        let outcome = dates::check(&consequences)?;
        exclusions.extend(outcome.exclusions);
        flags.extend(outcome.flags);
        Ok(outcome.dataset)
    })?;

    // Stage 7: Join
    let joined = info_span!("join").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let outcome = exact_join(&incidents, &consequences)?;
        for key in &outcome.unmatched_incidents {
            trace!(incident_number = redact_value(key), "incident has no consequence");
        }
        outcome.gate()?;
        info!(
            join_success_rate = outcome.join_success_rate,
            duration_ms = start.elapsed().as_millis(),
            "join gate passed"
        );
        Ok(outcome)
    })?;

    let total_excluded: usize = exclusions.iter().map(|record| record.count).sum();
    if total_excluded > 0 {
        push_flag(
            &mut flags,
            format!(
                "Total rows excluded before join: {total_excluded}. \
                 Join success rate reflects post-exclusion match."
            ),
        );
    }

    // Stage 8: Minutes
    let minutes = info_span!("minutes")
        .in_scope(|| derive_minutes(&joined.frame, joined.join_success_rate))?;

    // Stage 9: Report
    let report = ReadinessReport::new(ReportDraft {
        generated_at: Local::now().format(GENERATED_AT_FORMAT).to_string(),
        incident_file: incident_source.source,
        consequence_file: consequence_source.source,
        consequence_rows_retained: consequences.height(),
        matched_incidents: joined.matched_incidents,
        joined_rows: joined.joined_rows(),
        join_success_rate: joined.join_success_rate,
        exclusions,
        minutes: minutes.summary,
        incident_aliases,
        consequence_aliases,
        flags,
    });
    info!(
        joined_rows = report.joined_rows(),
        flags = report.flags().len(),
        duration_ms = run_start.elapsed().as_millis(),
        "readiness report assembled"
    );

    Ok(PipelineOutput {
        data: minutes.frame,
        report,
    })
}

fn push_flag(flags: &mut Vec<String>, flag: String) {
    warn!("{flag}");
    flags.push(flag);
}

/// Both files are checked for existence before either is parsed.
fn ensure_exists(path: &Path, role: FileRole) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    let halt = PipelineHalt::FileNotFound {
        role,
        path: path.to_path_buf(),
    };
    error!("{halt}");
    Err(PipelineError::Halted(halt))
}

fn load_stage(path: &Path, role: FileRole, flags: &mut Vec<String>) -> Result<LoadedSource> {
    let loaded = load_source(path, role).map_err(|err| load_halt(err, path, role))?;
    for fix in &loaded.header_fixes {
        let flag = match fix.kind {
            HeaderFixKind::Cleaned => format!(
                "Header '{}' in {role} file cleaned to '{}'",
                fix.raw.escape_debug(),
                fix.cleaned
            ),
            HeaderFixKind::Deduplicated => format!(
                "Header '{}' in {role} file repeats an earlier column and was renamed to '{}'",
                fix.raw.escape_debug(),
                fix.cleaned
            ),
        };
        push_flag(flags, flag);
    }
    Ok(loaded)
}

fn load_halt(err: IngestError, path: &Path, role: FileRole) -> PipelineError {
    let halt = match err {
        IngestError::FileNotFound { .. } => PipelineHalt::FileNotFound {
            role,
            path: path.to_path_buf(),
        },
        err if err.is_unparseable() => PipelineHalt::NotParseable {
            role,
            path: path.to_path_buf(),
            message: err.to_string(),
        },
        other => return other.into(),
    };
    error!("{halt}");
    PipelineError::Halted(halt)
}

fn normalize_stage(dataset: &Dataset, flags: &mut Vec<String>) -> Result<Dataset> {
    let outcome = mechanical_normalize(dataset)?;
    for column in &outcome.changed_columns {
        push_flag(
            flags,
            format!(
                "Mechanical normalize applied to column '{column}' in {} file",
                dataset.role()
            ),
        );
    }
    Ok(outcome.dataset)
}

/// Resolves headers (automatically or by override) and renames them.
///
/// When two headers resolve to one canonical field, the column that already
/// holds the name or comes first in file order wins; the other keeps its
/// raw name and is flagged. Headers already in canonical form are recorded
/// in the alias map without a rename.
fn alias_stage(
    registry: &AliasRegistry,
    dataset: &Dataset,
    overrides: &OperatorOverrides,
    flags: &mut Vec<String>,
) -> Result<(Dataset, FileAliasMap)> {
    let role = dataset.role();
    let headers = dataset.headers();

    let (resolved, source) = match overrides.for_role(role) {
        Some(map) => {
            push_flag(
                flags,
                format!("Operator override replaced automatic alias detection for {role} file"),
            );
            let resolution = resolve_with_override(&headers, map, role.label());
            for key in &resolution.missing {
                push_flag(
                    flags,
                    format!("Override entry '{key}' names no column in {role} file"),
                );
            }
            (resolution.resolved, AliasSource::Override)
        }
        None => (
            ColumnResolver::new(registry).resolve(&headers, role.label()),
            AliasSource::Automatic,
        ),
    };
    let unmatched = unmatched_columns(&headers, &resolved);

    let applied = plan_aliases(&headers, &resolved, role, flags);
    let renames: Vec<(String, String)> = applied
        .iter()
        .filter(|alias| alias.raw != alias.canonical.as_str())
        .map(|alias| (alias.raw.clone(), alias.canonical.as_str().to_string()))
        .collect();
    if !unmatched.is_empty() {
        let quoted: Vec<String> = unmatched.iter().map(|raw| format!("'{raw}'")).collect();
        push_flag(
            flags,
            format!(
                "{} column(s) in {role} file matched no alias and were left as-is: {}",
                unmatched.len(),
                quoted.join(", ")
            ),
        );
    }

    let renamed = dataset.rename_columns(&renames)?;
    info!(
        file = %role,
        source = source.label(),
        resolved = applied.len(),
        renamed = renames.len(),
        unmatched = unmatched.len(),
        "aliases applied"
    );

    Ok((
        renamed,
        FileAliasMap {
            role,
            source,
            applied,
            unmatched,
        },
    ))
}

fn plan_aliases(
    headers: &[String],
    resolved: &ResolvedColumns,
    role: FileRole,
    flags: &mut Vec<String>,
) -> Vec<AppliedAlias> {
    // Target name -> the column that ends up holding it.
    let mut holders: HashMap<String, String> = headers
        .iter()
        .filter(|header| match resolved.get(header) {
            Some(canonical) => canonical.as_str() == header.as_str(),
            None => true,
        })
        .map(|header| (header.clone(), header.clone()))
        .collect();

    let mut applied = Vec::new();
    for (raw, canonical) in resolved.iter() {
        let target = canonical.as_str();
        if raw == target {
            applied.push(AppliedAlias {
                raw: raw.to_string(),
                canonical,
            });
            continue;
        }
        if let Some(holder) = holders.get(target) {
            push_flag(
                flags,
                format!(
                    "Columns '{holder}' and '{raw}' in {role} file both resolve to '{target}'; \
                     '{raw}' keeps its original name"
                ),
            );
            continue;
        }
        debug!(file = %role, raw, canonical = target, "rename planned");
        holders.insert(target.to_string(), raw.to_string());
        applied.push(AppliedAlias {
            raw: raw.to_string(),
            canonical,
        });
    }
    applied
}
