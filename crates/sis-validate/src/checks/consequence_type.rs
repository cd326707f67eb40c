//! Consequence type membership in the approved code set.

use sis_ingest::Dataset;
use sis_model::{CanonicalField, ConsequenceType, ExclusionReason, ExclusionRecord};
use tracing::{info, warn};

use super::{CheckOutcome, dropped_origins};
use crate::error::Result;

/// Excludes rows whose type is not an approved code after trim and
/// upper-casing. Kept rows carry the canonical code.
pub fn check(dataset: &Dataset) -> Result<CheckOutcome> {
    let column = CanonicalField::ConsequenceType.as_str();
    let values = dataset.text_values(column)?;

    let mut keep = Vec::with_capacity(values.len());
    let mut canonical = Vec::with_capacity(values.len());
    let mut rewritten = 0usize;
    for value in &values {
        match value.and_then(ConsequenceType::parse_normalized) {
            Some(kind) => {
                if *value != Some(kind.code()) {
                    rewritten += 1;
                }
                keep.push(true);
                canonical.push(Some(kind.code().to_string()));
            }
            None => {
                keep.push(false);
                canonical.push(value.map(str::to_string));
            }
        }
    }

    let mut exclusions = Vec::new();
    let mut flags = Vec::new();
    let dropped = dropped_origins(dataset, &keep);
    if !dropped.is_empty() {
        let flag = format!(
            "{} consequence rows excluded: consequence_type not in approved enum ({})",
            dropped.len(),
            ConsequenceType::approved_codes()
        );
        warn!(rows = dropped.len(), "{flag}");
        exclusions.push(ExclusionRecord::new(
            ExclusionReason::InvalidConsequenceType,
            dropped,
        ));
        flags.push(flag);
    }
    if rewritten > 0 {
        let flag =
            format!("{rewritten} consequence_type values rewritten to their upper-case approved code");
        warn!(rows = rewritten, "{flag}");
        flags.push(flag);
    }

    let updated = if rewritten > 0 {
        dataset.with_text_column(column, canonical)?
    } else {
        dataset.clone()
    };
    let kept = updated.retain(&keep)?;
    info!(kept = kept.height(), "consequence types validated");

    Ok(CheckOutcome {
        dataset: kept,
        exclusions,
        flags,
    })
}
