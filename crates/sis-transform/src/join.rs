//! Exact inner join on `incident_number`.

use std::collections::{BTreeSet, HashMap, HashSet};

use polars::prelude::*;
use sis_ingest::Dataset;
use sis_model::constants::JOIN_SUCCESS_THRESHOLD;
use sis_model::{CanonicalField, FileRole, PipelineHalt};
use tracing::{error, info};

use crate::error::{Result, TransformError};

const KEY: &str = CanonicalField::IncidentNumber.as_str();

/// Joined rows and the join statistics.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub frame: DataFrame,
    pub total_incidents: usize,
    /// Distinct incident identifiers that found at least one consequence.
    pub matched_incidents: usize,
    pub join_success_rate: f64,
    /// Trimmed identifiers of incident rows without a consequence, in file order.
    pub unmatched_incidents: Vec<String>,
}

impl JoinOutcome {
    pub fn joined_rows(&self) -> usize {
        self.frame.height()
    }

    /// Applies the fixed success threshold.
    pub fn gate(&self) -> std::result::Result<(), PipelineHalt> {
        if self.join_success_rate >= JOIN_SUCCESS_THRESHOLD {
            return Ok(());
        }
        let halt = PipelineHalt::JoinBelowThreshold {
            rate: self.join_success_rate,
            matched: self.matched_incidents,
            total: self.total_incidents,
        };
        error!("{halt}");
        Err(halt)
    }
}

/// Inner join on trimmed identifiers with exact string equality.
///
/// Blank identifiers never match. Output rows follow incident order, then
/// consequence order within one incident. `incident_number` appears once;
/// any other column name present in both inputs gets a role suffix.
pub fn exact_join(incidents: &Dataset, consequences: &Dataset) -> Result<JoinOutcome> {
    let incident_keys = trimmed_keys(incidents)?;
    let consequence_keys = trimmed_keys(consequences)?;

    let mut by_key: HashMap<&str, Vec<usize>> = HashMap::new();
    for (row, key) in consequence_keys.iter().enumerate() {
        if let Some(key) = key {
            by_key.entry(key.as_str()).or_default().push(row);
        }
    }

    let mut incident_rows = Vec::new();
    let mut consequence_rows = Vec::new();
    let mut joined_keys = Vec::new();
    let mut matched = BTreeSet::new();
    let mut unmatched_incidents = Vec::new();
    for (row, key) in incident_keys.iter().enumerate() {
        let hits = key.as_deref().and_then(|key| by_key.get(key));
        match (key, hits) {
            (Some(key), Some(hits)) => {
                matched.insert(key.as_str());
                for &hit in hits {
                    incident_rows.push(row);
                    consequence_rows.push(hit);
                    joined_keys.push(key.clone());
                }
            }
            (key, _) => unmatched_incidents.push(key.clone().unwrap_or_default()),
        }
    }

    let frame = assemble(
        incidents.frame(),
        consequences.frame(),
        &incident_rows,
        &consequence_rows,
        joined_keys,
    )?;

    let total_incidents = incidents.height();
    let matched_incidents = matched.len();
    let join_success_rate = if total_incidents == 0 {
        0.0
    } else {
        matched_incidents as f64 / total_incidents as f64
    };
    info!(
        total_incidents,
        matched_incidents,
        joined_rows = frame.height(),
        join_success_rate,
        "exact join complete"
    );

    Ok(JoinOutcome {
        frame,
        total_incidents,
        matched_incidents,
        join_success_rate,
        unmatched_incidents,
    })
}

fn trimmed_keys(dataset: &Dataset) -> Result<Vec<Option<String>>> {
    Ok(dataset
        .text_values(KEY)?
        .into_iter()
        .map(|value| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        })
        .collect())
}

fn row_index(rows: &[usize]) -> Result<IdxCa> {
    let indices = rows
        .iter()
        .map(|&row| {
            IdxSize::try_from(row).map_err(|_| TransformError::DataFrame {
                message: format!("row index {row} exceeds the index type"),
            })
        })
        .collect::<Result<Vec<IdxSize>>>()?;
    Ok(IdxCa::from_vec("row".into(), indices))
}

fn column_names(frame: &DataFrame) -> HashSet<String> {
    frame
        .get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

fn assemble(
    incidents: &DataFrame,
    consequences: &DataFrame,
    incident_rows: &[usize],
    consequence_rows: &[usize],
    joined_keys: Vec<String>,
) -> Result<DataFrame> {
    let incident_taken = incidents.take(&row_index(incident_rows)?)?;
    let consequence_taken = consequences.take(&row_index(consequence_rows)?)?;
    let incident_names = column_names(incidents);
    let consequence_names = column_names(consequences);

    let mut columns = Vec::with_capacity(incidents.width() + consequences.width());
    let mut joined_keys = Some(joined_keys);
    for column in incident_taken.get_columns() {
        let name = column.name().as_str();
        if name == KEY {
            let keys = joined_keys.take().unwrap_or_default();
            columns.push(Column::new(KEY.into(), keys));
            continue;
        }
        let mut column = column.clone();
        if consequence_names.contains(name) {
            let renamed = format!("{name}{}", FileRole::Incident.join_suffix());
            column.rename(renamed.into());
        }
        columns.push(column);
    }
    for column in consequence_taken.get_columns() {
        let name = column.name().as_str();
        if name == KEY {
            continue;
        }
        let mut column = column.clone();
        if incident_names.contains(name) {
            let renamed = format!("{name}{}", FileRole::Consequence.join_suffix());
            column.rename(renamed.into());
        }
        columns.push(column);
    }

    Ok(DataFrame::new(columns)?)
}
