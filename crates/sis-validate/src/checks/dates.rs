//! Consequence date parsing, presence and ordering.
//!
//! Missing or unparseable dates are excluded first; the ordering check then
//! runs on the rows that remain.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use sis_ingest::Dataset;
use sis_model::constants::DATE_FORMATS;
use sis_model::{CanonicalField, ExclusionReason, ExclusionRecord};
use tracing::{info, warn};

use super::{CheckOutcome, dropped_origins};
use crate::error::Result;

/// Two-digit years from this value up map to the 1900s, below it to the 2000s.
const SHORT_YEAR_PIVOT: i32 = 69;

/// Parses a date against the tolerated formats, first match wins.
///
/// Formats with a time part keep only the date. Four-digit-year formats
/// only accept years 1000..=9999 so short years fall through to `%y`,
/// where 69..=99 become 1969..=1999 and 00..=68 become 2000..=2068.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS.iter().find_map(|format| {
        let date = if format.contains("%H") {
            NaiveDateTime::parse_from_str(value, format)
                .ok()
                .map(|stamp| stamp.date())
        } else {
            NaiveDate::parse_from_str(value, format).ok()
        }?;
        if format.contains("%Y") && !(1000..=9999).contains(&date.year()) {
            return None;
        }
        if format.contains("%y") {
            return with_short_year_pivot(date);
        }
        Some(date)
    })
}

fn with_short_year_pivot(date: NaiveDate) -> Option<NaiveDate> {
    let short = date.year().rem_euclid(100);
    let century = if short >= SHORT_YEAR_PIVOT { 1900 } else { 2000 };
    date.with_year(century + short)
}

/// Excludes rows with a missing start or end date, then rows whose start
/// is after their end.
pub fn check(dataset: &Dataset) -> Result<CheckOutcome> {
    let starts = parsed_column(dataset, CanonicalField::ConsequenceStartDate)?;
    let ends = parsed_column(dataset, CanonicalField::ConsequenceEndDate)?;

    let mut exclusions = Vec::new();
    let mut flags = Vec::new();

    let present: Vec<bool> = starts
        .iter()
        .zip(&ends)
        .map(|(start, end)| start.is_some() && end.is_some())
        .collect();
    let missing = dropped_origins(dataset, &present);
    let mut current = dataset.clone();
    if !missing.is_empty() {
        let flag = format!(
            "{} consequence rows excluded: missing start or end date",
            missing.len()
        );
        warn!(rows = missing.len(), "{flag}");
        exclusions.push(ExclusionRecord::new(ExclusionReason::MissingDate, missing));
        flags.push(flag);
        current = current.retain(&present)?;
    }

    let ordered: Vec<bool> = starts
        .iter()
        .zip(&ends)
        .filter_map(|pair| match pair {
            (Some(start), Some(end)) => Some(start <= end),
            _ => None,
        })
        .collect();
    let inverted = dropped_origins(&current, &ordered);
    if !inverted.is_empty() {
        let flag = format!(
            "{} consequence rows excluded: start date is after end date",
            inverted.len()
        );
        warn!(rows = inverted.len(), "{flag}");
        exclusions.push(ExclusionRecord::new(ExclusionReason::StartAfterEnd, inverted));
        flags.push(flag);
        current = current.retain(&ordered)?;
    }

    info!(kept = current.height(), "consequence dates validated");
    Ok(CheckOutcome {
        dataset: current,
        exclusions,
        flags,
    })
}

fn parsed_column(dataset: &Dataset, field: CanonicalField) -> Result<Vec<Option<NaiveDate>>> {
    Ok(dataset
        .text_values(field.as_str())?
        .into_iter()
        .map(|value| value.and_then(parse_date))
        .collect())
}
