//! Instructional minutes lost per joined row.

use chrono::{Datelike, NaiveDate, Weekday};
use polars::prelude::*;
use sis_model::constants::{MINUTES_COMPUTED_COLUMN, MINUTES_PER_DAY};
use sis_model::{CanonicalField, FileRole, MinutesSummary, PipelineHalt};
use sis_validate::parse_date;
use tracing::{error, info};

use crate::error::Result;

/// Weekdays from `start` to `end`, both inclusive. Zero when `start > end`.
pub fn count_instructional_days(start: NaiveDate, end: NaiveDate) -> i64 {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as i64
}

/// Explicit minutes when usable: numeric, truncated toward zero, above zero.
pub fn explicit_minutes(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let minutes = value.trunc() as i64;
    (minutes > 0).then_some(minutes)
}

/// The joined frame with the computed minutes column appended.
#[derive(Debug, Clone)]
pub struct MinutesOutcome {
    pub frame: DataFrame,
    pub summary: MinutesSummary,
}

/// Applies explicit > date-derived per row. A row with neither halts.
pub fn derive_minutes(joined: &DataFrame, join_success_rate: f64) -> Result<MinutesOutcome> {
    let explicit = joined_text(joined, CanonicalField::InstructionalMinutes)?;
    let starts = joined_text(joined, CanonicalField::ConsequenceStartDate)?;
    let ends = joined_text(joined, CanonicalField::ConsequenceEndDate)?;

    let mut summary = MinutesSummary::default();
    let mut computed = Vec::with_capacity(joined.height());
    for row in 0..joined.height() {
        let given = explicit
            .as_ref()
            .and_then(|values| values[row])
            .and_then(explicit_minutes);
        if let Some(minutes) = given {
            summary.explicit += 1;
            computed.push(minutes);
            continue;
        }

        let start = cell(&starts, row).and_then(parse_date);
        let end = cell(&ends, row).and_then(parse_date);
        if let (Some(start), Some(end)) = (start, end) {
            summary.date_derived += 1;
            computed.push(count_instructional_days(start, end) * MINUTES_PER_DAY);
            continue;
        }

        let halt = PipelineHalt::MinutesUndeterminable {
            row,
            join_success_rate,
        };
        error!("{halt}");
        return Err(halt.into());
    }

    let mut frame = joined.clone();
    frame.with_column(Series::new(MINUTES_COMPUTED_COLUMN.into(), computed))?;
    info!(
        explicit = summary.explicit,
        date_derived = summary.date_derived,
        "instructional minutes derived"
    );
    Ok(MinutesOutcome { frame, summary })
}

fn cell<'a>(values: &Option<Vec<Option<&'a str>>>, row: usize) -> Option<&'a str> {
    values.as_ref().and_then(|values| values[row])
}

/// Reads a field from the joined frame. If the name collided in the join the
/// consequence-side column is preferred over the incident-side one.
fn joined_text(frame: &DataFrame, field: CanonicalField) -> Result<Option<Vec<Option<&str>>>> {
    let base = field.as_str();
    let candidates = [
        base.to_string(),
        format!("{base}{}", FileRole::Consequence.join_suffix()),
        format!("{base}{}", FileRole::Incident.join_suffix()),
    ];
    let names = frame.get_column_names();
    let Some(name) = candidates
        .iter()
        .find(|candidate| names.iter().any(|name| name.as_str() == candidate.as_str()))
    else {
        return Ok(None);
    };
    let values = frame.column(name)?.str()?.into_iter().collect();
    Ok(Some(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn instructional_day_counts() {
        // 2024-09-09 is a Monday.
        assert_eq!(count_instructional_days(day(2024, 9, 9), day(2024, 9, 9)), 1);
        assert_eq!(count_instructional_days(day(2024, 9, 14), day(2024, 9, 14)), 0);
        assert_eq!(count_instructional_days(day(2024, 9, 9), day(2024, 9, 13)), 5);
        assert_eq!(count_instructional_days(day(2024, 9, 9), day(2024, 9, 11)), 3);
        assert_eq!(count_instructional_days(day(2024, 9, 13), day(2024, 9, 16)), 2);
        assert_eq!(count_instructional_days(day(2024, 9, 13), day(2024, 9, 9)), 0);
        assert_eq!(count_instructional_days(day(2024, 9, 9), day(2024, 9, 22)), 10);
    }

    #[test]
    fn explicit_minute_parsing() {
        assert_eq!(explicit_minutes("720"), Some(720));
        assert_eq!(explicit_minutes(" 720.9 "), Some(720));
        assert_eq!(explicit_minutes("0"), None);
        assert_eq!(explicit_minutes("0.5"), None);
        assert_eq!(explicit_minutes("-30"), None);
        assert_eq!(explicit_minutes("NaN"), None);
        assert_eq!(explicit_minutes("inf"), None);
        assert_eq!(explicit_minutes("half day"), None);
        assert_eq!(explicit_minutes(""), None);
    }

    fn joined(columns: Vec<Column>) -> DataFrame {
        DataFrame::new(columns).unwrap()
    }

    fn computed(frame: &DataFrame) -> Vec<Option<i64>> {
        frame
            .column(MINUTES_COMPUTED_COLUMN)
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn explicit_value_wins_over_dates() {
        let frame = joined(vec![
            Column::new("incident_number".into(), ["A", "B"]),
            Column::new("instructional_minutes".into(), [Some("720"), None]),
            Column::new(
                "consequence_start_date".into(),
                [Some("2024-09-09"), Some("2024-09-09")],
            ),
            Column::new(
                "consequence_end_date".into(),
                [Some("2024-09-11"), Some("2024-09-11")],
            ),
        ]);

        let outcome = derive_minutes(&frame, 1.0).unwrap();
        assert_eq!(computed(&outcome.frame), vec![Some(720), Some(1440)]);
        assert_eq!(
            outcome.summary,
            MinutesSummary {
                explicit: 1,
                date_derived: 1
            }
        );
    }

    #[test]
    fn consequence_side_minutes_are_preferred_after_a_collision() {
        let frame = joined(vec![
            Column::new("instructional_minutes_inc".into(), [Some("100")]),
            Column::new("instructional_minutes_con".into(), [Some("200")]),
            Column::new("consequence_start_date".into(), [Some("2024-09-09")]),
            Column::new("consequence_end_date".into(), [Some("2024-09-09")]),
        ]);

        let outcome = derive_minutes(&frame, 1.0).unwrap();
        assert_eq!(computed(&outcome.frame), vec![Some(200)]);
    }

    #[test]
    fn row_without_minutes_or_dates_halts() {
        let frame = joined(vec![
            Column::new("incident_number".into(), ["A", "B"]),
            Column::new(
                "consequence_start_date".into(),
                [Some("2024-09-09"), Some("unknown")],
            ),
            Column::new(
                "consequence_end_date".into(),
                [Some("2024-09-09"), Some("2024-09-09")],
            ),
        ]);

        let err = derive_minutes(&frame, 0.97).unwrap_err();
        match err {
            crate::TransformError::Halted(halt) => {
                assert_eq!(
                    halt,
                    PipelineHalt::MinutesUndeterminable {
                        row: 1,
                        join_success_rate: 0.97
                    }
                );
                assert_eq!(halt.join_success_rate(), Some(0.97));
            }
            other => panic!("expected a halt, got {other:?}"),
        }
    }
}
