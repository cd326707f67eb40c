//! Contract-locked constants.
//!
//! These values are part of the ingestion contract and are compiled in. They
//! are deliberately not exposed through configuration.

use serde::Serialize;

use crate::field::CanonicalField;

/// Instructional minutes counted for one removed school day.
pub const MINUTES_PER_DAY: i64 = 480;

/// Minimum share of incident rows that must find a consequence row.
pub const JOIN_SUCCESS_THRESHOLD: f64 = 0.95;

/// Name of the derived column appended to every joined row.
pub const MINUTES_COMPUTED_COLUMN: &str = "instructional_minutes_computed";

pub const INCIDENT_REQUIRED: &[CanonicalField] = &[
    CanonicalField::IncidentNumber,
    CanonicalField::IncidentDate,
    CanonicalField::Campus,
];

pub const CONSEQUENCE_REQUIRED: &[CanonicalField] = &[
    CanonicalField::IncidentNumber,
    CanonicalField::ConsequenceType,
    CanonicalField::ConsequenceStartDate,
    CanonicalField::ConsequenceEndDate,
];

/// Date layouts accepted for consequence dates, tried in order.
pub const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%m/%d/%y",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// One fixed assumption of the instructional-minutes method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodAssumption {
    pub name: &'static str,
    pub value: String,
}

/// Assumptions printed with every readiness report.
pub fn methodology_assumptions() -> Vec<MethodAssumption> {
    vec![
        MethodAssumption {
            name: "minutes_per_day",
            value: MINUTES_PER_DAY.to_string(),
        },
        MethodAssumption {
            name: "weekends",
            value: "excluded".to_string(),
        },
        MethodAssumption {
            name: "counting_rule",
            value: "inclusive (start and end dates both count)".to_string(),
        },
        MethodAssumption {
            name: "partial_days",
            value: format!(
                "not inferred; single-date removal = 1 full day ({MINUTES_PER_DAY} min)"
            ),
        },
    ]
}
