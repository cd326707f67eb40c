//! Canonical field names and source file roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One attribute of the canonical discipline schema.
///
/// Every raw header variant known to the alias registry maps onto exactly one
/// of these. The set is closed: nothing is added at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    IncidentNumber,
    IncidentDate,
    Campus,
    Grade,
    IncidentType,
    Location,
    TimeBlock,
    Response,
    ConsequenceType,
    ConsequenceStartDate,
    ConsequenceEndDate,
    DaysRemoved,
    InstructionalMinutes,
    Race,
    Gender,
    SpecialPopulation,
}

impl CanonicalField {
    /// All canonical fields in schema order.
    pub const ALL: [CanonicalField; 16] = [
        CanonicalField::IncidentNumber,
        CanonicalField::IncidentDate,
        CanonicalField::Campus,
        CanonicalField::Grade,
        CanonicalField::IncidentType,
        CanonicalField::Location,
        CanonicalField::TimeBlock,
        CanonicalField::Response,
        CanonicalField::ConsequenceType,
        CanonicalField::ConsequenceStartDate,
        CanonicalField::ConsequenceEndDate,
        CanonicalField::DaysRemoved,
        CanonicalField::InstructionalMinutes,
        CanonicalField::Race,
        CanonicalField::Gender,
        CanonicalField::SpecialPopulation,
    ];

    /// Column name used for this field once a dataset has been renamed.
    pub const fn as_str(self) -> &'static str {
        match self {
            CanonicalField::IncidentNumber => "incident_number",
            CanonicalField::IncidentDate => "incident_date",
            CanonicalField::Campus => "campus",
            CanonicalField::Grade => "grade",
            CanonicalField::IncidentType => "incident_type",
            CanonicalField::Location => "location",
            CanonicalField::TimeBlock => "time_block",
            CanonicalField::Response => "response",
            CanonicalField::ConsequenceType => "consequence_type",
            CanonicalField::ConsequenceStartDate => "consequence_start_date",
            CanonicalField::ConsequenceEndDate => "consequence_end_date",
            CanonicalField::DaysRemoved => "days_removed",
            CanonicalField::InstructionalMinutes => "instructional_minutes",
            CanonicalField::Race => "race",
            CanonicalField::Gender => "gender",
            CanonicalField::SpecialPopulation => "special_population",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two source exports a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Incident,
    Consequence,
}

impl FileRole {
    pub const fn key(self) -> &'static str {
        match self {
            FileRole::Incident => "incident",
            FileRole::Consequence => "consequence",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FileRole::Incident => "Incident",
            FileRole::Consequence => "Consequence",
        }
    }

    /// Canonical fields that must exist after alias resolution.
    pub const fn required_fields(self) -> &'static [CanonicalField] {
        match self {
            FileRole::Incident => crate::constants::INCIDENT_REQUIRED,
            FileRole::Consequence => crate::constants::CONSEQUENCE_REQUIRED,
        }
    }

    /// Suffix appended to a non-key column whose name exists in both files.
    pub const fn join_suffix(self) -> &'static str {
        match self {
            FileRole::Incident => "_inc",
            FileRole::Consequence => "_con",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
