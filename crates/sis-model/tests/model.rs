#![allow(missing_docs)]

use std::path::PathBuf;

use sis_model::{
    AliasSource, AppliedAlias, CanonicalField, ConsequenceType, ExclusionReason, ExclusionRecord,
    FileAliasMap, FileRole, MinutesSummary, ReadinessReport, ReportDraft, SourceFile,
};

fn source(role: FileRole, name: &str, rows: usize) -> SourceFile {
    SourceFile {
        role,
        name: name.to_string(),
        path: PathBuf::from("/exports").join(name),
        sha256: "0123456789ab".to_string(),
        rows,
        columns: 3,
    }
}

fn alias_map(role: FileRole) -> FileAliasMap {
    FileAliasMap {
        role,
        source: AliasSource::Automatic,
        applied: vec![AppliedAlias {
            raw: "Incident Number".to_string(),
            canonical: CanonicalField::IncidentNumber,
        }],
        unmatched: Vec::new(),
    }
}

fn sample_report() -> ReadinessReport {
    ReadinessReport::new(ReportDraft {
        generated_at: "2024-09-20T10:00:00".to_string(),
        incident_file: source(FileRole::Incident, "incidents.csv", 20),
        consequence_file: source(FileRole::Consequence, "consequences.csv", 21),
        consequence_rows_retained: 19,
        matched_incidents: 19,
        joined_rows: 19,
        join_success_rate: 0.95,
        exclusions: vec![
            ExclusionRecord::new(ExclusionReason::InvalidConsequenceType, vec![4]),
            ExclusionRecord::new(ExclusionReason::MissingDate, vec![7]),
        ],
        minutes: MinutesSummary {
            explicit: 1,
            date_derived: 18,
        },
        incident_aliases: alias_map(FileRole::Incident),
        consequence_aliases: alias_map(FileRole::Consequence),
        flags: vec!["1 consequence rows excluded: missing start or end date".to_string()],
    })
}

#[test]
fn test_report_derived_values() {
    let report = sample_report();
    assert_eq!(report.incident_row_count(), 20);
    assert_eq!(report.consequence_row_count(), 21);
    assert_eq!(report.total_excluded(), 2);
    assert!(report.join_passed());
    assert_eq!(report.join_threshold(), 0.95);
    assert_eq!(report.assumptions().len(), 4);
    assert_eq!(
        report
            .alias_map(FileRole::Consequence)
            .map(|map| map.role),
        Some(FileRole::Consequence)
    );
}

#[test]
fn test_report_serializes_contract_fields() {
    let value = serde_json::to_value(sample_report()).unwrap();
    assert_eq!(value["join_threshold"], 0.95);
    assert_eq!(value["exclusions"][0]["reason"], "invalid_consequence_type");
    assert_eq!(value["exclusions"][1]["row_indices"][0], 7);
    assert_eq!(value["alias_maps"][0]["applied"][0]["canonical"], "incident_number");
    assert_eq!(value["assumptions"][0]["name"], "minutes_per_day");
    assert_eq!(value["assumptions"][0]["value"], "480");
}

#[test]
fn test_invalid_type_reason_names_the_field() {
    let record = ExclusionRecord::new(ExclusionReason::InvalidConsequenceType, vec![0, 3]);
    assert!(record.description.contains("consequence_type"));
    assert_eq!(record.count, 2);
}

#[test]
fn test_consequence_type_parsing() {
    assert_eq!(ConsequenceType::parse_normalized(" oss "), Some(ConsequenceType::Oss));
    assert_eq!(
        ConsequenceType::parse_normalized("local_only"),
        Some(ConsequenceType::LocalOnly)
    );
    assert_eq!(ConsequenceType::parse_normalized("DETENTION"), None);
    assert_eq!(ConsequenceType::parse_normalized(""), None);
    assert_eq!(
        ConsequenceType::approved_codes(),
        "ISS, OSS, DAEP, JJAEP, EXPULSION, LOCAL_ONLY"
    );
}

#[test]
fn test_required_fields_per_role() {
    assert_eq!(
        FileRole::Incident.required_fields(),
        &[
            CanonicalField::IncidentNumber,
            CanonicalField::IncidentDate,
            CanonicalField::Campus
        ]
    );
    assert_eq!(FileRole::Consequence.required_fields().len(), 4);
}
