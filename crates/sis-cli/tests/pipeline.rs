//! End-to-end runs of the readiness pipeline over CSV fixtures.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use polars::prelude::DataFrame;
use sis_cli::pipeline::{PipelineError, PipelineInputs, PipelineOutput, run_pipeline};
use sis_map::{AliasRegistry, OperatorOverrides};
use sis_model::constants::MINUTES_COMPUTED_COLUMN;
use sis_model::{
    AliasSource, CanonicalField, ExclusionReason, FileRole, PipelineHalt, format_percent,
};
use sis_report::render_report_text;
use tempfile::TempDir;

const INCIDENT_HEADER: &str = "Incident Number,Incident Date,Building,Student ID";
const CONSEQUENCE_HEADER: &str = "Incident Number,Consequence,Start Date,End Date";

fn incident_id(n: usize) -> String {
    format!("INC{n:03}")
}

fn incidents_csv(count: usize) -> String {
    let mut lines = vec![INCIDENT_HEADER.to_string()];
    for n in 1..=count {
        lines.push(format!("{},09/06/2024,North,{}", incident_id(n), 1000 + n));
    }
    lines.join("\n") + "\n"
}

fn consequence_line(n: usize, kind: &str, start: &str, end: &str) -> String {
    format!("{},{kind},{start},{end}", incident_id(n))
}

fn consequences_csv(lines: &[String]) -> String {
    let mut all = vec![CONSEQUENCE_HEADER.to_string()];
    all.extend(lines.iter().cloned());
    all.join("\n") + "\n"
}

/// One same-day OSS per incident in `range`.
fn single_day_consequences(range: std::ops::RangeInclusive<usize>) -> Vec<String> {
    range
        .map(|n| consequence_line(n, "OSS", "09/09/2024", "09/09/2024"))
        .collect()
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn inputs(&self, incidents: impl AsRef<[u8]>, consequences: impl AsRef<[u8]>) -> PipelineInputs {
        PipelineInputs {
            incident_path: self.write("incidents.csv", incidents),
            consequence_path: self.write("consequences.csv", consequences),
            overrides: OperatorOverrides::default(),
        }
    }
}

fn run(inputs: &PipelineInputs) -> Result<PipelineOutput, PipelineError> {
    let registry = AliasRegistry::builtin().unwrap();
    run_pipeline(&registry, inputs)
}

fn halt(inputs: &PipelineInputs) -> PipelineHalt {
    match run(inputs) {
        Err(PipelineError::Halted(halt)) => halt,
        Err(other) => panic!("expected a halt, got {other}"),
        Ok(_) => panic!("expected a halt, got a report"),
    }
}

fn minutes(frame: &DataFrame) -> Vec<Option<i64>> {
    frame
        .column(MINUTES_COMPUTED_COLUMN)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn nineteen_of_twenty_passes_the_gate() {
    let fixture = Fixture::new();
    let inputs = fixture.inputs(
        incidents_csv(20),
        consequences_csv(&single_day_consequences(1..=19)),
    );

    let output = run(&inputs).unwrap();
    let report = &output.report;
    assert_eq!(report.incident_row_count(), 20);
    assert_eq!(report.matched_incidents(), 19);
    assert_eq!(report.join_success_rate(), 0.95);
    assert!(report.join_passed());
    assert_eq!(output.data.height(), 19);
    assert_eq!(report.minutes().date_derived, 19);
    assert!(minutes(&output.data).iter().all(|value| *value == Some(480)));
}

#[test]
fn eighteen_of_twenty_halts_with_the_exact_rate() {
    let fixture = Fixture::new();
    let inputs = fixture.inputs(
        incidents_csv(20),
        consequences_csv(&single_day_consequences(1..=18)),
    );

    let halt = halt(&inputs);
    assert_eq!(
        halt,
        PipelineHalt::JoinBelowThreshold {
            rate: 18.0 / 20.0,
            matched: 18,
            total: 20
        }
    );
    assert_eq!(halt.join_success_rate(), Some(0.9));
    assert_eq!(
        halt.remediation()[0],
        format!("Join success is {}; minimum required is 95%.", format_percent(0.9, 1))
    );
}

#[test]
fn unapproved_type_is_excluded_and_lowercase_is_accepted() {
    let fixture = Fixture::new();
    let mut lines = single_day_consequences(1..=20);
    lines[5] = consequence_line(6, "DETENTION", "09/09/2024", "09/09/2024");
    lines[7] = consequence_line(8, "oss", "09/09/2024", "09/09/2024");
    let inputs = fixture.inputs(incidents_csv(20), consequences_csv(&lines));

    let output = run(&inputs).unwrap();
    let report = &output.report;
    assert_eq!(report.consequence_row_count(), 20);
    assert_eq!(report.consequence_rows_retained(), 19);
    assert_eq!(report.matched_incidents(), 19);

    let exclusions = report.exclusions();
    assert_eq!(exclusions.len(), 1);
    assert_eq!(exclusions[0].reason, ExclusionReason::InvalidConsequenceType);
    assert_eq!(exclusions[0].row_indices, vec![5]);
    assert!(exclusions[0].description.contains("consequence_type"));

    let types: Vec<Option<String>> = output
        .data
        .column("consequence_type")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();
    assert!(types.iter().all(|value| value.as_deref() == Some("OSS")));
    assert!(
        report
            .flags()
            .iter()
            .any(|flag| flag == "Total rows excluded before join: 1. Join success rate reflects post-exclusion match.")
    );
}

#[test]
fn missing_and_inverted_dates_are_excluded_separately() {
    let fixture = Fixture::new();
    let mut lines = single_day_consequences(1..=20);
    lines.push(consequence_line(3, "ISS", "09/09/2024", ""));
    lines.push(consequence_line(4, "ISS", "09/12/2024", "09/10/2024"));
    let inputs = fixture.inputs(incidents_csv(20), consequences_csv(&lines));

    let output = run(&inputs).unwrap();
    let exclusions = output.report.exclusions();
    assert_eq!(exclusions.len(), 2);
    assert_eq!(exclusions[0].reason, ExclusionReason::MissingDate);
    assert_eq!(exclusions[0].row_indices, vec![20]);
    assert_eq!(exclusions[1].reason, ExclusionReason::StartAfterEnd);
    assert_eq!(exclusions[1].row_indices, vec![21]);
    assert_eq!(output.report.total_excluded(), 2);
    assert_eq!(output.data.height(), 20);
}

#[test]
fn explicit_minutes_win_over_dates() {
    let fixture = Fixture::new();
    let mut lines = vec![format!("{CONSEQUENCE_HEADER},Instructional Minutes")];
    lines.push(format!(
        "{},720",
        consequence_line(1, "ISS", "09/09/2024", "09/09/2024")
    ));
    lines.push(format!(
        "{},",
        consequence_line(2, "ISS", "09/09/2024", "09/11/2024")
    ));
    let inputs = fixture.inputs(incidents_csv(2), lines.join("\n"));

    let output = run(&inputs).unwrap();
    assert_eq!(minutes(&output.data), vec![Some(720), Some(1440)]);
    let summary = output.report.minutes();
    assert_eq!(summary.explicit, 1);
    assert_eq!(summary.date_derived, 1);
}

#[test]
fn weekday_spans_drive_derived_minutes() {
    let fixture = Fixture::new();
    let lines = vec![
        // Monday through Wednesday.
        consequence_line(1, "OSS", "09/09/2024", "09/11/2024"),
        // Friday through Monday.
        consequence_line(2, "OSS", "2024-09-13", "2024-09-16"),
    ];
    let inputs = fixture.inputs(incidents_csv(2), consequences_csv(&lines));

    let output = run(&inputs).unwrap();
    assert_eq!(minutes(&output.data), vec![Some(1440), Some(960)]);
}

#[test]
fn different_identifiers_never_match() {
    let fixture = Fixture::new();
    let incidents = format!("{INCIDENT_HEADER}\nA-1,09/06/2024,North,1\nA-2,09/06/2024,North,2\n");
    let consequences = format!(
        "{CONSEQUENCE_HEADER}\nB-1,OSS,09/06/2024,09/06/2024\nB-2,OSS,09/06/2024,09/06/2024\n"
    );
    let inputs = fixture.inputs(incidents, consequences);

    let halt = halt(&inputs);
    assert_eq!(halt.join_success_rate(), Some(0.0));
    assert!(matches!(
        halt,
        PipelineHalt::JoinBelowThreshold {
            matched: 0,
            total: 2,
            ..
        }
    ));
}

#[test]
fn byte_order_mark_does_not_hide_the_identifier_column() {
    let fixture = Fixture::new();
    let mut incidents = "\u{feff}".as_bytes().to_vec();
    incidents.extend_from_slice(incidents_csv(2).as_bytes());
    let inputs = fixture.inputs(incidents, consequences_csv(&single_day_consequences(1..=2)));

    let output = run(&inputs).unwrap();
    assert_eq!(output.report.matched_incidents(), 2);
    let applied = &output.report.alias_map(FileRole::Incident).unwrap().applied;
    assert!(
        applied
            .iter()
            .any(|alias| alias.raw == "Incident Number"
                && alias.canonical == CanonicalField::IncidentNumber)
    );
}

#[test]
fn missing_file_halts_naming_it() {
    let fixture = Fixture::new();
    let inputs = PipelineInputs {
        incident_path: fixture.write("incidents.csv", incidents_csv(2)),
        consequence_path: fixture.dir.path().join("absent.csv"),
        overrides: OperatorOverrides::default(),
    };

    match halt(&inputs) {
        PipelineHalt::FileNotFound { role, path } => {
            assert_eq!(role, FileRole::Consequence);
            assert_eq!(path, fixture.dir.path().join("absent.csv"));
        }
        other => panic!("unexpected halt {other:?}"),
    }
}

#[test]
fn ragged_file_is_not_parseable() {
    let fixture = Fixture::new();
    let consequences = format!("{CONSEQUENCE_HEADER}\nINC001,OSS,09/09/2024,09/09/2024,extra\n");
    let inputs = fixture.inputs(incidents_csv(1), consequences);

    assert!(matches!(
        halt(&inputs),
        PipelineHalt::NotParseable {
            role: FileRole::Consequence,
            ..
        }
    ));
}

#[test]
fn missing_required_column_halts_naming_it() {
    let fixture = Fixture::new();
    let consequences = "Incident Number,Consequence,Start Date\nINC001,OSS,09/09/2024\n";
    let inputs = fixture.inputs(incidents_csv(1), consequences);

    assert_eq!(
        halt(&inputs),
        PipelineHalt::MissingRequiredFields {
            role: FileRole::Consequence,
            missing: vec![CanonicalField::ConsequenceEndDate],
        }
    );
}

#[test]
fn repeated_runs_are_identical() {
    let fixture = Fixture::new();
    let mut lines = single_day_consequences(1..=20);
    lines[2] = consequence_line(3, "SUSPENSION", "09/09/2024", "09/13/2024");
    lines.push(consequence_line(4, "DAEP", "09/10/2024", "09/20/2024"));
    let inputs = fixture.inputs(incidents_csv(20), consequences_csv(&lines));

    let first = run(&inputs).unwrap();
    let second = run(&inputs).unwrap();
    assert_eq!(first.report.joined_rows(), second.report.joined_rows());
    assert_eq!(
        first.report.join_success_rate(),
        second.report.join_success_rate()
    );
    assert_eq!(first.report.exclusions(), second.report.exclusions());
    assert_eq!(first.report.flags(), second.report.flags());
    assert_eq!(minutes(&first.data), minutes(&second.data));
}

#[test]
fn every_flag_appears_in_the_rendered_report() {
    let fixture = Fixture::new();
    let mut lines = single_day_consequences(1..=20);
    lines[0] = consequence_line(1, " iss ", "09/09/2024", "09/09/2024");
    lines.push(consequence_line(2, "DETENTION", "09/09/2024", "09/09/2024"));
    let inputs = fixture.inputs(incidents_csv(20), consequences_csv(&lines));

    let output = run(&inputs).unwrap();
    let report = &output.report;
    assert!(
        report
            .flags()
            .iter()
            .any(|flag| flag.contains("'Student ID'"))
    );
    assert!(
        report
            .flags()
            .iter()
            .any(|flag| flag == "Mechanical normalize applied to column 'Consequence' in Consequence file")
    );
    let text = render_report_text(report);
    for flag in report.flags() {
        assert!(text.contains(flag.as_str()), "flag missing from report: {flag}");
    }
}

#[test]
fn override_replaces_detection_for_one_file() {
    let fixture = Fixture::new();
    let consequences = "Incident Number,Disc Action,Began,Ended\nINC001,OSS,09/09/2024,09/10/2024\n";
    let mut inputs = fixture.inputs(incidents_csv(1), consequences);
    let map = BTreeMap::from([
        ("Incident Number".to_string(), CanonicalField::IncidentNumber),
        ("Disc Action".to_string(), CanonicalField::ConsequenceType),
        ("Began".to_string(), CanonicalField::ConsequenceStartDate),
        ("Ended".to_string(), CanonicalField::ConsequenceEndDate),
        ("Ghost".to_string(), CanonicalField::DaysRemoved),
    ]);
    inputs.overrides = OperatorOverrides {
        incident: None,
        consequence: Some(map),
    };

    let output = run(&inputs).unwrap();
    let report = &output.report;
    assert_eq!(
        report.alias_map(FileRole::Consequence).unwrap().source,
        AliasSource::Override
    );
    assert_eq!(
        report.alias_map(FileRole::Incident).unwrap().source,
        AliasSource::Automatic
    );
    assert!(report.flags().iter().any(
        |flag| flag == "Operator override replaced automatic alias detection for Consequence file"
    ));
    assert!(
        report
            .flags()
            .iter()
            .any(|flag| flag == "Override entry 'Ghost' names no column in Consequence file")
    );
    assert_eq!(minutes(&output.data), vec![Some(960)]);
}

#[test]
fn duplicate_resolution_keeps_the_first_column() {
    let fixture = Fixture::new();
    let incidents = "Incident Number,Incident Date,School,Building\nINC001,09/06/2024,North,Annex\n";
    let inputs = fixture.inputs(incidents, consequences_csv(&single_day_consequences(1..=1)));

    let output = run(&inputs).unwrap();
    let campus: Vec<Option<&str>> = output
        .data
        .column("campus")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(campus, vec![Some("North")]);
    assert!(output.data.column("Building").is_ok());
    assert!(output.report.flags().iter().any(|flag| flag
        == "Columns 'School' and 'Building' in Incident file both resolve to 'campus'; 'Building' keeps its original name"));
}

#[test]
fn repeated_unmapped_header_still_produces_a_report() {
    let fixture = Fixture::new();
    let incidents = "Incident Number,Incident Date,Building,Notes,Notes\nINC001,09/06/2024,North,late,parent called\n";
    let inputs = fixture.inputs(incidents, consequences_csv(&single_day_consequences(1..=1)));

    let output = run(&inputs).unwrap();
    assert_eq!(output.report.matched_incidents(), 1);
    let notes: Vec<Option<&str>> = output
        .data
        .column("Notes.1")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(notes, vec![Some("parent called")]);
    assert_eq!(
        output.report.alias_map(FileRole::Incident).unwrap().unmatched,
        vec!["Notes".to_string(), "Notes.1".to_string()]
    );
    assert!(output.report.flags().iter().any(|flag| flag
        == "Header 'Notes' in Incident file repeats an earlier column and was renamed to 'Notes.1'"));
}

#[test]
fn missing_file_is_reported_before_the_other_is_parsed() {
    let fixture = Fixture::new();
    let inputs = PipelineInputs {
        incident_path: fixture.write(
            "incidents.csv",
            format!("{INCIDENT_HEADER}\nINC001,09/06/2024,North,1,extra\n"),
        ),
        consequence_path: fixture.dir.path().join("absent.csv"),
        overrides: OperatorOverrides::default(),
    };

    assert!(matches!(
        halt(&inputs),
        PipelineHalt::FileNotFound {
            role: FileRole::Consequence,
            ..
        }
    ));
}

#[test]
fn canonical_headers_are_listed_in_the_alias_map() {
    let fixture = Fixture::new();
    let consequences = "incident_number,consequence_type,consequence_start_date,consequence_end_date\n\
                        INC001,OSS,09/09/2024,09/09/2024\n";
    let inputs = fixture.inputs(incidents_csv(1), consequences);

    let output = run(&inputs).unwrap();
    let map = output.report.alias_map(FileRole::Consequence).unwrap();
    let applied: Vec<(&str, CanonicalField)> = map
        .applied
        .iter()
        .map(|alias| (alias.raw.as_str(), alias.canonical))
        .collect();
    assert_eq!(
        applied,
        vec![
            ("incident_number", CanonicalField::IncidentNumber),
            ("consequence_type", CanonicalField::ConsequenceType),
            ("consequence_start_date", CanonicalField::ConsequenceStartDate),
            ("consequence_end_date", CanonicalField::ConsequenceEndDate),
        ]
    );
    assert!(map.unmatched.is_empty());

    let text = render_report_text(&output.report);
    assert!(text.contains("'incident_number' -> 'incident_number'"));
    assert!(!text.contains("(no columns resolved)"));
}
