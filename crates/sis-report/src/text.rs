//! Fixed-layout plain-text rendering.

use sis_model::constants::MINUTES_PER_DAY;
use sis_model::{FileAliasMap, PipelineHalt, ReadinessReport, SourceFile, format_percent};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Renders the readiness report. Every flag and exclusion is printed.
pub fn render_report_text(report: &ReadinessReport) -> String {
    let mut lines = vec![
        rule(),
        "DATA READINESS REPORT".to_string(),
        rule(),
        format!("Generated       : {}", report.generated_at()),
        String::new(),
        "FILES".to_string(),
    ];
    push_source(&mut lines, "Incident File", report.incident_file());
    push_source(&mut lines, "Consequence  ", report.consequence_file());

    lines.extend([
        String::new(),
        "ROW COUNTS".to_string(),
        format!("  Incident rows : {}", report.incident_row_count()),
        format!("  Consequence   : {}", report.consequence_row_count()),
        format!("  Retained      : {}", report.consequence_rows_retained()),
        format!("  Joined rows   : {}", report.joined_rows()),
        String::new(),
        "JOIN".to_string(),
        format!("  Matched       : {}", report.matched_incidents()),
        format!(
            "  Join success  : {}",
            format_percent(report.join_success_rate(), 2)
        ),
        format!(
            "  Threshold     : {}",
            format_percent(report.join_threshold(), 0)
        ),
        format!(
            "  Status        : {}",
            if report.join_passed() { "PASS" } else { "FAIL" }
        ),
        String::new(),
        "EXCLUDED ROWS".to_string(),
    ]);
    if report.exclusions().is_empty() {
        lines.push("  None".to_string());
    }
    for record in report.exclusions() {
        lines.push(format!("  {}: {} rows", record.description, record.count));
        let rows: Vec<String> = record.row_indices.iter().map(ToString::to_string).collect();
        lines.push(format!("    Row indices : {}", rows.join(", ")));
    }

    let minutes = report.minutes();
    lines.extend([
        String::new(),
        "INSTRUCTIONAL MINUTES METHOD".to_string(),
        format!("  Explicit minutes used   : {}", minutes.explicit),
        format!(
            "  Date-derived ({MINUTES_PER_DAY}/day)  : {}",
            minutes.date_derived
        ),
        "  Assumptions:".to_string(),
    ]);
    for assumption in report.assumptions() {
        lines.push(format!("    {}: {}", assumption.name, assumption.value));
    }

    lines.extend([String::new(), "COLUMN ALIAS MAP".to_string()]);
    for map in report.alias_maps() {
        push_alias_map(&mut lines, map);
    }

    lines.extend([String::new(), "FLAGS".to_string()]);
    if report.flags().is_empty() {
        lines.push("  None".to_string());
    }
    for flag in report.flags() {
        lines.push(format!("  ! {flag}"));
    }
    lines.push(rule());
    lines.join("\n")
}

fn push_source(lines: &mut Vec<String>, label: &str, file: &SourceFile) {
    lines.push(format!("  {label} : {} (sha256 {})", file.name, file.sha256));
    lines.push(format!("    Path        : {}", file.path.display()));
}

fn push_alias_map(lines: &mut Vec<String>, map: &FileAliasMap) {
    lines.push(format!("  [{}] ({})", map.role.label(), map.source.label()));
    if map.applied.is_empty() {
        lines.push("    (no columns resolved)".to_string());
    }
    for alias in &map.applied {
        lines.push(format!("    '{}' -> '{}'", alias.raw, alias.canonical));
    }
    if !map.unmatched.is_empty() {
        let quoted: Vec<String> = map
            .unmatched
            .iter()
            .map(|header| format!("'{header}'"))
            .collect();
        lines.push(format!("    Unmatched   : {}", quoted.join(", ")));
    }
}

/// Renders a structured halt with numbered fix steps.
pub fn render_halt_text(halt: &PipelineHalt) -> String {
    let mut lines = vec![
        rule(),
        "PIPELINE HALT".to_string(),
        rule(),
        format!("Reason          : {}", halt.reason()),
        format!("Affected File   : {}", halt.affected_file()),
    ];
    let fields = halt.fields();
    if !fields.is_empty() {
        lines.push(format!("Missing/Invalid : {}", fields.join(", ")));
    }
    if let Some(rate) = halt.join_success_rate() {
        lines.push(format!("Join Success    : {}", format_percent(rate, 1)));
    }
    lines.push("Fix Steps:".to_string());
    for (idx, step) in halt.remediation().iter().enumerate() {
        lines.push(format!("  {}. {step}", idx + 1));
    }
    lines.push(rule());
    lines.join("\n")
}
