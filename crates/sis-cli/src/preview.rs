use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use sis_map::AliasRegistry;
use sis_model::constants::MINUTES_COMPUTED_COLUMN;
use sis_model::{CanonicalField, FileRole};

const PREVIEW_FIELDS: [CanonicalField; 4] = [
    CanonicalField::IncidentNumber,
    CanonicalField::ConsequenceType,
    CanonicalField::ConsequenceStartDate,
    CanonicalField::ConsequenceEndDate,
];

pub fn print_preview(frame: &DataFrame, limit: usize) {
    let table = preview_table(frame, limit);
    println!();
    println!(
        "Preview ({} of {} joined rows):",
        limit.min(frame.height()),
        frame.height()
    );
    println!("{table}");
}

pub fn print_aliases(registry: &AliasRegistry) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Header (normalized)"),
        header_cell("Canonical field"),
        header_cell("System"),
    ]);
    apply_table_style(&mut table);
    for entry in registry.entries() {
        table.add_row(vec![
            Cell::new(&entry.key),
            Cell::new(entry.canonical.as_str()).fg(Color::Blue),
            dim_cell(entry.system),
        ]);
    }
    println!("{table}");
    println!("{} header variants", registry.len());
}

fn preview_table(frame: &DataFrame, limit: usize) -> Table {
    let mut table = Table::new();
    let mut header: Vec<Cell> = PREVIEW_FIELDS
        .iter()
        .map(|field| header_cell(field.as_str()))
        .collect();
    header.push(header_cell(MINUTES_COMPUTED_COLUMN));
    table.set_header(header);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(PREVIEW_FIELDS.len()) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for row in 0..frame.height().min(limit) {
        let mut cells: Vec<Cell> = PREVIEW_FIELDS
            .iter()
            .map(|field| match text_value(frame, *field, row) {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            })
            .collect();
        let minutes = frame
            .column(MINUTES_COMPUTED_COLUMN)
            .ok()
            .and_then(|column| column.i64().ok())
            .and_then(|values| values.get(row));
        cells.push(match minutes {
            Some(value) => Cell::new(value).add_attribute(Attribute::Bold),
            None => dim_cell("-"),
        });
        table.add_row(cells);
    }
    table
}

/// A field's text in a joined row, preferring the consequence side when
/// the name collided in the join.
fn text_value(frame: &DataFrame, field: CanonicalField, row: usize) -> Option<String> {
    let base = field.as_str();
    let suffixed = format!("{base}{}", FileRole::Consequence.join_suffix());
    [base.to_string(), suffixed]
        .iter()
        .find_map(|name| frame.column(name).ok())
        .and_then(|column| column.str().ok())
        .and_then(|values| values.get(row))
        .map(str::to_string)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
