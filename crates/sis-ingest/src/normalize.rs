//! Mechanical normalization of text cells.
//!
//! Only byte-order marks, zero-width characters and surrounding whitespace
//! are touched. Rows and columns are never dropped and nulls stay null.

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::Result;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Zero-width characters removed anywhere in a cell.
pub const INVISIBLE_CHARS: [char; 4] = ['\u{200b}', '\u{200c}', '\u{200d}', BYTE_ORDER_MARK];

/// Strips a leading BOM, removes invisible characters, trims whitespace.
pub fn clean_text(raw: &str) -> String {
    let without_bom = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
    let visible: String = without_bom
        .chars()
        .filter(|ch| !INVISIBLE_CHARS.contains(ch))
        .collect();
    visible.trim().to_string()
}

/// The normalized dataset plus the columns whose content changed.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub dataset: Dataset,
    pub changed_columns: Vec<String>,
}

/// Cleans every text cell of every column.
pub fn mechanical_normalize(dataset: &Dataset) -> Result<NormalizeOutcome> {
    let mut current = dataset.clone();
    let mut changed_columns = Vec::new();

    for header in dataset.headers() {
        let values = dataset.text_values(&header)?;
        let mut changed = false;
        let cleaned: Vec<Option<String>> = values
            .iter()
            .map(|value| {
                value.map(|raw| {
                    let clean = clean_text(raw);
                    changed |= clean != raw;
                    clean
                })
            })
            .collect();

        if changed {
            debug!(file = %dataset.role(), column = %header, "mechanical normalize applied");
            current = current.with_text_column(&header, cleaned)?;
            changed_columns.push(header);
        }
    }

    Ok(NormalizeOutcome {
        dataset: current,
        changed_columns,
    })
}
