//! Reading an export from disk into a text-typed DataFrame.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use polars::prelude::{Column, DataFrame};
use sha2::{Digest, Sha256};
use sis_model::{FileRole, SourceFile};
use tracing::info;

use crate::dataset::Dataset;
use crate::error::{IngestError, Result};
use crate::normalize::clean_text;

/// Hex digits of the SHA-256 kept as the file identifier.
const DIGEST_PREFIX_LEN: usize = 12;

/// Why a header was changed on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFixKind {
    /// Invisible characters or padding removed, or a blank header named.
    Cleaned,
    /// The name was already taken by an earlier column and got a suffix.
    Deduplicated,
}

/// A header that needed cleanup before it could be used as a column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFix {
    pub raw: String,
    pub cleaned: String,
    pub kind: HeaderFixKind,
}

/// A parsed source export.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub dataset: Dataset,
    pub source: SourceFile,
    pub header_fixes: Vec<HeaderFix>,
}

/// Reads the whole file once, digests it and parses it as CSV.
///
/// Every cell is kept as text; empty cells become nulls. Rows with fewer
/// fields than the header are padded with nulls, rows with more are an error.
pub fn load_source(path: &Path, role: FileRole) -> Result<LoadedSource> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = hex::encode(Sha256::digest(&bytes));

    let parse_error = |message: String| IngestError::CsvParse {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(|err| parse_error(err.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if raw_headers.is_empty() {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    let (headers, header_fixes) = clean_headers(&raw_headers);

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|err| parse_error(err.to_string()))?;
        if record.len() > headers.len() {
            return Err(parse_error(format!(
                "data row {} has {} fields, expected {}",
                row + 1,
                record.len(),
                headers.len()
            )));
        }
        for (idx, column) in cells.iter_mut().enumerate() {
            let value = record.get(idx).filter(|value| !value.is_empty());
            column.push(value.map(str::to_string));
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name.as_str().into(), values))
        .collect();
    let frame = DataFrame::new(columns)?;

    let source = SourceFile {
        role,
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        path: path.to_path_buf(),
        sha256: digest[..DIGEST_PREFIX_LEN].to_string(),
        rows: frame.height(),
        columns: frame.width(),
    };
    info!(
        file = %role,
        path = %path.display(),
        rows = source.rows,
        columns = source.columns,
        sha256 = %source.sha256,
        "source loaded"
    );

    Ok(LoadedSource {
        dataset: Dataset::new(role, frame),
        source,
        header_fixes,
    })
}

/// Cleans headers the same way cells are cleaned. Blank headers get a
/// positional placeholder name, and a name already taken by an earlier
/// column gets the first free `.N` suffix (`Notes`, `Notes.1`, `Notes.2`).
fn clean_headers(raw_headers: &[String]) -> (Vec<String>, Vec<HeaderFix>) {
    let mut cleaned_names = Vec::with_capacity(raw_headers.len());
    for (idx, raw) in raw_headers.iter().enumerate() {
        let cleaned = clean_text(raw);
        cleaned_names.push(if cleaned.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            cleaned
        });
    }

    let mut taken: HashSet<String> = HashSet::with_capacity(cleaned_names.len());
    let mut headers = Vec::with_capacity(cleaned_names.len());
    let mut fixes = Vec::new();
    for (raw, cleaned) in raw_headers.iter().zip(cleaned_names) {
        let mut name = cleaned.clone();
        let mut suffix = 1;
        while taken.contains(&name) {
            name = format!("{cleaned}.{suffix}");
            suffix += 1;
        }
        taken.insert(name.clone());

        let kind = if name != cleaned {
            Some(HeaderFixKind::Deduplicated)
        } else if &name != raw {
            Some(HeaderFixKind::Cleaned)
        } else {
            None
        };
        if let Some(kind) = kind {
            fixes.push(HeaderFix {
                raw: raw.clone(),
                cleaned: name.clone(),
                kind,
            });
        }
        headers.push(name);
    }
    (headers, fixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_cleaned_and_fixes_recorded() {
        let raw = vec![
            "\u{feff}Incident Number".to_string(),
            " Building ".to_string(),
            "Grade".to_string(),
            String::new(),
        ];
        let (headers, fixes) = clean_headers(&raw);
        assert_eq!(
            headers,
            vec!["Incident Number", "Building", "Grade", "Unnamed: 3"]
        );
        assert_eq!(fixes.len(), 3);
        assert_eq!(fixes[1].raw, " Building ");
        assert!(fixes.iter().all(|fix| fix.kind == HeaderFixKind::Cleaned));
    }

    #[test]
    fn repeated_headers_get_positional_suffixes() {
        let raw: Vec<String> = ["Notes", "Notes.1", " Notes", "Notes"]
            .iter()
            .map(|header| header.to_string())
            .collect();
        let (headers, fixes) = clean_headers(&raw);
        assert_eq!(headers, vec!["Notes", "Notes.1", "Notes.2", "Notes.3"]);
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].raw, " Notes");
        assert_eq!(fixes[0].cleaned, "Notes.2");
        assert_eq!(fixes[0].kind, HeaderFixKind::Deduplicated);
        assert_eq!(fixes[1].cleaned, "Notes.3");
    }
}
