//! A text-typed DataFrame that remembers where each row came from.

use polars::prelude::*;
use sis_model::FileRole;

use crate::error::{IngestError, Result};

/// One source table during a run.
///
/// Every operation returns a new `Dataset`; frames share column buffers so
/// renames and column replacements do not copy untouched data. `origin[i]`
/// is the 0-based data-row position of row `i` in the source file.
#[derive(Debug, Clone)]
pub struct Dataset {
    role: FileRole,
    frame: DataFrame,
    origin: Vec<usize>,
}

impl Dataset {
    pub fn new(role: FileRole, frame: DataFrame) -> Self {
        let origin = (0..frame.height()).collect();
        Self {
            role,
            frame,
            origin,
        }
    }

    pub fn role(&self) -> FileRole {
        self.role
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn origin(&self) -> &[usize] {
        &self.origin
    }

    /// Column names in frame order.
    pub fn headers(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame
            .get_column_names()
            .iter()
            .any(|column| column.as_str() == name)
    }

    /// Cell values of a text column; nulls stay `None`.
    pub fn text_values(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| IngestError::ColumnNotFound {
                column: name.to_string(),
            })?;
        Ok(column.str()?.into_iter().collect())
    }

    /// Keeps rows whose mask entry is `true`, carrying their origins along.
    pub fn retain(&self, keep: &[bool]) -> Result<Dataset> {
        if keep.len() != self.height() {
            return Err(IngestError::DataFrame {
                message: format!(
                    "row mask has {} entries for {} rows",
                    keep.len(),
                    self.height()
                ),
            });
        }
        let mask = BooleanChunked::from_slice("keep".into(), keep);
        let frame = self.frame.filter(&mask)?;
        let origin = self
            .origin
            .iter()
            .zip(keep)
            .filter(|(_, keep)| **keep)
            .map(|(origin, _)| *origin)
            .collect();
        Ok(Dataset {
            role: self.role,
            frame,
            origin,
        })
    }

    /// Applies all `(from, to)` renames at once, so one column may take a
    /// name another column gives up. The result must not repeat a name.
    pub fn rename_columns(&self, renames: &[(String, String)]) -> Result<Dataset> {
        let columns: Vec<Column> = self
            .frame
            .get_columns()
            .iter()
            .map(|column| {
                let mut column = column.clone();
                let target = renames
                    .iter()
                    .find(|(from, _)| from.as_str() == column.name().as_str());
                if let Some((_, to)) = target {
                    column.rename(to.as_str().into());
                }
                column
            })
            .collect();
        let frame = DataFrame::new(columns)?;
        Ok(Dataset {
            role: self.role,
            frame,
            origin: self.origin.clone(),
        })
    }

    /// Replaces (or adds) a text column.
    pub fn with_text_column(&self, name: &str, values: Vec<Option<String>>) -> Result<Dataset> {
        let mut frame = self.frame.clone();
        frame.with_column(Series::new(name.into(), values))?;
        Ok(Dataset {
            role: self.role,
            frame,
            origin: self.origin.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let frame = DataFrame::new(vec![
            Column::new("Incident #".into(), [Some("A1"), Some("A2"), None]),
            Column::new("Building".into(), [Some("North"), Some("South"), Some("East")]),
        ])
        .unwrap();
        Dataset::new(FileRole::Incident, frame)
    }

    #[test]
    fn retain_tracks_source_positions() {
        let kept = sample().retain(&[true, false, true]).unwrap();
        assert_eq!(kept.height(), 2);
        assert_eq!(kept.origin(), &[0, 2]);

        let again = kept.retain(&[false, true]).unwrap();
        assert_eq!(again.origin(), &[2]);
        assert_eq!(again.text_values("Building").unwrap(), vec![Some("East")]);
    }

    #[test]
    fn retain_rejects_wrong_mask_length() {
        assert!(sample().retain(&[true]).is_err());
    }

    #[test]
    fn rename_leaves_original_untouched() {
        let original = sample();
        let renamed = original
            .rename_columns(&[("Incident #".to_string(), "incident_number".to_string())])
            .unwrap();
        assert_eq!(renamed.headers(), vec!["incident_number", "Building"]);
        assert_eq!(original.headers(), vec!["Incident #", "Building"]);
        assert_eq!(
            renamed.text_values("incident_number").unwrap(),
            vec![Some("A1"), Some("A2"), None]
        );
    }

    #[test]
    fn renames_apply_simultaneously() {
        let swapped = sample()
            .rename_columns(&[
                ("Incident #".to_string(), "Building".to_string()),
                ("Building".to_string(), "campus".to_string()),
            ])
            .unwrap();
        assert_eq!(swapped.headers(), vec!["Building", "campus"]);
        assert_eq!(
            swapped.text_values("Building").unwrap(),
            vec![Some("A1"), Some("A2"), None]
        );

        let clash = sample().rename_columns(&[("Incident #".to_string(), "Building".to_string())]);
        assert!(clash.is_err());
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = sample().text_values("campus").unwrap_err();
        assert!(matches!(err, IngestError::ColumnNotFound { column } if column == "campus"));
    }
}
