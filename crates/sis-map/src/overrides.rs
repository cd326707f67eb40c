//! Operator-supplied alias overrides.
//!
//! An override map supplied for a file role replaces automatic detection for
//! that file entirely. Roles without an entry keep automatic detection.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sis_model::{CanonicalField, FileRole};
use tracing::debug;

use crate::error::{MappingError, Result};
use crate::resolver::ResolvedColumns;

/// Raw header -> canonical field, per file role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident: Option<BTreeMap<String, CanonicalField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consequence: Option<BTreeMap<String, CanonicalField>>,
}

impl OperatorOverrides {
    pub fn for_role(&self, role: FileRole) -> Option<&BTreeMap<String, CanonicalField>> {
        match role {
            FileRole::Incident => self.incident.as_ref(),
            FileRole::Consequence => self.consequence.as_ref(),
        }
    }
}

/// Reads and validates an override JSON document.
pub fn load_overrides(path: &Path) -> Result<OperatorOverrides> {
    let text = fs::read_to_string(path).map_err(|source| MappingError::OverrideRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| MappingError::OverrideParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Result of applying an override map to one file's headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideResolution {
    pub resolved: ResolvedColumns,
    /// Override keys that name no header in the file.
    pub missing: Vec<String>,
}

/// Matches override keys against headers exactly (keys are trimmed, headers
/// are expected to be cleaned already). Resolution keeps header order.
pub fn resolve_with_override<S: AsRef<str>>(
    headers: &[S],
    overrides: &BTreeMap<String, CanonicalField>,
    file_label: &str,
) -> OverrideResolution {
    let by_key: BTreeMap<&str, CanonicalField> = overrides
        .iter()
        .map(|(raw, canonical)| (raw.trim(), *canonical))
        .collect();

    let mut pairs = Vec::new();
    for header in headers {
        let header = header.as_ref();
        if let Some(&canonical) = by_key.get(header) {
            debug!(file = file_label, raw = header, canonical = %canonical, "override applied");
            pairs.push((header.to_string(), canonical));
        }
    }

    let missing = by_key
        .keys()
        .filter(|key| !headers.iter().any(|header| header.as_ref() == **key))
        .map(|key| (*key).to_string())
        .collect();

    OverrideResolution {
        resolved: ResolvedColumns::from_pairs(pairs),
        missing,
    }
}
