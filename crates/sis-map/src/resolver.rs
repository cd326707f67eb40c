//! Column resolution against the alias registry.

use sis_model::CanonicalField;
use tracing::debug;

use crate::registry::AliasRegistry;

/// Raw headers that resolved, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColumns {
    entries: Vec<(String, CanonicalField)>,
}

impl ResolvedColumns {
    pub fn from_pairs(entries: Vec<(String, CanonicalField)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, raw: &str) -> Option<CanonicalField> {
        self.entries
            .iter()
            .find(|(header, _)| header == raw)
            .map(|(_, canonical)| *canonical)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.get(raw).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CanonicalField)> {
        self.entries
            .iter()
            .map(|(header, canonical)| (header.as_str(), *canonical))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stateless resolver over a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct ColumnResolver<'a> {
    registry: &'a AliasRegistry,
}

impl<'a> ColumnResolver<'a> {
    pub fn new(registry: &'a AliasRegistry) -> Self {
        Self { registry }
    }

    /// Maps every header with an exact normalized registry key. `file_label`
    /// only appears in log output.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S], file_label: &str) -> ResolvedColumns {
        let mut entries = Vec::new();
        for header in headers {
            let header = header.as_ref();
            if let Some(canonical) = self.registry.lookup(header) {
                debug!(file = file_label, raw = header, canonical = %canonical, "header resolved");
                entries.push((header.to_string(), canonical));
            }
        }
        ResolvedColumns { entries }
    }
}

/// Headers absent from `resolved`, in input order.
pub fn unmatched_columns<S: AsRef<str>>(headers: &[S], resolved: &ResolvedColumns) -> Vec<String> {
    headers
        .iter()
        .map(AsRef::as_ref)
        .filter(|header| !resolved.contains(header))
        .map(ToString::to_string)
        .collect()
}
