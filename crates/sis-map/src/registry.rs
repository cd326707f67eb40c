//! The alias registry: normalized raw header -> canonical field.

use std::collections::HashMap;

use sis_model::CanonicalField;
use tracing::info;

use crate::error::RegistryError;
use crate::sources::{BUILTIN_TABLES, VariantTable};

/// Normalizes a raw header for lookup: surrounding whitespace removed, lower-cased.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One accepted registry key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub key: String,
    pub canonical: CanonicalField,
    /// System whose table contributed the key first.
    pub system: &'static str,
}

/// Immutable lookup table built once per process.
///
/// Construct it with [`AliasRegistry::builtin`] and pass it by reference to
/// resolvers and pipeline runs. There is no way to mutate it after the build.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    entries: Vec<AliasEntry>,
    index: HashMap<String, usize>,
}

impl AliasRegistry {
    /// Builds the registry from the compiled-in tables.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_tables(BUILTIN_TABLES)
    }

    /// Merges tables in order. The same key mapping to the same field from two
    /// systems is accepted; the same key mapping to different fields fails.
    pub fn from_tables(tables: &[VariantTable]) -> Result<Self, RegistryError> {
        let mut entries: Vec<AliasEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for table in tables {
            for &(raw, canonical) in table.entries {
                let key = normalize_header(raw);
                if key.is_empty() {
                    return Err(RegistryError::BlankVariant {
                        system: table.system,
                    });
                }
                if let Some(&pos) = index.get(&key) {
                    let existing = &entries[pos];
                    if existing.canonical != canonical {
                        return Err(RegistryError::Conflict {
                            system: table.system,
                            raw,
                            key,
                            attempted: canonical,
                            existing: existing.canonical,
                            existing_system: existing.system,
                        });
                    }
                    continue;
                }
                index.insert(key.clone(), entries.len());
                entries.push(AliasEntry {
                    key,
                    canonical,
                    system: table.system,
                });
            }
        }

        info!(
            tables = tables.len(),
            keys = entries.len(),
            "alias registry built"
        );
        Ok(Self { entries, index })
    }

    /// Exact lookup after normalization. No partial or scored matches.
    pub fn lookup(&self, raw: &str) -> Option<CanonicalField> {
        self.entry(raw).map(|entry| entry.canonical)
    }

    pub fn entry(&self, raw: &str) -> Option<&AliasEntry> {
        let key = normalize_header(raw);
        self.index.get(&key).map(|&pos| &self.entries[pos])
    }

    /// Entries in build order.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
