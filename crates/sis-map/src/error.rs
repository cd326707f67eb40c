//! Error types for alias registry and override handling.

use std::path::PathBuf;

use sis_model::CanonicalField;
use thiserror::Error;

/// The built-in variant tables contradict themselves.
///
/// This is a defect in the compiled-in data, never a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// One normalized header points at two different canonical fields.
    #[error(
        "alias conflict in '{system}': variant '{raw}' (normalized: '{key}') maps to '{attempted}' but '{existing_system}' already mapped it to '{existing}'"
    )]
    Conflict {
        system: &'static str,
        raw: &'static str,
        key: String,
        attempted: CanonicalField,
        existing: CanonicalField,
        existing_system: &'static str,
    },

    /// A variant that normalizes to nothing would match blank headers.
    #[error("alias table '{system}' contains a blank variant")]
    BlankVariant { system: &'static str },
}

/// Errors loading operator overrides.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Override file could not be read.
    #[error("failed to read override file {path}: {source}")]
    OverrideRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Override file is not valid JSON or names an unknown canonical field.
    #[error("invalid override file {path}: {source}")]
    OverrideParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MappingError>;
