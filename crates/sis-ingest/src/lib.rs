//! Source export ingestion.
//!
//! This crate reads incident and consequence exports into Polars DataFrames
//! whose columns are all text, and applies the mechanical normalization
//! pass.
//!
//! # Features
//!
//! - **Loading**: Read each file once, digest it with SHA-256, parse it as CSV
//! - **Datasets**: Filter and rename while keeping each row's source position
//! - **Normalization**: Strip byte-order marks, zero-width characters and padding
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sis_ingest::{load_source, mechanical_normalize};
//! use sis_model::FileRole;
//!
//! let loaded = load_source(Path::new("exports/incidents.csv"), FileRole::Incident)?;
//! let outcome = mechanical_normalize(&loaded.dataset)?;
//! println!("{} columns cleaned", outcome.changed_columns.len());
//! ```

mod dataset;
mod error;
mod loader;
mod normalize;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use loader::{HeaderFix, HeaderFixKind, LoadedSource, load_source};

// === Datasets ===
pub use dataset::Dataset;

// === Normalization ===
pub use normalize::{INVISIBLE_CHARS, NormalizeOutcome, clean_text, mechanical_normalize};
