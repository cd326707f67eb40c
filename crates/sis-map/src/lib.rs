//! Deterministic header alias resolution.
//!
//! Raw export headers are matched against per-system variant tables after
//! trimming and lower-casing. Matching is exact: there is no scoring, no
//! distance metric and no partial credit. Headers without a registry key stay
//! unmatched and are reported, never guessed.

mod error;
mod overrides;
mod registry;
mod resolver;
mod sources;

pub use error::{MappingError, RegistryError, Result};
pub use overrides::{OperatorOverrides, OverrideResolution, load_overrides, resolve_with_override};
pub use registry::{AliasEntry, AliasRegistry, normalize_header};
pub use resolver::{ColumnResolver, ResolvedColumns, unmatched_columns};
pub use sources::{BUILTIN_TABLES, VariantTable};
