//! Consequence validation checks.
//!
//! Each check either passes rows through, excludes rows with an
//! [`ExclusionRecord`](sis_model::ExclusionRecord), or (for required fields
//! only) halts the run. Exclusions are returned as data, never raised.

pub mod checks;
mod error;

pub use checks::CheckOutcome;
pub use checks::dates::parse_date;
pub use error::{Result, ValidateError};
