//! Join and derivation stages.
//!
//! The exact join produces the joined frame and the success rate checked by
//! the join gate; minutes derivation then appends
//! `instructional_minutes_computed` to every joined row.

mod error;
mod join;
mod minutes;

pub use error::{Result, TransformError};
pub use join::{JoinOutcome, exact_join};
pub use minutes::{MinutesOutcome, count_instructional_days, derive_minutes, explicit_minutes};
