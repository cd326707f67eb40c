//! Readiness report and halt rendering.
//!
//! - **Text**: the fixed-section layout operators read before trusting a run
//! - **JSON**: the same content for machine consumers

mod json;
mod text;

pub use json::{HaltSummary, render_halt_json, render_report_json};
pub use text::{render_halt_text, render_report_text};
