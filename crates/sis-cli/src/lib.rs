//! Library components of the readiness CLI.

pub mod logging;
pub mod pipeline;
