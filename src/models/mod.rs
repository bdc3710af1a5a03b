//! Core data models for the champion statistics pipeline.

mod champion;
mod role;
mod stats;

pub use champion::*;
pub use role::*;
pub use stats::*;
