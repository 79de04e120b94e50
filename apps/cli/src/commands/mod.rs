//! Command implementations for the Autopilot CLI.

pub mod analyze;
pub mod patterns;
pub mod validate;
