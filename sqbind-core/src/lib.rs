//! Core utilities for the sqbind bindings generator.
//!
//! This crate provides the string casing helpers and the generated-file
//! writer used across the sqbind workspace.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{to_pascal_case, to_snake_case, to_upper_snake_case};
