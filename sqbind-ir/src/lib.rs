//! Canonical schema model for the sqbind bindings generator.
//!
//! This crate provides the unified type definitions used across the sqbind
//! generation pipeline. These types serve as the single source of truth
//! between introspection output and code generation.
//!
//! # Architecture
//!
//! ```text
//! raw schema (JSON) → RawSchema → normalizer → Model → renderers
//! ```
//!
//! The model types are designed to be:
//! - Dialect-agnostic (no PostgreSQL/MySQL-specific concerns)
//! - Fully derived (every identifier in a `Model` is already valid and unique)
//! - Self-contained (no dependencies beyond serde for the raw descriptors)

mod model;
mod raw;
mod types;

pub use model::{Function, FunctionField, Model, Table, TableField};
pub use raw::{RawColumn, RawField, RawFunction, RawSchema, RawTable, RelationKind};
pub use types::{FieldKind, NativeType};
