//! Code generation engine for the sqbind bindings generator.
//!
//! This crate turns already-introspected raw schema metadata into
//! validated Rust source bindings. It is dialect-agnostic: database
//! specifics enter only through the [`Dialect`] trait (type lookup tables
//! and a naming convention), implemented once per supported database.
//!
//! # Module Organization
//!
//! - [`naming`] - Identifier derivation and collision resolution
//! - [`normalize`] - Raw schema to canonical model
//! - [`render`] - Canonical model to source text
//! - [`validate`] - Parse-check rendered output before it leaves the engine
//!
//! # Pipeline
//!
//! ```text
//! RawSchema → normalize(dialect, config) → Model → render → validate → String
//! ```

mod builder;
mod config;
mod dialect;
mod error;
mod generate;
mod naming;
mod normalize;
mod render;
mod validate;

pub use builder::CodeBuilder;
pub use config::{Artifact, GenerateConfig};
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use generate::{generate, render_model};
pub use naming::{
    escape_rust_reserved, sanitize_identifier, IdentifierAllocator, NamingConvention,
    RUST_RESERVED_WORDS,
};
pub use normalize::normalize;
pub use render::{render_functions, render_tables};
pub use validate::validate;
