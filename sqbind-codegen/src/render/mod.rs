//! Template rendering: canonical model to Rust source text.
//!
//! Rendering is pure and whitespace-stable: the same model always yields
//! byte-identical output. Each artifact kind (tables, functions) has one
//! renderer; dialects never influence layout, only the model contents.

mod functions;
mod tables;

pub use functions::render_functions;
pub use tables::render_tables;

use sqbind_ir::Model;

use crate::{
    builder::CodeBuilder,
    config::Artifact,
    error::{Error, Result},
};

/// Marker line + lint allowances + configured imports.
///
/// The marker is a fixed machine-readable line naming the generating tool
/// and artifact kind so downstream tooling can detect generated files.
fn write_header(builder: CodeBuilder, model: &Model, artifact: Artifact) -> CodeBuilder {
    let mut builder = builder
        .line(&format!(
            "// Code generated by 'sqbind-{} {}'; DO NOT EDIT.",
            model.dialect,
            artifact.as_str()
        ))
        .line("#![allow(non_camel_case_types, non_snake_case, dead_code)]");
    if !model.imports.is_empty() {
        builder = builder.blank();
        for import in &model.imports {
            builder = builder.line(import);
        }
    }
    builder
}

/// The package name becomes the generated module's file stem, so it must
/// itself be a valid module identifier.
fn check_package_name(model: &Model, artifact: Artifact) -> Result<()> {
    let name = &model.package_name;
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::Render {
            artifact: artifact.as_str(),
            message: format!("package name '{}' is not a valid module identifier", name),
        })
    }
}
