//! The canonical, fully-derived model consumed by the renderers.
//!
//! A `Model` is built once per generation run by the normalizer and
//! discarded after rendering. Every identifier in it is already a valid,
//! collision-free Rust identifier; the renderers only lay out text.

use crate::{FieldKind, NativeType, RelationKind};

/// Everything one generation run renders from.
#[derive(Debug, Clone)]
pub struct Model {
    /// Dialect name, used in the generated-file marker line.
    pub dialect: String,
    /// Module name for the generated file (also its file stem).
    pub package_name: String,
    /// Verbatim `use` lines, conventionally aliasing the runtime as `sq`.
    pub imports: Vec<String>,
    pub tables: Vec<Table>,
    pub functions: Vec<Function>,
}

/// One table or view binding.
#[derive(Debug, Clone)]
pub struct Table {
    /// Raw database identifiers, exactly as introspected.
    pub name: String,
    pub schema: String,
    pub relation_kind: RelationKind,
    /// Derived identifiers, unique across the whole run.
    pub struct_name: String,
    pub constructor: String,
    pub fields: Vec<TableField>,
}

/// One column of a table binding.
#[derive(Debug, Clone)]
pub struct TableField {
    /// Raw column name.
    pub name: String,
    /// Raw schema type the kind was derived from.
    pub raw_type: String,
    pub kind: FieldKind,
    /// Derived struct field identifier, unique within the table.
    pub field_name: String,
}

/// One stored-function binding.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub schema: String,
    pub struct_name: String,
    pub constructor: String,
    /// Positional; the order is the call order.
    pub arguments: Vec<FunctionField>,
    pub results: Vec<FunctionField>,
}

impl Function {
    /// Name of the internal untyped constructor the typed one delegates to.
    pub fn untyped_constructor(&self) -> String {
        format!("{}_", self.constructor)
    }
}

/// One argument or result of a function binding.
#[derive(Debug, Clone)]
pub struct FunctionField {
    pub name: String,
    pub raw_type: String,
    pub kind: FieldKind,
    /// Rust parameter type; set for arguments, `None` for results.
    pub native: Option<NativeType>,
    pub field_name: String,
}
