//! Core type definitions.

/// Semantic category of a column, argument, or result field.
///
/// This is the closed set of field kinds the runtime crate knows how to
/// build. Raw schema type spellings (`"character varying"`, `"bigint
/// unsigned"`, …) are collapsed into one of these by the active dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Number,
    String,
    Time,
    Boolean,
    Enum,
    Binary,
    Json,
    Uuid,
    Array,
}

impl FieldKind {
    /// Name of the runtime field wrapper type, relative to the `sq` alias.
    pub fn field_type(&self) -> &'static str {
        match self {
            FieldKind::Number => "NumberField",
            FieldKind::String => "StringField",
            FieldKind::Time => "TimeField",
            FieldKind::Boolean => "BooleanField",
            FieldKind::Enum => "EnumField",
            FieldKind::Binary => "BinaryField",
            FieldKind::Json => "JsonField",
            FieldKind::Uuid => "UuidField",
            FieldKind::Array => "ArrayField",
        }
    }
}

/// Literal Rust type used for a function argument in a generated
/// parameter list.
///
/// Distinct from [`FieldKind`]: arguments appear in a typed signature,
/// results appear as generated field wrappers. `sq::`-prefixed types are
/// re-exports of the runtime crate, so generated code never depends on
/// anything beyond its configured imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Int,
    Float,
    Bool,
    Text,
    Time,
    Bytes,
    Json,
    Uuid,
}

impl NativeType {
    /// The Rust type literal emitted in generated signatures.
    pub fn rust_type(&self) -> &'static str {
        match self {
            NativeType::Int => "i64",
            NativeType::Float => "f64",
            NativeType::Bool => "bool",
            NativeType::Text => "String",
            NativeType::Time => "sq::Timestamp",
            NativeType::Bytes => "Vec<u8>",
            NativeType::Json => "sq::Json",
            NativeType::Uuid => "sq::Uuid",
        }
    }
}
