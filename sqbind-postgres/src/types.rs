//! PostgreSQL type lookup tables.
//!
//! Raw type spellings are the `data_type` values reported by
//! `information_schema`: lowercase type names, plus the `USER-DEFINED`
//! and `ARRAY` sentinels for enums and array columns. Anything outside
//! these tables is unsupported and aborts the run.

use sqbind_ir::{FieldKind, NativeType};

/// Map a raw column or result type to its field kind.
pub fn column_kind(raw_type: &str) -> Option<FieldKind> {
    // sentinels are reported uppercase
    match raw_type {
        "USER-DEFINED" => return Some(FieldKind::Enum),
        "ARRAY" => return Some(FieldKind::Array),
        _ => {}
    }
    let kind = match raw_type.to_ascii_lowercase().as_str() {
        "smallint" | "integer" | "bigint" | "smallserial" | "serial" | "bigserial" | "oid"
        | "numeric" | "decimal" | "real" | "double precision" | "money" => FieldKind::Number,
        "text" | "character varying" | "varchar" | "character" | "char" | "name" | "citext" => {
            FieldKind::String
        }
        "timestamp" | "timestamp without time zone" | "timestamp with time zone"
        | "timestamptz" | "date" | "time" | "time without time zone"
        | "time with time zone" => FieldKind::Time,
        "boolean" | "bool" => FieldKind::Boolean,
        "bytea" => FieldKind::Binary,
        "json" | "jsonb" => FieldKind::Json,
        "uuid" => FieldKind::Uuid,
        _ => return None,
    };
    Some(kind)
}

/// Map a raw argument type to its field kind and Rust parameter type.
///
/// Array-typed arguments have no positional native representation and are
/// unsupported.
pub fn argument_type(raw_type: &str) -> Option<(FieldKind, NativeType)> {
    if raw_type == "USER-DEFINED" {
        // enum values cross the boundary as their label
        return Some((FieldKind::Enum, NativeType::Text));
    }
    let mapping = match raw_type.to_ascii_lowercase().as_str() {
        "smallint" | "integer" | "bigint" | "smallserial" | "serial" | "bigserial" | "oid" => {
            (FieldKind::Number, NativeType::Int)
        }
        "numeric" | "decimal" | "real" | "double precision" | "money" => {
            (FieldKind::Number, NativeType::Float)
        }
        "text" | "character varying" | "varchar" | "character" | "char" | "name" | "citext" => {
            (FieldKind::String, NativeType::Text)
        }
        "timestamp" | "timestamp without time zone" | "timestamp with time zone"
        | "timestamptz" | "date" | "time" | "time without time zone"
        | "time with time zone" => (FieldKind::Time, NativeType::Time),
        "boolean" | "bool" => (FieldKind::Boolean, NativeType::Bool),
        "bytea" => (FieldKind::Binary, NativeType::Bytes),
        "json" | "jsonb" => (FieldKind::Json, NativeType::Json),
        "uuid" => (FieldKind::Uuid, NativeType::Uuid),
        _ => return None,
    };
    Some(mapping)
}
