//! MySQL type lookup tables.
//!
//! Raw type spellings are the `DATA_TYPE` values reported by
//! `information_schema`: lowercase base type names without display
//! widths. Anything outside these tables is unsupported and aborts the
//! run.

use sqbind_ir::{FieldKind, NativeType};

/// Map a raw column or result type to its field kind.
pub fn column_kind(raw_type: &str) -> Option<FieldKind> {
    let kind = match raw_type.to_ascii_lowercase().as_str() {
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "year" | "bit"
        | "decimal" | "numeric" | "float" | "double" => FieldKind::Number,
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "set" => {
            FieldKind::String
        }
        "date" | "datetime" | "timestamp" | "time" => FieldKind::Time,
        "bool" | "boolean" => FieldKind::Boolean,
        "enum" => FieldKind::Enum,
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
            FieldKind::Binary
        }
        "json" => FieldKind::Json,
        _ => return None,
    };
    Some(kind)
}

/// Map a raw argument type to its field kind and Rust parameter type.
pub fn argument_type(raw_type: &str) -> Option<(FieldKind, NativeType)> {
    let mapping = match raw_type.to_ascii_lowercase().as_str() {
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "year" | "bit" => {
            (FieldKind::Number, NativeType::Int)
        }
        "decimal" | "numeric" | "float" | "double" => (FieldKind::Number, NativeType::Float),
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "set" => {
            (FieldKind::String, NativeType::Text)
        }
        "date" | "datetime" | "timestamp" | "time" => (FieldKind::Time, NativeType::Time),
        "bool" | "boolean" => (FieldKind::Boolean, NativeType::Bool),
        // enum values cross the boundary as their label
        "enum" => (FieldKind::Enum, NativeType::Text),
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
            (FieldKind::Binary, NativeType::Bytes)
        }
        "json" => (FieldKind::Json, NativeType::Json),
        _ => return None,
    };
    Some(mapping)
}
