//! MySQL naming conventions.
//!
//! The inverse of the PostgreSQL layout: table structs carry the
//! `TABLE_` prefix and constructors are the bare upper-snake name, so
//! call sites read `USERS()` for the common case.

use sqbind_codegen::{escape_rust_reserved, NamingConvention, RUST_RESERVED_WORDS};
use sqbind_core::to_upper_snake_case;

fn table_struct(name: &str) -> String {
    format!("TABLE_{}", to_upper_snake_case(name))
}

fn function_struct(name: &str) -> String {
    format!("FUNCTION_{}", to_upper_snake_case(name))
}

/// MySQL naming conventions.
pub const MYSQL_NAMING: NamingConvention = NamingConvention {
    table_struct,
    table_constructor: to_upper_snake_case,
    function_struct,
    function_constructor: to_upper_snake_case,
    field: to_upper_snake_case,
    schema_qualifier: to_upper_snake_case,
    reserved_words: RUST_RESERVED_WORDS,
    escape_reserved: escape_rust_reserved,
};
