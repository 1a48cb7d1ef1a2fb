//! PostgreSQL naming conventions.
//!
//! Struct names are the bare upper-snake relation name; table
//! constructors carry a `TABLE_` prefix and function structs a
//! `FUNCTION_` prefix, so the two namespaces stay readable side by side.

use sqbind_codegen::{escape_rust_reserved, NamingConvention, RUST_RESERVED_WORDS};
use sqbind_core::to_upper_snake_case;

fn table_constructor(name: &str) -> String {
    format!("TABLE_{}", to_upper_snake_case(name))
}

fn function_struct(name: &str) -> String {
    format!("FUNCTION_{}", to_upper_snake_case(name))
}

/// PostgreSQL naming conventions.
pub const POSTGRES_NAMING: NamingConvention = NamingConvention {
    table_struct: to_upper_snake_case,
    table_constructor,
    function_struct,
    function_constructor: to_upper_snake_case,
    field: to_upper_snake_case,
    schema_qualifier: to_upper_snake_case,
    reserved_words: RUST_RESERVED_WORDS,
    escape_reserved: escape_rust_reserved,
};
