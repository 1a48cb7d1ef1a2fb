//! PostgreSQL dialect for the sqbind bindings generator.

mod naming;
mod types;

pub use naming::POSTGRES_NAMING;

use sqbind_codegen::{Dialect, NamingConvention};
use sqbind_ir::{FieldKind, NativeType};

/// PostgreSQL dialect implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn naming(&self) -> &NamingConvention {
        &POSTGRES_NAMING
    }

    fn column_kind(&self, raw_type: &str) -> Option<FieldKind> {
        types::column_kind(raw_type)
    }

    fn argument_type(&self, raw_type: &str) -> Option<(FieldKind, NativeType)> {
        types::argument_type(raw_type)
    }
}
