//! MySQL dialect for the sqbind bindings generator.

mod naming;
mod types;

pub use naming::MYSQL_NAMING;

use sqbind_codegen::{Dialect, NamingConvention};
use sqbind_ir::{FieldKind, NativeType};

/// MySQL dialect implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDialect;

impl Dialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn naming(&self) -> &NamingConvention {
        &MYSQL_NAMING
    }

    fn column_kind(&self, raw_type: &str) -> Option<FieldKind> {
        types::column_kind(raw_type)
    }

    fn argument_type(&self, raw_type: &str) -> Option<(FieldKind, NativeType)> {
        types::argument_type(raw_type)
    }
}
