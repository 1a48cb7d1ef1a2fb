//! Dialect capability trait.

use sqbind_ir::{FieldKind, NativeType};

use crate::naming::NamingConvention;

/// A database dialect's contribution to a generation run: its naming
/// convention and its raw-type lookup tables.
///
/// Implementations are pure lookups with no I/O; one unit struct per
/// supported database. Rendering never varies per dialect; adding a
/// backend means adding a `Dialect` impl, nothing else.
pub trait Dialect {
    /// Dialect identifier used in the generated-file marker and in
    /// error locations (e.g., "postgres", "mysql").
    fn name(&self) -> &'static str;

    /// The dialect's naming convention.
    fn naming(&self) -> &NamingConvention;

    /// Map a raw column or result type to its field kind.
    ///
    /// Returns `None` for types outside the dialect's supported set;
    /// the normalizer turns that into a fatal `UnsupportedType` error
    /// with the exact schema location.
    fn column_kind(&self, raw_type: &str) -> Option<FieldKind>;

    /// Map a raw argument type to its field kind and the Rust type used
    /// in the generated parameter list.
    fn argument_type(&self, raw_type: &str) -> Option<(FieldKind, NativeType)>;
}
