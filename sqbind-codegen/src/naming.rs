//! Identifier derivation: naming conventions and collision resolution.
//!
//! Raw database names are sanitized, cased per the active dialect's
//! convention, escaped if reserved, and finally claimed through an
//! [`IdentifierAllocator`] so no two symbols of one category ever share a
//! name within a generation run.

use indexmap::IndexSet;
use sqbind_core::to_snake_case;

use crate::error::{Error, Result};

/// Candidates tried per identifier before giving up.
const COLLISION_LIMIT: usize = 1000;

/// Rust reserved words; generated identifiers must never collide with them.
pub const RUST_RESERVED_WORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Escape a reserved word with a raw identifier prefix.
///
/// `self`, `Self`, `super`, and `crate` cannot be raw identifiers, so
/// they get an underscore suffix instead.
pub fn escape_rust_reserved(name: &str) -> String {
    match name {
        "self" | "Self" | "super" | "crate" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

/// Rewrite a raw database name into something renderable as a bare
/// identifier: non-alphanumerics become underscores and a leading digit
/// gets an underscore prefix. Never truncates.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() {
        out.push('_');
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Dialect-specific naming conventions.
///
/// Defines how raw table, function, column, and schema names turn into
/// struct, constructor, and field identifiers.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a table name to its struct name
    pub table_struct: fn(&str) -> String,
    /// Transform a table name to its constructor name
    pub table_constructor: fn(&str) -> String,
    /// Transform a function name to its struct name
    pub function_struct: fn(&str) -> String,
    /// Transform a function name to its constructor name
    pub function_constructor: fn(&str) -> String,
    /// Transform a column or result name to a struct field name
    pub field: fn(&str) -> String,
    /// Transform a schema name to the collision-suffix qualifier
    pub schema_qualifier: fn(&str) -> String,
    /// List of reserved words in the target language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Derive a table struct name from a raw table name.
    pub fn table_struct_name(&self, raw: &str) -> String {
        self.safe_name(&(self.table_struct)(&sanitize_identifier(raw)))
    }

    /// Derive a table constructor name from a raw table name.
    pub fn table_constructor_name(&self, raw: &str) -> String {
        self.safe_name(&(self.table_constructor)(&sanitize_identifier(raw)))
    }

    /// Derive a function struct name from a raw function name.
    pub fn function_struct_name(&self, raw: &str) -> String {
        self.safe_name(&(self.function_struct)(&sanitize_identifier(raw)))
    }

    /// Derive a function constructor name from a raw function name.
    pub fn function_constructor_name(&self, raw: &str) -> String {
        self.safe_name(&(self.function_constructor)(&sanitize_identifier(raw)))
    }

    /// Derive a struct field name from a raw column or result name.
    pub fn field_name(&self, raw: &str) -> String {
        self.safe_name(&(self.field)(&sanitize_identifier(raw)))
    }

    /// Derive a parameter name for a generated signature. Parameters are
    /// Rust-side names, so they are snake_case under every convention.
    pub fn parameter_name(&self, raw: &str) -> String {
        self.safe_name(&to_snake_case(&sanitize_identifier(raw)))
    }

    /// Derive the collision-suffix qualifier from a raw schema name.
    pub fn qualifier(&self, schema: &str) -> String {
        (self.schema_qualifier)(&sanitize_identifier(schema))
    }
}

/// Tracks issued identifiers for one symbol category (struct names,
/// constructor names, field names) and resolves collisions.
///
/// The disambiguator is derived from the colliding entity's
/// schema-qualified name, never from input order; callers normalize in
/// sorted order so the outcome is stable for unordered input.
#[derive(Debug, Default)]
pub struct IdentifierAllocator {
    issued: IndexSet<String>,
}

impl IdentifierAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base`, or the first free deterministic variant of it:
    /// `base`, `base_<qualifier>`, `base_<qualifier>_2`, …
    pub fn claim(&mut self, base: &str, qualifier: &str) -> Result<String> {
        for candidate in candidates(base, qualifier) {
            if !self.issued.contains(&candidate) {
                self.issued.insert(candidate.clone());
                return Ok(candidate);
            }
        }
        Err(Error::UnresolvableCollision {
            identifier: base.to_string(),
            qualifier: qualifier.to_string(),
        })
    }

    /// Claim a name together with its `_`-suffixed companion, both free.
    ///
    /// Function constructors come in pairs: the typed entry point and the
    /// untyped escape hatch named after it with a trailing underscore.
    pub fn claim_pair(&mut self, base: &str, qualifier: &str) -> Result<String> {
        for candidate in candidates(base, qualifier) {
            let companion = format!("{}_", candidate);
            if !self.issued.contains(&candidate) && !self.issued.contains(&companion) {
                self.issued.insert(candidate.clone());
                self.issued.insert(companion);
                return Ok(candidate);
            }
        }
        Err(Error::UnresolvableCollision {
            identifier: base.to_string(),
            qualifier: qualifier.to_string(),
        })
    }
}

fn candidates<'a>(base: &'a str, qualifier: &'a str) -> impl Iterator<Item = String> + 'a {
    std::iter::once(base.to_string())
        .chain(std::iter::once(format!("{}_{}", base, qualifier)))
        .chain((2..COLLISION_LIMIT).map(move |n| format!("{}_{}_{}", base, qualifier, n)))
}
