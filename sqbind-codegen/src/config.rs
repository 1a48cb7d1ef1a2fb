//! Generation run configuration.

/// Configuration consumed by the engine for one generation run.
///
/// This is an explicit value, never inferred: the caller decides the
/// generated module name and which `use` lines the output starts with.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Module name of the generated file (also its file stem).
    pub package_name: String,
    /// Verbatim `use` lines. The renderers refer to the runtime crate
    /// through the `sq` path, so imports conventionally alias it, e.g.
    /// `use structured_query as sq;`.
    pub imports: Vec<String>,
}

impl GenerateConfig {
    pub fn new(package_name: impl Into<String>, imports: Vec<String>) -> Self {
        Self {
            package_name: package_name.into(),
            imports,
        }
    }
}

/// The artifact kinds the engine knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Tables,
    Functions,
}

impl Artifact {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::Tables => "tables",
            Artifact::Functions => "functions",
        }
    }
}
