//! The generation pipeline entry point.

use sqbind_ir::{Model, RawSchema};

use crate::{
    config::{Artifact, GenerateConfig},
    dialect::Dialect,
    error::Result,
    normalize::normalize,
    render::{render_functions, render_tables},
    validate::validate,
};

/// Run one complete generation: normalize, render, validate.
///
/// The returned source has already passed validation; callers may write
/// it verbatim. Any error means no output at all; the pipeline never
/// yields partially generated text.
pub fn generate(
    schema: &RawSchema,
    dialect: &dyn Dialect,
    config: &GenerateConfig,
    artifact: Artifact,
) -> Result<String> {
    let model = normalize(schema, dialect, config)?;
    render_model(&model, artifact)
}

/// Render and validate an already-normalized model.
pub fn render_model(model: &Model, artifact: Artifact) -> Result<String> {
    let source = match artifact {
        Artifact::Tables => render_tables(model)?,
        Artifact::Functions => render_functions(model)?,
    };
    validate(&source, artifact)?;
    Ok(source)
}
