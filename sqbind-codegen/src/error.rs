use miette::Diagnostic;
use thiserror::Error;

/// Result type for sqbind-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured engine errors.
///
/// Every variant is fatal for the run: the engine never produces partial
/// output, and nothing is handed to a writer after a failure.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no {dialect} type mapping for '{raw_type}' at {location}")]
    #[diagnostic(
        code(sqbind::unsupported_type),
        help("the type is outside the dialect's supported set; exclude the relation or extend the dialect")
    )]
    UnsupportedType {
        dialect: String,
        raw_type: String,
        /// Schema-qualified table/column or function/argument path.
        location: String,
    },

    #[error("cannot disambiguate identifier '{identifier}' qualified by '{qualifier}'")]
    #[diagnostic(
        code(sqbind::unresolvable_collision),
        help("the deterministic suffix rule ran out of candidates; this is a bug in sqbind, please report it")
    )]
    UnresolvableCollision {
        identifier: String,
        qualifier: String,
    },

    #[error("cannot render {artifact}: {message}")]
    #[diagnostic(
        code(sqbind::render_error),
        help("the model handed to the renderer is malformed; this is a bug in sqbind, please report it")
    )]
    Render {
        artifact: &'static str,
        message: String,
    },

    #[error("generated {artifact} source is not valid Rust")]
    #[diagnostic(
        code(sqbind::validation_error),
        help("this is a bug in sqbind, please report it; no file was written")
    )]
    Validation {
        artifact: &'static str,
        #[source]
        source: syn::Error,
    },
}
