//! Output validation.
//!
//! Rendered source is parsed with the Rust grammar before anything is
//! handed to a writer. A parse failure is an engine bug surfacing, never
//! a schema problem, and it is always fatal.

use crate::{
    config::Artifact,
    error::{Error, Result},
};

/// Check that `source` parses as a Rust file.
pub fn validate(source: &str, artifact: Artifact) -> Result<()> {
    match syn::parse_file(source) {
        Ok(_) => Ok(()),
        Err(source) => Err(Error::Validation {
            artifact: artifact.as_str(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_source_passes() {
        let source = "pub struct USERS {\n    pub id: i64,\n}\n";
        assert!(validate(source, Artifact::Tables).is_ok());
    }

    #[test]
    fn test_inner_attributes_and_comments_pass() {
        let source = "// Code generated by 'sqbind-postgres tables'; DO NOT EDIT.\n\
                      #![allow(non_camel_case_types, non_snake_case, dead_code)]\n\
                      \n\
                      use structured_query as sq;\n";
        assert!(validate(source, Artifact::Tables).is_ok());
    }

    #[test]
    fn test_invalid_source_is_validation_error() {
        let err = validate("pub struct {", Artifact::Tables).unwrap_err();
        match err {
            Error::Validation { artifact, .. } => assert_eq!(artifact, "tables"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
