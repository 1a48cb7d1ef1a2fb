//! Renderer for stored-function bindings.

use sqbind_ir::{Function, Model};

use crate::{
    builder::CodeBuilder,
    config::Artifact,
    error::{Error, Result},
};

use super::{check_package_name, write_header};

/// Render every function binding of the model into one source file.
pub fn render_functions(model: &Model) -> Result<String> {
    check_package_name(model, Artifact::Functions)?;

    let mut builder = write_header(CodeBuilder::new(), model, Artifact::Functions);
    for function in &model.functions {
        builder = render_function(builder.blank(), function)?;
    }
    Ok(builder.build())
}

fn render_function(builder: CodeBuilder, function: &Function) -> Result<CodeBuilder> {
    let qualified = format!("{}.{}", function.schema, function.name);
    let untyped = function.untyped_constructor();

    // typed parameter list, positional in declared order
    let mut typed_params = Vec::with_capacity(function.arguments.len());
    for argument in &function.arguments {
        let native = argument.native.ok_or_else(|| Error::Render {
            artifact: Artifact::Functions.as_str(),
            message: format!(
                "argument '{}' of {} has no native type",
                argument.name, qualified
            ),
        })?;
        typed_params.push(format!("{}: {}", argument.field_name, native.rust_type()));
    }
    let untyped_params: Vec<String> = function
        .arguments
        .iter()
        .map(|argument| format!("{}: sq::Arg", argument.field_name))
        .collect();
    let forwarded: Vec<String> = function
        .arguments
        .iter()
        .map(|argument| format!("sq::Arg::from({})", argument.field_name))
        .collect();
    let arg_names: Vec<&str> = function
        .arguments
        .iter()
        .map(|argument| argument.field_name.as_str())
        .collect();

    Ok(builder
        // struct declaration
        .doc(&format!(
            "{} references the {} function.",
            function.struct_name, qualified
        ))
        .line("#[derive(Clone)]")
        .block(&format!("pub struct {} {{", function.struct_name), "}", |b| {
            b.line("pub function_info: sq::FunctionInfo,").each(&function.results, |b, result| {
                b.line(&format!(
                    "pub {}: sq::{},",
                    result.field_name,
                    result.kind.field_type()
                ))
            })
        })
        .blank()
        // typed constructor delegating to the untyped escape hatch
        .doc(&format!(
            "{} creates an invocation of the {} function.",
            function.constructor, qualified
        ))
        .block(
            &format!(
                "pub fn {}({}) -> {} {{",
                function.constructor,
                typed_params.join(", "),
                function.struct_name
            ),
            "}",
            |b| b.line(&format!("{}({})", untyped, forwarded.join(", "))),
        )
        .blank()
        // untyped constructor: arguments are tagged values, so callers can
        // pass expressions instead of literals
        .doc(&format!(
            "{} creates an invocation of the {} function from untyped arguments.",
            untyped, qualified
        ))
        .block(
            &format!(
                "pub fn {}({}) -> {} {{",
                untyped,
                untyped_params.join(", "),
                function.struct_name
            ),
            "}",
            |b| {
                b.line(&format!(
                    "let info = sq::FunctionInfo::new({:?}, {:?}, vec![{}]);",
                    function.schema,
                    function.name,
                    arg_names.join(", ")
                ))
                .block(&format!("{} {{", function.struct_name), "}", |b| {
                    b.each(&function.results, |b, result| {
                        b.line(&format!(
                            "{}: sq::{}::new({:?}, &info),",
                            result.field_name,
                            result.kind.field_type(),
                            result.name
                        ))
                    })
                    .line("function_info: info,")
                })
            },
        )
        .blank()
        // aliasing method, copy semantics
        .block(&format!("impl {} {{", function.struct_name), "}", |b| {
            b.doc("As returns a copy of the function invocation under the given alias.")
                .block("pub fn As(mut self, alias: &str) -> Self {", "}", |b| {
                    b.line("self.function_info.set_alias(alias);").line("self")
                })
        }))
}

#[cfg(test)]
mod tests {
    use sqbind_ir::{FieldKind, FunctionField, NativeType};

    use super::*;

    fn insert_user_model() -> Model {
        Model {
            dialect: "postgres".to_string(),
            package_name: "functions".to_string(),
            imports: vec!["use structured_query as sq;".to_string()],
            tables: vec![],
            functions: vec![Function {
                name: "insert_user".to_string(),
                schema: "public".to_string(),
                struct_name: "FUNCTION_INSERT_USER".to_string(),
                constructor: "INSERT_USER".to_string(),
                arguments: vec![
                    FunctionField {
                        name: "first_name".to_string(),
                        raw_type: "text".to_string(),
                        kind: FieldKind::String,
                        native: Some(NativeType::Text),
                        field_name: "first_name".to_string(),
                    },
                    FunctionField {
                        name: "date_created".to_string(),
                        raw_type: "timestamp".to_string(),
                        kind: FieldKind::Time,
                        native: Some(NativeType::Time),
                        field_name: "date_created".to_string(),
                    },
                ],
                results: vec![FunctionField {
                    name: "user_id".to_string(),
                    raw_type: "integer".to_string(),
                    kind: FieldKind::Number,
                    native: None,
                    field_name: "USER_ID".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_render_insert_user_function() {
        let out = render_functions(&insert_user_model()).unwrap();

        let expected = r#"// Code generated by 'sqbind-postgres functions'; DO NOT EDIT.
#![allow(non_camel_case_types, non_snake_case, dead_code)]

use structured_query as sq;

/// FUNCTION_INSERT_USER references the public.insert_user function.
#[derive(Clone)]
pub struct FUNCTION_INSERT_USER {
    pub function_info: sq::FunctionInfo,
    pub USER_ID: sq::NumberField,
}

/// INSERT_USER creates an invocation of the public.insert_user function.
pub fn INSERT_USER(first_name: String, date_created: sq::Timestamp) -> FUNCTION_INSERT_USER {
    INSERT_USER_(sq::Arg::from(first_name), sq::Arg::from(date_created))
}

/// INSERT_USER_ creates an invocation of the public.insert_user function from untyped arguments.
pub fn INSERT_USER_(first_name: sq::Arg, date_created: sq::Arg) -> FUNCTION_INSERT_USER {
    let info = sq::FunctionInfo::new("public", "insert_user", vec![first_name, date_created]);
    FUNCTION_INSERT_USER {
        USER_ID: sq::NumberField::new("user_id", &info),
        function_info: info,
    }
}

impl FUNCTION_INSERT_USER {
    /// As returns a copy of the function invocation under the given alias.
    pub fn As(mut self, alias: &str) -> Self {
        self.function_info.set_alias(alias);
        self
    }
}
"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_zero_argument_function() {
        let mut model = insert_user_model();
        model.functions[0].arguments.clear();

        let out = render_functions(&model).unwrap();
        assert!(out.contains("pub fn INSERT_USER() -> FUNCTION_INSERT_USER {\n    INSERT_USER_()\n}"));
        assert!(out.contains("sq::FunctionInfo::new(\"public\", \"insert_user\", vec![]);"));
    }

    #[test]
    fn test_missing_native_type_is_render_error() {
        let mut model = insert_user_model();
        model.functions[0].arguments[0].native = None;

        match render_functions(&model).unwrap_err() {
            Error::Render { message, .. } => {
                assert!(message.contains("first_name"));
            }
            other => panic!("expected Render, got {:?}", other),
        }
    }
}
