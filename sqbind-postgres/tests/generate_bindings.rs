//! End-to-end generation tests for the PostgreSQL dialect.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use sqbind_codegen::{generate, Artifact, Error, GenerateConfig};
use sqbind_ir::{RawColumn, RawField, RawFunction, RawSchema, RawTable, RelationKind};
use sqbind_postgres::PostgresDialect;

fn config(package: &str) -> GenerateConfig {
    GenerateConfig::new(package, vec!["use structured_query as sq;".to_string()])
}

fn users_table(schema: &str) -> RawTable {
    RawTable {
        schema: schema.to_string(),
        name: "users".to_string(),
        relation_kind: RelationKind::BaseTable,
        columns: vec![
            RawColumn {
                name: "id".to_string(),
                raw_type: "integer".to_string(),
            },
            RawColumn {
                name: "first_name".to_string(),
                raw_type: "text".to_string(),
            },
            RawColumn {
                name: "date_created".to_string(),
                raw_type: "timestamp".to_string(),
            },
        ],
    }
}

fn insert_user_function() -> RawFunction {
    RawFunction {
        schema: "public".to_string(),
        name: "insert_user".to_string(),
        arguments: vec![
            RawField {
                name: "first_name".to_string(),
                raw_type: "text".to_string(),
            },
            RawField {
                name: "date_created".to_string(),
                raw_type: "timestamp".to_string(),
            },
        ],
        results: vec![RawField {
            name: "user_id".to_string(),
            raw_type: "integer".to_string(),
        }],
    }
}

#[test]
fn test_users_table_bindings() {
    let schema = RawSchema {
        tables: vec![users_table("public")],
        functions: vec![],
    };

    let out = generate(&schema, &PostgresDialect, &config("tables"), Artifact::Tables).unwrap();

    assert!(out.starts_with("// Code generated by 'sqbind-postgres tables'; DO NOT EDIT.\n"));
    assert!(out.contains("pub struct USERS {"));
    assert!(out.contains("pub ID: sq::NumberField,"));
    assert!(out.contains("pub FIRST_NAME: sq::StringField,"));
    assert!(out.contains("pub DATE_CREATED: sq::TimeField,"));
    assert!(out.contains("pub fn TABLE_USERS() -> USERS {"));
    assert!(out.contains("pub fn As(mut self, alias: &str) -> Self {"));

    insta::assert_snapshot!("postgres_users_table", out);
}

#[test]
fn test_insert_user_function_bindings() {
    let schema = RawSchema {
        tables: vec![],
        functions: vec![insert_user_function()],
    };

    let out = generate(
        &schema,
        &PostgresDialect,
        &config("functions"),
        Artifact::Functions,
    )
    .unwrap();

    // typed constructor: positional native-typed parameters in declared order
    assert!(out.contains(
        "pub fn INSERT_USER(first_name: String, date_created: sq::Timestamp) -> FUNCTION_INSERT_USER {"
    ));
    // delegating to the untyped escape hatch
    assert!(out.contains("INSERT_USER_(sq::Arg::from(first_name), sq::Arg::from(date_created))"));
    assert!(out.contains("pub USER_ID: sq::NumberField,"));

    insta::assert_snapshot!("postgres_insert_user_function", out);
}

#[test]
fn test_generation_is_deterministic() {
    let ordered = RawSchema {
        tables: vec![users_table("audit"), users_table("public")],
        functions: vec![insert_user_function()],
    };
    let shuffled = RawSchema {
        tables: vec![users_table("public"), users_table("audit")],
        functions: vec![insert_user_function()],
    };

    for artifact in [Artifact::Tables, Artifact::Functions] {
        let package = artifact.as_str();
        let a = generate(&ordered, &PostgresDialect, &config(package), artifact).unwrap();
        let b = generate(&ordered, &PostgresDialect, &config(package), artifact).unwrap();
        let c = generate(&shuffled, &PostgresDialect, &config(package), artifact).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn test_colliding_tables_get_distinct_names() {
    let schema = RawSchema {
        tables: vec![users_table("public"), users_table("audit")],
        functions: vec![],
    };

    let out = generate(&schema, &PostgresDialect, &config("tables"), Artifact::Tables).unwrap();

    // audit sorts first and keeps the bare name; public gets the suffix
    assert!(out.contains("/// USERS references the audit.users table."));
    assert!(out.contains("pub struct USERS_PUBLIC {"));
    assert!(out.contains("pub fn TABLE_USERS_PUBLIC() -> USERS_PUBLIC {"));

    // both bindings still parse
    syn::parse_file(&out).unwrap();
}

#[test]
fn test_reserved_word_arguments_stay_valid() {
    let schema = RawSchema {
        tables: vec![],
        functions: vec![RawFunction {
            schema: "public".to_string(),
            name: "touch".to_string(),
            arguments: vec![
                RawField {
                    name: "self".to_string(),
                    raw_type: "text".to_string(),
                },
                RawField {
                    name: "type".to_string(),
                    raw_type: "integer".to_string(),
                },
            ],
            results: vec![],
        }],
    };

    let out = generate(
        &schema,
        &PostgresDialect,
        &config("functions"),
        Artifact::Functions,
    )
    .unwrap();

    // `self` has no raw-identifier form and is suffixed; `type` is escaped
    assert!(out.contains("pub fn TOUCH(self_: String, r#type: i64) -> FUNCTION_TOUCH {"));
    assert!(out.contains("TOUCH_(sq::Arg::from(self_), sq::Arg::from(r#type))"));

    syn::parse_file(&out).unwrap();
}

#[test]
fn test_unsupported_type_aborts_run() {
    let mut table = users_table("public");
    table.columns.push(RawColumn {
        name: "location".to_string(),
        raw_type: "geometry".to_string(),
    });
    let schema = RawSchema {
        tables: vec![table],
        functions: vec![],
    };

    let err = generate(&schema, &PostgresDialect, &config("tables"), Artifact::Tables).unwrap_err();
    match err {
        Error::UnsupportedType {
            raw_type, location, ..
        } => {
            assert_eq!(raw_type, "geometry");
            assert_eq!(location, "public.users.location");
        }
        other => panic!("expected UnsupportedType, got {:?}", other),
    }
}

#[test]
fn test_generated_output_parses() {
    let schema = RawSchema {
        tables: vec![users_table("public")],
        functions: vec![insert_user_function()],
    };

    for artifact in [Artifact::Tables, Artifact::Functions] {
        let out = generate(
            &schema,
            &PostgresDialect,
            &config(artifact.as_str()),
            artifact,
        )
        .unwrap();
        syn::parse_file(&out).unwrap();
    }
}
