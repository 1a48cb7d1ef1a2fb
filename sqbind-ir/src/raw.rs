//! Raw introspection descriptors.
//!
//! These are the shapes the external introspection step hands to the
//! normalizer, typically deserialized from a JSON document. Nothing in
//! here is derived: names and types are exactly as the database reported
//! them.

use serde::{Deserialize, Serialize};

/// A complete raw schema dump for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchema {
    #[serde(default)]
    pub tables: Vec<RawTable>,
    #[serde(default)]
    pub functions: Vec<RawFunction>,
}

/// Whether a relation is a base table or a view.
///
/// Only used when wording documentation comments; both kinds generate
/// identical bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    #[serde(rename = "BASE TABLE")]
    BaseTable,
    #[serde(rename = "VIEW")]
    View,
}

impl RelationKind {
    /// The noun used in generated doc comments.
    pub fn noun(&self) -> &'static str {
        match self {
            RelationKind::BaseTable => "table",
            RelationKind::View => "view",
        }
    }
}

/// A table or view as reported by introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    pub schema: String,
    pub name: String,
    #[serde(rename = "kind")]
    pub relation_kind: RelationKind,
    #[serde(default)]
    pub columns: Vec<RawColumn>,
}

/// A column as reported by introspection. Column order is the table's
/// declared order and is preserved through the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawColumn {
    pub name: String,
    pub raw_type: String,
}

/// A stored function as reported by introspection. Argument order is the
/// call order and is preserved exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFunction {
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<RawField>,
    #[serde(default)]
    pub results: Vec<RawField>,
}

/// A function argument or result column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawField {
    pub name: String,
    pub raw_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_kind_noun() {
        assert_eq!(RelationKind::BaseTable.noun(), "table");
        assert_eq!(RelationKind::View.noun(), "view");
    }

    #[test]
    fn test_deserialize_raw_schema() {
        let json = r#"{
            "tables": [
                {
                    "schema": "public",
                    "name": "users",
                    "kind": "BASE TABLE",
                    "columns": [
                        { "name": "id", "raw_type": "integer" },
                        { "name": "first_name", "raw_type": "text" }
                    ]
                }
            ],
            "functions": [
                {
                    "schema": "public",
                    "name": "insert_user",
                    "arguments": [
                        { "name": "first_name", "raw_type": "text" }
                    ],
                    "results": [
                        { "name": "user_id", "raw_type": "integer" }
                    ]
                }
            ]
        }"#;

        let schema: RawSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.tables[0].relation_kind, RelationKind::BaseTable);
        assert_eq!(schema.tables[0].columns[1].name, "first_name");
        assert_eq!(schema.functions[0].results[0].raw_type, "integer");
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let schema: RawSchema = serde_json::from_str("{}").unwrap();
        assert!(schema.tables.is_empty());
        assert!(schema.functions.is_empty());
    }
}
