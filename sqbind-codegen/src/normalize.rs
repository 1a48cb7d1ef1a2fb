//! Schema normalization: raw introspection output to canonical model.
//!
//! Normalization is where every identifier is derived and every raw type
//! is mapped. It fails fast: the first unmapped type aborts the run, so a
//! partially typed binding set can never reach the renderers.

use sqbind_ir::{
    Function, FunctionField, Model, RawFunction, RawSchema, RawTable, Table, TableField,
};

use crate::{
    config::GenerateConfig,
    dialect::Dialect,
    error::{Error, Result},
    naming::IdentifierAllocator,
};

/// Build the canonical model for one generation run.
///
/// Tables and functions are processed in sorted order of their
/// schema-qualified names (functions additionally by argument types, so
/// overloads order stably). Struct names and constructor names each share
/// one allocator across both artifact kinds, since both land in the same
/// generated module namespace. Column and argument order is preserved
/// exactly as introspected.
pub fn normalize(
    schema: &RawSchema,
    dialect: &dyn Dialect,
    config: &GenerateConfig,
) -> Result<Model> {
    let mut structs = IdentifierAllocator::new();
    let mut constructors = IdentifierAllocator::new();

    let mut raw_tables: Vec<&RawTable> = schema.tables.iter().collect();
    raw_tables.sort_by(|a, b| (&a.schema, &a.name).cmp(&(&b.schema, &b.name)));

    let mut tables = Vec::with_capacity(raw_tables.len());
    for raw in raw_tables {
        tables.push(normalize_table(raw, dialect, &mut structs, &mut constructors)?);
    }

    let mut raw_functions: Vec<&RawFunction> = schema.functions.iter().collect();
    raw_functions.sort_by(|a, b| {
        let key = |f: &RawFunction| {
            (
                f.schema.clone(),
                f.name.clone(),
                f.arguments.iter().map(|a| a.raw_type.clone()).collect::<Vec<_>>(),
            )
        };
        key(a).cmp(&key(b))
    });

    let mut functions = Vec::with_capacity(raw_functions.len());
    for raw in raw_functions {
        functions.push(normalize_function(raw, dialect, &mut structs, &mut constructors)?);
    }

    Ok(Model {
        dialect: dialect.name().to_string(),
        package_name: config.package_name.clone(),
        imports: config.imports.clone(),
        tables,
        functions,
    })
}

fn normalize_table(
    raw: &RawTable,
    dialect: &dyn Dialect,
    structs: &mut IdentifierAllocator,
    constructors: &mut IdentifierAllocator,
) -> Result<Table> {
    let naming = dialect.naming();
    let qualifier = naming.qualifier(&raw.schema);

    let struct_name = structs.claim(&naming.table_struct_name(&raw.name), &qualifier)?;
    let constructor = constructors.claim(&naming.table_constructor_name(&raw.name), &qualifier)?;

    let mut field_names = IdentifierAllocator::new();
    let mut fields = Vec::with_capacity(raw.columns.len());
    for (position, column) in raw.columns.iter().enumerate() {
        let kind = dialect.column_kind(&column.raw_type).ok_or_else(|| {
            Error::UnsupportedType {
                dialect: dialect.name().to_string(),
                raw_type: column.raw_type.clone(),
                location: format!("{}.{}.{}", raw.schema, raw.name, column.name),
            }
        })?;
        // column order is fixed, so a positional suffix is deterministic
        let field_name =
            field_names.claim(&naming.field_name(&column.name), &(position + 1).to_string())?;
        fields.push(TableField {
            name: column.name.clone(),
            raw_type: column.raw_type.clone(),
            kind,
            field_name,
        });
    }

    Ok(Table {
        name: raw.name.clone(),
        schema: raw.schema.clone(),
        relation_kind: raw.relation_kind,
        struct_name,
        constructor,
        fields,
    })
}

fn normalize_function(
    raw: &RawFunction,
    dialect: &dyn Dialect,
    structs: &mut IdentifierAllocator,
    constructors: &mut IdentifierAllocator,
) -> Result<Function> {
    let naming = dialect.naming();
    let qualifier = naming.qualifier(&raw.schema);

    let struct_name = structs.claim(&naming.function_struct_name(&raw.name), &qualifier)?;
    // the untyped companion constructor is reserved alongside the typed one
    let constructor =
        constructors.claim_pair(&naming.function_constructor_name(&raw.name), &qualifier)?;

    let mut parameter_names = IdentifierAllocator::new();
    let mut arguments = Vec::with_capacity(raw.arguments.len());
    for (position, argument) in raw.arguments.iter().enumerate() {
        let (kind, native) = dialect.argument_type(&argument.raw_type).ok_or_else(|| {
            Error::UnsupportedType {
                dialect: dialect.name().to_string(),
                raw_type: argument.raw_type.clone(),
                location: format!("{}.{}({})", raw.schema, raw.name, argument.name),
            }
        })?;
        let field_name = parameter_names
            .claim(&naming.parameter_name(&argument.name), &(position + 1).to_string())?;
        arguments.push(FunctionField {
            name: argument.name.clone(),
            raw_type: argument.raw_type.clone(),
            kind,
            native: Some(native),
            field_name,
        });
    }

    let mut result_names = IdentifierAllocator::new();
    let mut results = Vec::with_capacity(raw.results.len());
    for (position, result) in raw.results.iter().enumerate() {
        let kind = dialect.column_kind(&result.raw_type).ok_or_else(|| {
            Error::UnsupportedType {
                dialect: dialect.name().to_string(),
                raw_type: result.raw_type.clone(),
                location: format!("{}.{}.{}", raw.schema, raw.name, result.name),
            }
        })?;
        let field_name =
            result_names.claim(&naming.field_name(&result.name), &(position + 1).to_string())?;
        results.push(FunctionField {
            name: result.name.clone(),
            raw_type: result.raw_type.clone(),
            kind,
            native: None,
            field_name,
        });
    }

    Ok(Function {
        name: raw.name.clone(),
        schema: raw.schema.clone(),
        struct_name,
        constructor,
        arguments,
        results,
    })
}
