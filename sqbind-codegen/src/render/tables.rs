//! Renderer for table bindings.

use sqbind_ir::{Model, Table};

use crate::{builder::CodeBuilder, config::Artifact, error::Result};

use super::{check_package_name, write_header};

/// Render every table binding of the model into one source file.
pub fn render_tables(model: &Model) -> Result<String> {
    check_package_name(model, Artifact::Tables)?;

    let mut builder = write_header(CodeBuilder::new(), model, Artifact::Tables);
    for table in &model.tables {
        builder = render_table(builder.blank(), table);
    }
    Ok(builder.build())
}

fn render_table(builder: CodeBuilder, table: &Table) -> CodeBuilder {
    let noun = table.relation_kind.noun();
    let qualified = format!("{}.{}", table.schema, table.name);

    builder
        // struct declaration
        .doc(&format!(
            "{} references the {} {}.",
            table.struct_name, qualified, noun
        ))
        .line("#[derive(Clone)]")
        .block(&format!("pub struct {} {{", table.struct_name), "}", |b| {
            b.line("pub table_info: sq::TableInfo,").each(&table.fields, |b, field| {
                b.line(&format!(
                    "pub {}: sq::{},",
                    field.field_name,
                    field.kind.field_type()
                ))
            })
        })
        .blank()
        // constructor
        .doc(&format!(
            "{} creates an instance of the {} {}.",
            table.constructor, qualified, noun
        ))
        .block(
            &format!("pub fn {}() -> {} {{", table.constructor, table.struct_name),
            "}",
            |b| {
                b.line(&format!(
                    "let info = sq::TableInfo::new({:?}, {:?});",
                    table.schema, table.name
                ))
                .block(&format!("{} {{", table.struct_name), "}", |b| {
                    // `info` is borrowed by every field constructor and
                    // moved into the struct last
                    b.each(&table.fields, |b, field| {
                        b.line(&format!(
                            "{}: sq::{}::new({:?}, &info),",
                            field.field_name,
                            field.kind.field_type(),
                            field.name
                        ))
                    })
                    .line("table_info: info,")
                })
            },
        )
        .blank()
        // aliasing method, copy semantics
        .block(&format!("impl {} {{", table.struct_name), "}", |b| {
            b.doc(&format!("As returns a copy of the {} under the given alias.", noun))
                .block("pub fn As(mut self, alias: &str) -> Self {", "}", |b| {
                    b.line("self.table_info.set_alias(alias);").line("self")
                })
        })
}
