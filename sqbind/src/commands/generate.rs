use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use sqbind_codegen::{generate, Artifact, Dialect, GenerateConfig};
use sqbind_core::File;
use sqbind_ir::RawSchema;
use sqbind_mysql::MysqlDialect;
use sqbind_postgres::PostgresDialect;

/// Default runtime alias import when no `--import` is given.
const DEFAULT_IMPORT: &str = "use structured_query as sq;";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectKind {
    Postgres,
    Mysql,
}

impl DialectKind {
    fn dialect(&self) -> &'static dyn Dialect {
        match self {
            DialectKind::Postgres => &PostgresDialect,
            DialectKind::Mysql => &MysqlDialect,
        }
    }
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the raw schema dump (JSON, as produced by introspection)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Database dialect of the schema dump
    #[arg(short, long, value_enum)]
    dialect: DialectKind,

    /// Module name of the generated file (defaults to the artifact kind)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Verbatim import line for the generated file (repeatable)
    #[arg(short, long = "import")]
    pub imports: Vec<String>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generation for one artifact kind.
    pub fn run(&self, artifact: Artifact) -> Result<()> {
        let raw = std::fs::read_to_string(&self.schema)
            .wrap_err_with(|| format!("failed to read '{}'", self.schema.display()))?;
        let schema: RawSchema = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("failed to parse '{}'", self.schema.display()))?;

        let package_name = self
            .package
            .clone()
            .unwrap_or_else(|| artifact.as_str().to_string());
        let imports = if self.imports.is_empty() {
            vec![DEFAULT_IMPORT.to_string()]
        } else {
            self.imports.clone()
        };
        let config = GenerateConfig::new(package_name, imports);

        let source = match generate(&schema, self.dialect.dialect(), &config, artifact) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        };

        if self.dry_run {
            println!("{}", source);
            return Ok(());
        }

        let path = self.output.join(format!("{}.rs", config.package_name));
        File::new(&path, source)
            .write()
            .wrap_err("failed to write generated bindings")?;

        println!(
            "Generated: {} ({} tables, {} functions)",
            path.display(),
            schema.tables.len(),
            schema.functions.len()
        );

        Ok(())
    }
}
