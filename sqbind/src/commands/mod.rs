mod generate;

use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use sqbind_codegen::Artifact;

#[derive(Parser)]
#[command(name = "sqbind")]
#[command(version)]
#[command(about = "Generate typed SQL bindings from introspected schema metadata")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Tables(cmd) => cmd.run(Artifact::Tables),
            Commands::Functions(cmd) => cmd.run(Artifact::Functions),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate table bindings from a raw schema dump
    Tables(GenerateCommand),

    /// Generate stored-function bindings from a raw schema dump
    Functions(GenerateCommand),
}
