use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "leerpad", about = "Cli for the leerpad course content pipeline")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Generate JSON schemas for the content document types
    Schema(Schema),
    /// Validate a course directory and report every violation
    Validate(Validate),
    /// Assemble a course directory into the JSON bundle served to the frontend
    Compile(Compile),
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: String,
}

#[derive(Debug, Parser)]
pub(crate) struct Validate {
    /// Course directory containing course.yaml and modules/
    pub(crate) path: PathBuf,
    #[arg(long)]
    /// Print the report as JSON
    pub(crate) json: bool,
    #[arg(long)]
    /// Treat warnings as errors
    pub(crate) strict: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Compile {
    /// Course directory containing course.yaml and modules/
    pub(crate) path: PathBuf,
    #[arg(short, long)]
    /// Output file, defaults to stdout
    pub(crate) output: Option<PathBuf>,
}
