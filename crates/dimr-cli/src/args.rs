use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the dimr binary.
#[derive(Parser, Debug)]
#[command(
    name = "dimr",
    version,
    about = "Resolve interface implementations and report diagnostics for a compilation manifest"
)]
pub struct CliArgs {
    /// Path to the JSON compilation manifest.
    pub manifest: PathBuf,

    /// Assembly to report on. Defaults to the last assembly of the manifest.
    #[arg(short = 'a', long)]
    pub assembly: Option<String>,

    /// Print which member implements each interface member.
    #[arg(long)]
    pub implementations: bool,

    /// Write the report as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Enable color in text output. Defaults to whether stdout is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,
}
