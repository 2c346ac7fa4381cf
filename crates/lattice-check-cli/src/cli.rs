//! CLI argument definitions: top-level `Cli` struct and `Commands` enum.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lattice-check")]
#[command(about = "Test-data generator and safety checker for lattice agreement runs")]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Write one randomized, satisfiable config file per process
    Generate(GenerateArgs),

    /// Check decided sets against the configs they were produced from
    ///
    /// Config and output files are paired by position: the i-th output
    /// belongs to the process configured by the i-th config.
    Validate(ValidateArgs),
}

#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Number of processes and agreement instances
    #[arg(long, value_parser = positive)]
    pub(crate) p: usize,

    /// Maximum values a process proposes per instance
    #[arg(long, value_parser = positive)]
    pub(crate) vs: usize,

    /// Maximum distinct values per instance across all processes
    #[arg(long, value_parser = positive)]
    pub(crate) ds: usize,

    /// Seed for reproducible config files
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Config files to write, one per process
    #[arg(long = "config-files", required = true, num_args = 1..)]
    pub(crate) config_files: Vec<PathBuf>,
}

#[derive(Args)]
pub(crate) struct ValidateArgs {
    /// Config files, in process order
    #[arg(long, required = true, num_args = 1..)]
    pub(crate) configs: Vec<PathBuf>,

    /// Output files, in the same process order as the configs
    #[arg(long, required = true, num_args = 1..)]
    pub(crate) outputs: Vec<PathBuf>,

    /// Report every violation instead of stopping at the first
    #[arg(long, default_value_t = false)]
    pub(crate) exhaustive: bool,

    /// Optional JSON report output path
    #[arg(long)]
    pub(crate) json_report: Option<PathBuf>,
}

fn positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}
