use anyhow::Result;
use lattice_check_gen::{write_configs, GeneratorConfig};

use crate::cli::GenerateArgs;

use super::EXIT_PASS;

pub(crate) fn run_generate(args: GenerateArgs) -> Result<u8> {
    let config = GeneratorConfig {
        p: args.p,
        vs: args.vs,
        ds: args.ds,
        seed: args.seed,
    };
    let run = write_configs(&config, &args.config_files)?;
    tracing::info!(files = run.configurations.len(), "generated configs");
    Ok(EXIT_PASS)
}
