use anyhow::{Context, Result};
use lattice_check_core::{verify_files, VerificationReport};
use lattice_check_model::CheckMode;

use crate::cli::ValidateArgs;

use super::{EXIT_PASS, EXIT_VIOLATION};

pub(crate) fn run_validate(args: ValidateArgs) -> Result<u8> {
    let mode = if args.exhaustive {
        CheckMode::Exhaustive
    } else {
        CheckMode::FailFast
    };

    let verdict = verify_files(&args.configs, &args.outputs, mode)?;

    if let Some(path) = &args.json_report {
        let json = VerificationReport::from_verdict(&verdict).to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write JSON report to {}", path.display()))?;
    }

    for violation in &verdict.violations {
        eprintln!("{violation}");
    }

    Ok(if verdict.passed() {
        EXIT_PASS
    } else {
        EXIT_VIOLATION
    })
}
