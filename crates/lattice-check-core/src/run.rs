use std::path::Path;

use lattice_check_ir::types::{Configuration, Output};
use lattice_check_model::properties::validate_outputs;
use lattice_check_model::validate::{shared_params, validate_configs};
use lattice_check_model::violation::{CheckMode, Violation};

use crate::load::{load_configurations, load_outputs, LoadError};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("No config or output files were given")]
    NoProcesses,

    #[error("Got {configs} config files but {outputs} output files")]
    ProcessCountMismatch { configs: usize, outputs: usize },

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Outcome of checking one run.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub mode: CheckMode,
    /// Number of (configuration, output) pairs checked.
    pub processes: usize,
    /// Number of agreement instances, `p` of the first configuration.
    pub instances: usize,
    /// Violations in check order. At most one in fail-fast mode.
    pub violations: Vec<Violation>,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn first_violation(&self) -> Option<&Violation> {
        self.violations.first()
    }
}

/// Check a run: configurations first, then the outputs against them.
///
/// `configs[i]` and `outputs[i]` belong to the same process. In fail-fast
/// mode the outputs are only checked once the configurations pass.
pub fn verify(
    configs: &[Configuration],
    outputs: &[Output],
    mode: CheckMode,
) -> Result<Verdict, RunError> {
    check_pairing(configs.len(), outputs.len())?;

    let span = tracing::info_span!("verify", processes = configs.len(), ?mode);
    let _enter = span.enter();

    let mut violations = validate_configs(configs, mode).err().unwrap_or_default();
    if violations.is_empty() || mode == CheckMode::Exhaustive {
        violations.extend(validate_outputs(configs, outputs, mode).err().unwrap_or_default());
    }

    let verdict = Verdict {
        mode,
        processes: configs.len(),
        instances: shared_params(configs).map_or(0, |params| params.p),
        violations,
    };
    tracing::info!(
        passed = verdict.passed(),
        violations = verdict.violations.len(),
        "verification finished"
    );
    Ok(verdict)
}

/// Load configuration and output files, then [`verify`] them.
pub fn verify_files<C: AsRef<Path>, O: AsRef<Path>>(
    config_paths: &[C],
    output_paths: &[O],
    mode: CheckMode,
) -> Result<Verdict, RunError> {
    check_pairing(config_paths.len(), output_paths.len())?;

    let configs = load_configurations(config_paths)?;
    let outputs = load_outputs(output_paths)?;
    tracing::debug!(configs = configs.len(), outputs = outputs.len(), "loaded run");

    verify(&configs, &outputs, mode)
}

fn check_pairing(configs: usize, outputs: usize) -> Result<(), RunError> {
    if configs != outputs {
        return Err(RunError::ProcessCountMismatch { configs, outputs });
    }
    if configs == 0 {
        return Err(RunError::NoProcesses);
    }
    Ok(())
}
