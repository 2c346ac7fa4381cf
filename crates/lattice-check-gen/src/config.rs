//! Generator configuration: shared run parameters and an optional seed.
use lattice_check_ir::types::Params;
use serde::{Deserialize, Serialize};

/// Parameters for one generator invocation.
///
/// Every file written by one invocation carries the same `p vs ds` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of processes and agreement instances.
    pub p: usize,
    /// Maximum values one process proposes per instance.
    pub vs: usize,
    /// Size of each instance's value pool.
    pub ds: usize,
    /// Seed for reproducible fixtures. None = fresh entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(p: usize, vs: usize, ds: usize) -> Self {
        Self {
            p,
            vs,
            ds,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn params(&self) -> Params {
        Params::new(self.p, self.vs, self.ds)
    }
}
