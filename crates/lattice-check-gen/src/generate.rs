use std::collections::HashSet;
use std::path::Path;

use lattice_check_ir::types::{Configuration, Params, Value};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::GeneratorConfig;
use crate::rng::generator_rng;

/// Pool values are drawn from `[0, DOMAIN_SIZE)`.
pub const DOMAIN_SIZE: Value = 1 << 31;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("`ds` = {ds} exceeds the {} distinct values available to a pool", DOMAIN_SIZE)]
    DomainTooSmall { ds: usize },

    #[error("Failed to write config file `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Everything one invocation produced: the pools and one configuration per
/// destination.
#[derive(Debug, Clone)]
pub struct GeneratedRun {
    pub params: Params,
    /// `pools[n - 1]` holds the `ds` distinct values instance `n` draws from.
    pub pools: Vec<Vec<Value>>,
    pub configurations: Vec<Configuration>,
}

/// Produces satisfiable configuration sets.
///
/// Each instance gets one pool of `ds` distinct values per invocation, and
/// every process proposes a non-empty subset of it. The union of proposals
/// per instance therefore never exceeds `ds`.
pub struct ConfigGenerator {
    params: Params,
    rng: ChaCha8Rng,
}

impl ConfigGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        Self::with_rng(config.params(), generator_rng(config.seed))
    }

    pub fn with_rng(params: Params, rng: ChaCha8Rng) -> Result<Self, GenerateError> {
        if params.ds > DOMAIN_SIZE as usize {
            return Err(GenerateError::DomainTooSmall { ds: params.ds });
        }
        Ok(Self { params, rng })
    }

    pub fn params(&self) -> Params {
        self.params
    }

    /// Generate one configuration per source identifier.
    ///
    /// Pools are drawn once and shared by all configurations of the call.
    pub fn generate<S: AsRef<str>>(&mut self, sources: &[S]) -> GeneratedRun {
        let params = self.params;
        let pools = draw_pools(&mut self.rng, params.p, params.ds);

        let configurations = sources
            .iter()
            .map(|source| {
                let proposals = pools
                    .iter()
                    .map(|pool| draw_proposal(&mut self.rng, pool, params.vs))
                    .collect();
                Configuration::new(source.as_ref(), params, proposals)
            })
            .collect();

        GeneratedRun {
            params,
            pools,
            configurations,
        }
    }
}

/// Draw `p` pools of `ds` distinct values each.
pub fn draw_pools<R: Rng + ?Sized>(rng: &mut R, p: usize, ds: usize) -> Vec<Vec<Value>> {
    (0..p).map(|_| draw_pool(&mut *rng, ds)).collect()
}

/// `ds` distinct values, uniformly without replacement from the domain.
///
/// `ds` must not exceed `DOMAIN_SIZE`.
fn draw_pool<R: Rng + ?Sized>(rng: &mut R, ds: usize) -> Vec<Value> {
    // Rejection keeps memory proportional to `ds`, not to the domain.
    let mut seen = HashSet::with_capacity(ds);
    let mut pool = Vec::with_capacity(ds);
    while pool.len() < ds {
        let value = rng.gen_range(0..DOMAIN_SIZE);
        if seen.insert(value) {
            pool.push(value);
        }
    }
    pool
}

/// A uniformly sized, non-empty random subset of `pool` with at most `vs`
/// values. Empty when `vs` or the pool is zero-sized.
pub fn draw_proposal<R: Rng + ?Sized>(rng: &mut R, pool: &[Value], vs: usize) -> Vec<Value> {
    let max = vs.min(pool.len());
    if max == 0 {
        return Vec::new();
    }
    let size = rng.gen_range(1..=max);
    pool.choose_multiple(rng, size).copied().collect()
}

/// Generate and write one configuration file per destination.
pub fn write_configs<P: AsRef<Path>>(
    config: &GeneratorConfig,
    destinations: &[P],
) -> Result<GeneratedRun, GenerateError> {
    let sources: Vec<String> = destinations
        .iter()
        .map(|path| path.as_ref().display().to_string())
        .collect();

    let mut generator = ConfigGenerator::new(config)?;
    let run = generator.generate(&sources);

    for (path, configuration) in destinations.iter().zip(&run.configurations) {
        std::fs::write(path, configuration.to_string()).map_err(|source| GenerateError::Io {
            path: configuration.source.clone(),
            source,
        })?;
    }

    tracing::info!(
        files = destinations.len(),
        params = %run.params,
        seeded = config.seed.is_some(),
        "wrote config files"
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_proposal_clamped_to_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pool = vec![10, 20];
        for _ in 0..50 {
            let proposal = draw_proposal(&mut rng, &pool, 5);
            assert!(!proposal.is_empty() && proposal.len() <= 2);
        }
    }

    #[test]
    fn test_zero_bounds_give_empty_proposals() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(draw_proposal(&mut rng, &[1, 2, 3], 0).is_empty());
        assert!(draw_proposal(&mut rng, &[], 3).is_empty());
    }

    #[test]
    fn test_pool_values_distinct_and_in_domain() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pool = draw_pool(&mut rng, 500);
        let distinct: HashSet<Value> = pool.iter().copied().collect();
        assert_eq!(distinct.len(), 500);
        assert!(pool.iter().all(|&value| value < DOMAIN_SIZE));
    }

    #[test]
    fn test_oversized_pool_rejected() {
        let rng = ChaCha8Rng::seed_from_u64(7);
        let result = ConfigGenerator::with_rng(Params::new(1, 1, DOMAIN_SIZE as usize + 1), rng);
        assert!(matches!(result, Err(GenerateError::DomainTooSmall { .. })));
    }
}
