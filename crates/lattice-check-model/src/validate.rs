//! Structural checks over the configuration files of one run.
//!
//! Checks run from cheap and local to the cross-file union bound, so the
//! first violation reported is always the most precise one.

use std::collections::BTreeSet;

use lattice_check_ir::types::{Configuration, Params, Value};

use crate::violation::{first, into_result, CheckMode, Collector, Halt, Violation};

/// Check configurations in process order, stopping at the first violation.
pub fn check_configs(configs: &[Configuration]) -> Result<(), Violation> {
    first(collect(configs, CheckMode::FailFast))
}

/// Run every configuration check and return all violations, in check order.
pub fn audit_configs(configs: &[Configuration]) -> Vec<Violation> {
    collect(configs, CheckMode::Exhaustive)
}

pub fn validate_configs(configs: &[Configuration], mode: CheckMode) -> Result<(), Vec<Violation>> {
    into_result(collect(configs, mode))
}

/// Parameters every configuration of the run is expected to carry.
///
/// These are the first configuration's; `None` for an empty run.
pub fn shared_params(configs: &[Configuration]) -> Option<Params> {
    configs.first().map(|config| config.params)
}

/// Union of all processes' proposals, per instance, for instances `1..=p`.
///
/// Index `n - 1` holds instance `n`. Configurations with too few proposals
/// contribute nothing to the missing instances.
pub fn instance_unions(configs: &[Configuration], p: usize) -> Vec<BTreeSet<Value>> {
    (0..p)
        .map(|i| {
            configs
                .iter()
                .filter_map(|config| config.proposals.get(i))
                .flatten()
                .copied()
                .collect()
        })
        .collect()
}

fn collect(configs: &[Configuration], mode: CheckMode) -> Vec<Violation> {
    let mut collector = Collector::new(mode);
    // A halted pass has already recorded the violation that stopped it.
    let _ = run_checks(configs, &mut collector);
    collector.finish()
}

fn run_checks(configs: &[Configuration], collector: &mut Collector) -> Result<(), Halt> {
    let Some(params) = shared_params(configs) else {
        return Ok(());
    };
    tracing::debug!(configs = configs.len(), %params, "checking configurations");

    check_parameters(configs, params, collector)?;
    check_proposal_counts(configs, params.p, collector)?;
    check_value_bounds(configs, params.vs, collector)?;
    check_distinct_bounds(configs, params, collector)
}

/// Every configuration carries the same `p vs ds` header.
fn check_parameters(
    configs: &[Configuration],
    expected: Params,
    collector: &mut Collector,
) -> Result<(), Halt> {
    let first_file = &configs[0].source;
    for config in &configs[1..] {
        if config.params != expected {
            collector.record(Violation::InconsistentParameters {
                first_file: first_file.clone(),
                expected,
                file: config.source.clone(),
                found: config.params,
            })?;
        }
    }
    Ok(())
}

/// Every configuration has exactly one proposal per instance.
fn check_proposal_counts(
    configs: &[Configuration],
    p: usize,
    collector: &mut Collector,
) -> Result<(), Halt> {
    for config in configs {
        if config.proposals.len() != p {
            collector.record(Violation::WrongProposalCount {
                file: config.source.clone(),
                expected: p,
                found: config.proposals.len(),
            })?;
        }
    }
    Ok(())
}

/// No single proposal holds more than `vs` values.
fn check_value_bounds(
    configs: &[Configuration],
    vs: usize,
    collector: &mut Collector,
) -> Result<(), Halt> {
    for config in configs {
        for (i, proposal) in config.proposals.iter().enumerate() {
            if proposal.len() > vs {
                collector.record(Violation::ProposalExceedsValueBound {
                    file: config.source.clone(),
                    instance: i + 1,
                    found: proposal.len(),
                    vs,
                })?;
            }
        }
    }
    Ok(())
}

/// No instance sees more than `ds` distinct values across all processes.
fn check_distinct_bounds(
    configs: &[Configuration],
    params: Params,
    collector: &mut Collector,
) -> Result<(), Halt> {
    for (i, union) in instance_unions(configs, params.p).iter().enumerate() {
        if union.len() > params.ds {
            collector.record(Violation::InstanceExceedsDistinctBound {
                instance: i + 1,
                found: union.len(),
                ds: params.ds,
            })?;
        }
    }
    Ok(())
}
