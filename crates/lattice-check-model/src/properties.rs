//! Safety properties of lattice agreement, checked over the decided sets.
//!
//! For process `i` and agreement `n`, with `I` the proposed and `O` the
//! decided set:
//! - uniqueness: `O_i,n` holds no value twice
//! - self-validity: `I_i,n ⊆ O_i,n`
//! - global-validity: `O_i,n ⊆ ∪_j I_j,n`
//! - consistency: `O_i,n ⊆ O_j,n` or `O_j,n ⊆ O_i,n` for every pair `i, j`
//!
//! The configurations are expected to have passed
//! [`check_configs`](crate::validate::check_configs), and `outputs[i]` is
//! the output of the process configured by `configs[i]`.

use std::collections::BTreeSet;

use lattice_check_ir::types::{Configuration, Output, Value};

use crate::validate::{instance_unions, shared_params};
use crate::violation::{first, into_result, CheckMode, Collector, Halt, Violation};

/// Check outputs against their configurations, stopping at the first violation.
pub fn check_outputs(configs: &[Configuration], outputs: &[Output]) -> Result<(), Violation> {
    first(collect(configs, outputs, CheckMode::FailFast))
}

/// Run every property check and return all violations, in check order.
pub fn audit_outputs(configs: &[Configuration], outputs: &[Output]) -> Vec<Violation> {
    collect(configs, outputs, CheckMode::Exhaustive)
}

pub fn validate_outputs(
    configs: &[Configuration],
    outputs: &[Output],
    mode: CheckMode,
) -> Result<(), Vec<Violation>> {
    into_result(collect(configs, outputs, mode))
}

fn collect(configs: &[Configuration], outputs: &[Output], mode: CheckMode) -> Vec<Violation> {
    let mut collector = Collector::new(mode);
    let _ = run_checks(configs, outputs, &mut collector);
    collector.finish()
}

fn run_checks(
    configs: &[Configuration],
    outputs: &[Output],
    collector: &mut Collector,
) -> Result<(), Halt> {
    let Some(params) = shared_params(configs) else {
        return Ok(());
    };
    let p = params.p;
    tracing::debug!(outputs = outputs.len(), p, "checking outputs");

    check_decision_shape(outputs, p, collector)?;

    let decided: Vec<Vec<BTreeSet<Value>>> =
        outputs.iter().map(|output| decided_sets(output, p)).collect();
    let unions = instance_unions(configs, p);

    check_validity(configs, outputs, &decided, &unions, collector)?;
    check_consistency(outputs, &decided, collector)
}

/// The decided sets an output holds for instances `1..=p`, as sets.
fn decided_sets(output: &Output, p: usize) -> Vec<BTreeSet<Value>> {
    output
        .decide_sets
        .iter()
        .take(p)
        .map(|decided| decided.iter().copied().collect())
        .collect()
}

/// First value that occurs twice in a decided-set line.
fn first_duplicate(values: &[Value]) -> Option<Value> {
    let mut seen = BTreeSet::new();
    values.iter().copied().find(|value| !seen.insert(*value))
}

/// No output decides more often than there are agreements, and no decided
/// set repeats a value.
fn check_decision_shape(outputs: &[Output], p: usize, collector: &mut Collector) -> Result<(), Halt> {
    for output in outputs {
        if output.decide_sets.len() > p {
            collector.record(Violation::TooManyDecisions {
                file: output.source.clone(),
                found: output.decide_sets.len(),
                p,
            })?;
        }

        for (i, decided) in output.decide_sets.iter().take(p).enumerate() {
            if let Some(value) = first_duplicate(decided) {
                collector.record(Violation::DuplicateInDecision {
                    file: output.source.clone(),
                    instance: i + 1,
                    value,
                })?;
            }
        }
    }
    Ok(())
}

/// Self-validity and global-validity, per process and agreement.
fn check_validity(
    configs: &[Configuration],
    outputs: &[Output],
    decided: &[Vec<BTreeSet<Value>>],
    unions: &[BTreeSet<Value>],
    collector: &mut Collector,
) -> Result<(), Halt> {
    for ((config, output), sets) in configs.iter().zip(outputs).zip(decided) {
        for (i, (proposed, decided)) in config.proposals.iter().zip(sets).enumerate() {
            if let Some(&value) = proposed.iter().find(|value| !decided.contains(*value)) {
                collector.record(Violation::SelfValidityViolated {
                    file: output.source.clone(),
                    instance: i + 1,
                    value,
                })?;
            }

            if let Some(&value) = decided.iter().find(|value| !unions[i].contains(*value)) {
                collector.record(Violation::GlobalValidityViolated {
                    file: output.source.clone(),
                    instance: i + 1,
                    value,
                })?;
            }
        }
    }
    Ok(())
}

/// Decided sets of every agreement form a chain under inclusion.
fn check_consistency(
    outputs: &[Output],
    decided: &[Vec<BTreeSet<Value>>],
    collector: &mut Collector,
) -> Result<(), Halt> {
    // Comparable is symmetric and reflexive, so each unordered pair of
    // distinct outputs is checked once.
    let pairs = outputs.iter().zip(decided);
    for (a, (first, first_sets)) in pairs.clone().enumerate() {
        for (second, second_sets) in pairs.clone().skip(a + 1) {
            for (i, (left, right)) in first_sets.iter().zip(second_sets).enumerate() {
                if !(left.is_subset(right) || right.is_subset(left)) {
                    collector.record(Violation::ConsistencyViolated {
                        first: first.source.clone(),
                        second: second.source.clone(),
                        instance: i + 1,
                    })?;
                }
            }
        }
    }
    Ok(())
}
