use std::fmt;

use lattice_check_ir::types::{Params, Value};
use serde::{Deserialize, Serialize};

/// A broken fixture or a broken safety property, found while checking a run.
///
/// Instance indices are 1-based, matching the line order of the files.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    // ── Fixture structure ────────────────────────────────────────────
    #[error("Config files do not have the same header: `{first_file}` has `{expected}` but `{file}` has `{found}`")]
    InconsistentParameters {
        first_file: String,
        expected: Params,
        file: String,
        found: Params,
    },

    #[error("Config file `{file}`: {found} proposals, but `p` is {expected}")]
    WrongProposalCount {
        file: String,
        expected: usize,
        found: usize,
    },

    #[error("Config file `{file}`, proposal nr {instance}: {found} values exceed `vs` = {vs}")]
    ProposalExceedsValueBound {
        file: String,
        instance: usize,
        found: usize,
        vs: usize,
    },

    #[error("Proposal nr {instance}: {found} distinct values among all processes exceed `ds` = {ds}")]
    InstanceExceedsDistinctBound {
        instance: usize,
        found: usize,
        ds: usize,
    },

    // ── Safety properties ────────────────────────────────────────────
    #[error("Output file `{file}`: {found} decide sets, but there are only {p} agreements")]
    TooManyDecisions { file: String, found: usize, p: usize },

    #[error("Output file `{file}`, agreement nr {instance}: value {value} is decided more than once")]
    DuplicateInDecision {
        file: String,
        instance: usize,
        value: Value,
    },

    #[error("Output file `{file}`, agreement nr {instance}: the decided set is not a superset of the proposed set of this process (missing {value})")]
    SelfValidityViolated {
        file: String,
        instance: usize,
        value: Value,
    },

    #[error("Output file `{file}`, agreement nr {instance}: the decided set is not a subset of the union of all proposed sets ({value} was never proposed)")]
    GlobalValidityViolated {
        file: String,
        instance: usize,
        value: Value,
    },

    #[error("Output files `{first}` and `{second}`, agreement nr {instance}: neither decided set is a subset of the other")]
    ConsistencyViolated {
        first: String,
        second: String,
        instance: usize,
    },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::InconsistentParameters { .. } => ViolationKind::InconsistentParameters,
            Violation::WrongProposalCount { .. } => ViolationKind::WrongProposalCount,
            Violation::ProposalExceedsValueBound { .. } => ViolationKind::ProposalExceedsValueBound,
            Violation::InstanceExceedsDistinctBound { .. } => {
                ViolationKind::InstanceExceedsDistinctBound
            }
            Violation::TooManyDecisions { .. } => ViolationKind::TooManyDecisions,
            Violation::DuplicateInDecision { .. } => ViolationKind::DuplicateInDecision,
            Violation::SelfValidityViolated { .. } => ViolationKind::SelfValidityViolated,
            Violation::GlobalValidityViolated { .. } => ViolationKind::GlobalValidityViolated,
            Violation::ConsistencyViolated { .. } => ViolationKind::ConsistencyViolated,
        }
    }
}

/// Discriminant of a [`Violation`], without the location details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    InconsistentParameters,
    WrongProposalCount,
    ProposalExceedsValueBound,
    InstanceExceedsDistinctBound,
    TooManyDecisions,
    DuplicateInDecision,
    SelfValidityViolated,
    GlobalValidityViolated,
    ConsistencyViolated,
}

impl ViolationKind {
    /// True when the protocol under test misbehaved, false when the test
    /// fixture itself is malformed.
    pub fn is_safety(self) -> bool {
        !matches!(
            self,
            ViolationKind::InconsistentParameters
                | ViolationKind::WrongProposalCount
                | ViolationKind::ProposalExceedsValueBound
                | ViolationKind::InstanceExceedsDistinctBound
        )
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Whether checking stops at the first violation or collects all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    #[default]
    FailFast,
    Exhaustive,
}

/// Returned by [`Collector::record`] when checking must stop.
pub(crate) struct Halt;

/// Ordered sink for violations, honouring the [`CheckMode`].
pub(crate) struct Collector {
    mode: CheckMode,
    violations: Vec<Violation>,
}

impl Collector {
    pub(crate) fn new(mode: CheckMode) -> Self {
        Self {
            mode,
            violations: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, violation: Violation) -> Result<(), Halt> {
        tracing::debug!(kind = %violation.kind(), "{violation}");
        self.violations.push(violation);
        match self.mode {
            CheckMode::FailFast => Err(Halt),
            CheckMode::Exhaustive => Ok(()),
        }
    }

    pub(crate) fn finish(self) -> Vec<Violation> {
        self.violations
    }
}

/// Turn collected violations into the `Result` shape the validators return.
pub(crate) fn into_result(violations: Vec<Violation>) -> Result<(), Vec<Violation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// First violation of a fail-fast pass.
pub(crate) fn first(violations: Vec<Violation>) -> Result<(), Violation> {
    match violations.into_iter().next() {
        None => Ok(()),
        Some(violation) => Err(violation),
    }
}
