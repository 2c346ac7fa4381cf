//! Machine-readable summary of a verification run.

use lattice_check_model::violation::{CheckMode, ViolationKind};
use serde::{Deserialize, Serialize};

use crate::run::Verdict;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub kind: ViolationKind,
    /// False when the fixture, not the protocol, is at fault.
    pub safety: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub schema_version: u32,
    pub passed: bool,
    pub mode: CheckMode,
    pub processes: usize,
    pub instances: usize,
    pub violations: Vec<ViolationRecord>,
}

impl VerificationReport {
    pub fn from_verdict(verdict: &Verdict) -> Self {
        let violations = verdict
            .violations
            .iter()
            .map(|violation| ViolationRecord {
                kind: violation.kind(),
                safety: violation.kind().is_safety(),
                message: violation.to_string(),
            })
            .collect();

        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            passed: verdict.passed(),
            mode: verdict.mode,
            processes: verdict.processes,
            instances: verdict.instances,
            violations,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
