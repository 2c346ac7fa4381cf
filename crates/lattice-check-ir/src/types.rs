use std::fmt;

use serde::{Deserialize, Serialize};

/// A value proposed into, or decided by, one agreement instance.
pub type Value = u32;

/// Parameters shared by every process of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Params {
    /// Number of processes, which is also the number of agreement instances.
    pub p: usize,
    /// Maximum number of values one process proposes in one instance.
    pub vs: usize,
    /// Maximum number of distinct values across all processes in one instance.
    pub ds: usize,
}

impl Params {
    pub fn new(p: usize, vs: usize, ds: usize) -> Self {
        Self { p, vs, ds }
    }
}

/// Renders as the configuration header line, `p vs ds`.
impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.p, self.vs, self.ds)
    }
}

// ── Configuration ────────────────────────────────────────────────────

/// One process's configuration file: the shared header plus its proposals.
///
/// `proposals[n - 1]` holds the values proposed in instance `n`. Values are
/// kept in file order; set semantics are applied by the validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub source: String,
    pub params: Params,
    pub proposals: Vec<Vec<Value>>,
}

impl Configuration {
    pub fn new(source: impl Into<String>, params: Params, proposals: Vec<Vec<Value>>) -> Self {
        Self {
            source: source.into(),
            params,
            proposals,
        }
    }

    /// Proposal for a 1-based instance index.
    pub fn proposal(&self, instance: usize) -> Option<&[Value]> {
        instance
            .checked_sub(1)
            .and_then(|i| self.proposals.get(i))
            .map(Vec::as_slice)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.params)?;
        for proposal in &self.proposals {
            write_values(f, proposal)?;
        }
        Ok(())
    }
}

// ── Output ───────────────────────────────────────────────────────────

/// One process's output file: a decided set per completed instance.
///
/// A partial run may hold fewer decisions than there are instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub source: String,
    pub decide_sets: Vec<Vec<Value>>,
}

impl Output {
    pub fn new(source: impl Into<String>, decide_sets: Vec<Vec<Value>>) -> Self {
        Self {
            source: source.into(),
            decide_sets,
        }
    }

    /// Decided set for a 1-based instance index.
    pub fn decision(&self, instance: usize) -> Option<&[Value]> {
        instance
            .checked_sub(1)
            .and_then(|i| self.decide_sets.get(i))
            .map(Vec::as_slice)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decided in &self.decide_sets {
            write_values(f, decided)?;
        }
        Ok(())
    }
}

/// Write one newline-terminated, space-separated record.
fn write_values(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    let mut first = true;
    for value in values {
        if !first {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
        first = false;
    }
    f.write_str("\n")
}
