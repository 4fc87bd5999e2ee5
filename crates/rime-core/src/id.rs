//! Strongly-typed step counter.

use std::fmt;

/// Monotonically increasing count of completed engine steps.
///
/// A fresh engine reports `StepId(0)`; each `step()` call increments it by
/// one. Resetting an engine returns it to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The counter after one more completed step.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
