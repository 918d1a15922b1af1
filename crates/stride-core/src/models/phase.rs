//! Run phase state machine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan run phases.
///
/// Forward transitions are `Options → Generating → Review → Applying →
/// Done`. After a partial apply failure the run moves back from `Applying`
/// to `Review`, so apply can be retried for the failed subset. `Done` is
/// reached only once every successfully generated step has been applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Options are being selected; generation has not started
    #[default]
    Options,

    /// Generation steps are executing
    Generating,

    /// All selected steps have produced a result; awaiting apply
    Review,

    /// Successful results are being persisted
    Applying,

    /// Every successful step has been applied
    Done,
}

impl Phase {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Options => "options",
            Phase::Generating => "generating",
            Phase::Review => "review",
            Phase::Applying => "applying",
            Phase::Done => "done",
        }
    }

    /// Whether apply may be invoked in this phase.
    ///
    /// Apply in `Done` is permitted and is a no-op: every artifact is
    /// already recorded as applied, so re-invocation just returns the
    /// carried outcome.
    pub fn allows_apply(&self) -> bool {
        matches!(self, Phase::Review | Phase::Done)
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "options" => Ok(Phase::Options),
            "generating" => Ok(Phase::Generating),
            "review" => Ok(Phase::Review),
            "applying" => Ok(Phase::Applying),
            "done" => Ok(Phase::Done),
            _ => Err(format!("Invalid phase: {s}")),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
