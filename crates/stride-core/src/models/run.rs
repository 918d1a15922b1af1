//! Plan run: the orchestration session value.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ApplyOutcome, Phase, PlanOptions, StepKind, StepResult};

/// One plan generation session.
///
/// Created when generation starts, threaded explicitly through the
/// orchestrator and applier (each consumes the run and returns the updated
/// value), and discarded once `Done` or abandoned. Only applied artifacts
/// and their audit records outlive the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRun {
    /// Client this plan is generated for
    pub client_id: u64,

    /// Step selection, fixed once generation starts
    pub options: PlanOptions,

    /// Step results in execution order
    pub steps: Vec<StepResult>,

    /// Current phase of the run
    pub phase: Phase,

    /// Cumulative apply outcomes across apply invocations
    #[serde(default)]
    pub applied: ApplyOutcome,

    /// Timestamp when generation started (UTC)
    pub started_at: Timestamp,
}

impl PlanRun {
    /// Creates a fresh run in the `Options` phase.
    pub fn new(client_id: u64, options: PlanOptions) -> Self {
        Self {
            client_id,
            options,
            steps: Vec::new(),
            phase: Phase::Options,
            applied: ApplyOutcome::new(),
            started_at: Timestamp::now(),
        }
    }

    /// Total token cost of the run.
    ///
    /// Always recomputed from the step results so the figure cannot drift
    /// from its parts.
    pub fn total_tokens(&self) -> u64 {
        self.steps.iter().map(|s| s.tokens_used).sum()
    }

    /// The result for a step kind, if that step has executed.
    pub fn result_for(&self, kind: StepKind) -> Option<&StepResult> {
        self.steps.iter().find(|s| s.kind == kind)
    }

    /// Step results that produced a payload, in execution order.
    pub fn successful_steps(&self) -> impl Iterator<Item = &StepResult> {
        self.steps.iter().filter(|s| s.succeeded())
    }

    /// Whether every successfully generated step has been applied.
    pub fn is_fully_applied(&self) -> bool {
        self.successful_steps()
            .all(|s| self.applied.is_applied(s.kind))
    }

    /// Aggregate statistics over the executed steps.
    pub fn summary(&self) -> RunSummary {
        let succeeded = self.steps.iter().filter(|s| s.succeeded()).count() as u32;
        let failed = self.steps.len() as u32 - succeeded;
        RunSummary {
            succeeded,
            failed,
            total_tokens: self.total_tokens(),
        }
    }
}

/// Aggregate statistics for a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps that produced a payload
    pub succeeded: u32,

    /// Steps that failed
    pub failed: u32,

    /// Exact sum of `tokens_used` across all steps
    pub total_tokens: u64,
}
