//! Plan orchestrator: drives the generation step sequence.
//!
//! The orchestrator owns the [`PlanRun`] for the duration of generation.
//! Steps execute strictly sequentially in the fixed order computed by
//! [`StepKind::sequence`]; a failed step never blocks the steps after it
//! (a partial plan is more useful than none). Each completed step can be
//! reported over an optional progress channel, and cancellation takes
//! effect between steps, leaving completed results reviewable.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ Orchestrator │────▶│  StepRunner  │────▶│  GeneratorSuite  │
//! │  (sequence,  │     │  (dispatch,  │     │  (external AI    │
//! │   phases)    │     │   timeout)   │     │   collaborators) │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```

use log::{info, warn};
use tokio::sync::{mpsc, watch};

use crate::adapter::StepRunner;
use crate::generate::GeneratorSuite;
use crate::models::{Phase, PlanOptions, PlanRun, StepKind};

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::OrchestratorBuilder;

/// Progress notification emitted after each completed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// The step that just completed
    pub kind: StepKind,

    /// Whether the step produced a payload
    pub succeeded: bool,

    /// Steps completed so far, this one included
    pub completed: usize,

    /// Total steps selected for this run
    pub total: usize,
}

/// Drives a plan generation run over a generator suite.
pub struct Orchestrator<G> {
    pub(crate) generators: G,
    pub(crate) step_timeout: std::time::Duration,
    pub(crate) progress: Option<mpsc::UnboundedSender<Progress>>,
    pub(crate) cancel: Option<watch::Receiver<bool>>,
}

impl<G: GeneratorSuite> Orchestrator<G> {
    /// Creates a builder over the given generator suite.
    pub fn builder(generators: G) -> OrchestratorBuilder<G> {
        OrchestratorBuilder::new(generators)
    }

    /// Runs the selected generation steps for a client.
    ///
    /// Produces one [`crate::models::StepResult`] per selected step (fewer
    /// only if the run is cancelled between steps) and leaves the run in
    /// the `Review` phase. Never fails as a whole: every step fault is
    /// captured in that step's result.
    pub async fn run(&self, client_id: u64, options: PlanOptions) -> PlanRun {
        let mut run = PlanRun::new(client_id, options);
        run.phase = Phase::Generating;

        let kinds = StepKind::sequence(&options);
        let total = kinds.len();
        let runner = StepRunner::new(&self.generators, self.step_timeout);

        info!(
            "starting plan generation for client {client_id}: {total} step(s) [{}]",
            kinds
                .iter()
                .map(StepKind::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        for kind in kinds {
            if self.is_cancelled() {
                warn!(
                    "plan generation for client {client_id} cancelled after {} step(s)",
                    run.steps.len()
                );
                break;
            }

            let result = runner.run_step(kind, client_id).await;
            match &result.error {
                None => info!(
                    "step '{}' completed for client {client_id} ({} tokens)",
                    kind.as_str(),
                    result.tokens_used
                ),
                Some(err) => warn!(
                    "step '{}' failed for client {client_id}: {err}",
                    kind.as_str()
                ),
            }

            run.steps.push(result);
            self.notify(&run, total);
        }

        // Completed results stay reviewable even after cancellation
        run.phase = Phase::Review;
        info!(
            "plan generation for client {client_id} finished: {} succeeded, {} failed, {} tokens",
            run.summary().succeeded,
            run.summary().failed,
            run.total_tokens()
        );
        run
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    fn notify(&self, run: &PlanRun, total: usize) {
        let Some(tx) = &self.progress else { return };
        let Some(last) = run.steps.last() else { return };
        // A dropped receiver just means nobody is watching
        let _ = tx.send(Progress {
            kind: last.kind,
            succeeded: last.succeeded(),
            completed: run.steps.len(),
            total,
        });
    }
}
