//! Generation step adapter.
//!
//! [`StepRunner`] is the single place where the four heterogeneous
//! generator calls are normalized into one [`StepResult`] shape. Dispatch
//! is a static match on [`StepKind`]; every call carries its own timeout;
//! every failure path (structured generator error, timeout) ends in a
//! failed result rather than a propagated error, so a broken step can
//! never abort the run. No persistence happens here.

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::time::timeout;

use crate::generate::{GeneratorResult, GeneratorSuite};
use crate::models::{StepKind, StepPayload, StepResult};

/// Default per-step generator timeout.
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(120);

/// Uniform wrapper around the generator suite.
pub struct StepRunner<'a, G> {
    generators: &'a G,
    step_timeout: Duration,
}

impl<'a, G: GeneratorSuite> StepRunner<'a, G> {
    /// Creates a runner over the given generator suite.
    pub fn new(generators: &'a G, step_timeout: Duration) -> Self {
        Self {
            generators,
            step_timeout,
        }
    }

    /// Executes one generation step and normalizes its outcome.
    pub async fn run_step(&self, kind: StepKind, client_id: u64) -> StepResult {
        debug!("running step '{}' for client {client_id}", kind.as_str());
        match kind {
            StepKind::IntakeAnalysis => {
                self.step(kind, self.generators.analyze_intake(client_id), |v| {
                    StepPayload::IntakeAnalysis(v)
                })
                .await
            }
            StepKind::Training => {
                self.step(kind, self.generators.generate_training(client_id), |v| {
                    StepPayload::Training(v)
                })
                .await
            }
            StepKind::Nutrition => {
                self.step(kind, self.generators.generate_nutrition(client_id), |v| {
                    StepPayload::Nutrition(v)
                })
                .await
            }
            StepKind::Supplements => {
                self.step(kind, self.generators.generate_supplements(client_id), |v| {
                    StepPayload::Supplements(v)
                })
                .await
            }
        }
    }

    /// Awaits one generator call under the step timeout and folds every
    /// outcome into a [`StepResult`].
    async fn step<T, F>(
        &self,
        kind: StepKind,
        call: impl Future<Output = GeneratorResult<T>>,
        wrap: F,
    ) -> StepResult
    where
        F: FnOnce(T) -> StepPayload,
    {
        match timeout(self.step_timeout, call).await {
            Ok(Ok(generated)) => {
                let provenance = generated.provenance();
                StepResult::generated(kind, wrap(generated.value), provenance)
            }
            Ok(Err(err)) => StepResult::failed(kind, err.to_string()),
            Err(_) => StepResult::failed(
                kind,
                format!(
                    "generator call timed out after {}s",
                    self.step_timeout.as_secs()
                ),
            ),
        }
    }
}
