//! Artifact applier: persists successful generation results.
//!
//! Apply is the second half of the review-then-apply protocol. Each
//! successfully generated artifact is persisted independently through the
//! [`ArtifactStore`] seam, with one generation-log entry and one coaching
//! event written after the artifact itself lands. Nothing is transactional
//! across artifacts: a failed step leaves the others applied, and a
//! re-invoked apply retries only the failed or not-yet-attempted steps.

use log::{debug, info, warn};

use crate::error::{OrchestratorError, Result};
use crate::models::{
    ApplyOutcome, ArtifactOutcome, CoachingEventKind, Phase, PlanRun, StepPayload, StepResult,
};
use crate::store::ArtifactStore;

/// Applies the successful results of a plan run.
pub struct Applier<S> {
    store: S,
}

impl<S: ArtifactStore> Applier<S> {
    /// Creates an applier over the given artifact store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persists every successfully generated, not-yet-applied artifact.
    ///
    /// The run must have finished generating (phase `Review`, or `Done`
    /// for a re-invocation) and hold at least one successful step. Steps
    /// whose generation failed are never attempted; steps
    /// already applied in a prior invocation are skipped, which makes
    /// apply idempotent per artifact. Returns the updated run and the
    /// cumulative outcome map (one entry per successfully generated step).
    ///
    /// # Errors
    ///
    /// Returns `OrchestratorError::Precondition` on caller misuse (wrong
    /// phase, or no successful steps). Persistence failures are not
    /// errors: they are recorded per step in the outcome map.
    pub async fn apply(&self, mut run: PlanRun) -> Result<(PlanRun, ApplyOutcome)> {
        if !run.phase.allows_apply() {
            return Err(OrchestratorError::precondition(
                run.phase,
                "generation must complete before apply",
            ));
        }
        if run.successful_steps().next().is_none() {
            return Err(OrchestratorError::precondition(
                run.phase,
                "run has no successful steps to apply",
            ));
        }

        run.phase = Phase::Applying;
        let pending: Vec<StepResult> = run.successful_steps().cloned().collect();
        info!(
            "applying plan for client {}: {} artifact(s)",
            run.client_id,
            pending.len()
        );

        for step in &pending {
            if run.applied.is_applied(step.kind) {
                debug!(
                    "skipping step '{}' for client {}: already applied",
                    step.kind.as_str(),
                    run.client_id
                );
                continue;
            }

            let outcome = self.apply_step(run.client_id, step).await;
            match &outcome.error {
                None => info!(
                    "applied artifact '{}' for client {}",
                    step.kind.as_str(),
                    run.client_id
                ),
                Some(err) => warn!(
                    "failed to apply artifact '{}' for client {}: {err}",
                    step.kind.as_str(),
                    run.client_id
                ),
            }
            run.applied.record(step.kind, outcome);
        }

        run.phase = if run.is_fully_applied() {
            Phase::Done
        } else {
            Phase::Review
        };
        let outcome = run.applied.clone();
        Ok((run, outcome))
    }

    /// Persists one artifact and, on success, its audit records.
    async fn apply_step(&self, client_id: u64, step: &StepResult) -> ArtifactOutcome {
        let Some(payload) = &step.payload else {
            return ArtifactOutcome::failed("step has no generated payload");
        };
        let provenance = step.provenance();

        // Persist the artifact itself; each variant has its own save call.
        type Persisted = std::result::Result<(Option<u64>, serde_json::Value, String), String>;
        let persisted: Persisted = match payload {
            StepPayload::IntakeAnalysis(analysis) => serde_json::to_value(analysis)
                .map_err(|e| e.to_string())
                .map(|json| (None, json, "Intake analysis recorded".to_string())),
            StepPayload::Training(program) => {
                match self.store.save_training_program(client_id, program).await {
                    Ok(program_id) => serde_json::to_value(program)
                        .map_err(|e| e.to_string())
                        .map(|json| {
                            (
                                Some(program_id),
                                json,
                                format!("Training program '{}' assigned", program.name),
                            )
                        }),
                    Err(e) => Err(e.to_string()),
                }
            }
            StepPayload::Nutrition(targets) => {
                match self
                    .store
                    .set_nutrition_targets(client_id, targets, &provenance)
                    .await
                {
                    Ok(()) => serde_json::to_value(targets)
                        .map_err(|e| e.to_string())
                        .map(|json| {
                            (
                                None,
                                json,
                                format!("Nutrition targets set: {} kcal", targets.calories),
                            )
                        }),
                    Err(e) => Err(e.to_string()),
                }
            }
            StepPayload::Supplements(recommendations) => {
                // Each recommendation is its own save call; the step
                // succeeds only if all of them persist.
                let mut failure = None;
                for recommendation in recommendations {
                    if let Err(e) = self.store.add_supplement(client_id, recommendation).await {
                        failure =
                            Some(format!("supplement '{}' failed: {e}", recommendation.name));
                        break;
                    }
                }
                match failure {
                    Some(err) => Err(err),
                    None => serde_json::to_value(recommendations)
                        .map_err(|e| e.to_string())
                        .map(|json| {
                            (
                                None,
                                json,
                                format!(
                                    "{} supplement recommendation(s) added",
                                    recommendations.len()
                                ),
                            )
                        }),
                }
            }
        };

        let (record_id, payload_json, title) = match persisted {
            Ok(parts) => parts,
            Err(err) => return ArtifactOutcome::failed(err),
        };

        // Audit records are written only after successful persistence, so
        // a failed attempt never leaves a log entry behind.
        if let Err(e) = self
            .store
            .write_generation_log(client_id, step.kind, &payload_json, &provenance)
            .await
        {
            return ArtifactOutcome::failed(format!(
                "artifact persisted but generation log write failed: {e}"
            ));
        }
        if let Err(e) = self
            .store
            .write_coaching_event(
                client_id,
                CoachingEventKind::for_step(step.kind),
                &title,
                record_id,
            )
            .await
        {
            return ArtifactOutcome::failed(format!(
                "artifact persisted but coaching event write failed: {e}"
            ));
        }

        ArtifactOutcome::applied(record_id)
    }
}
