//! Review aggregator: read-side projection of a plan run.
//!
//! Organizes step results for inspection before apply. Purely a view:
//! borrows the run, performs no mutation and no I/O, and exposes the raw
//! generated payload per step without touching it. The active-step
//! selection is display state only and never affects orchestration.

use crate::models::{ArtifactOutcome, PlanRun, Provenance, RunSummary, StepKind, StepPayload};

/// One step as presented for review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry<'a> {
    /// Which step this entry describes
    pub kind: StepKind,

    /// The step's generated payload or its failure
    pub outcome: ReviewOutcome<'a>,

    /// Generation provenance (model, tokens, retrieval flag)
    pub provenance: Provenance,

    /// Apply outcome, once the step has been attempted
    pub applied: Option<&'a ArtifactOutcome>,
}

/// Generated payload or failure description for one reviewed step.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome<'a> {
    /// The step succeeded; the raw payload is exposed unmodified
    Generated(&'a StepPayload),

    /// The step failed with this error
    Failed(&'a str),
}

/// Read-only review projection over a [`PlanRun`].
#[derive(Debug, Clone)]
pub struct ReviewView<'a> {
    entries: Vec<ReviewEntry<'a>>,
    summary: RunSummary,
    active: usize,
}

impl<'a> ReviewView<'a> {
    /// Builds the review projection for a run.
    pub fn new(run: &'a PlanRun) -> Self {
        let entries = run
            .steps
            .iter()
            .map(|step| ReviewEntry {
                kind: step.kind,
                outcome: match (&step.payload, &step.error) {
                    (Some(payload), _) => ReviewOutcome::Generated(payload),
                    (None, Some(error)) => ReviewOutcome::Failed(error),
                    (None, None) => ReviewOutcome::Failed("no result recorded"),
                },
                provenance: step.provenance(),
                applied: run.applied.get(step.kind),
            })
            .collect();

        Self {
            entries,
            summary: run.summary(),
            active: 0,
        }
    }

    /// Entries in step execution order.
    pub fn entries(&self) -> &[ReviewEntry<'a>] {
        &self.entries
    }

    /// Aggregate statistics for the reviewed run.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Selects the entry for `kind` as the active step.
    ///
    /// Returns false (leaving the selection unchanged) when the run has no
    /// entry for that kind.
    pub fn select(&mut self, kind: StepKind) -> bool {
        match self.entries.iter().position(|e| e.kind == kind) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// The currently selected entry, if the view is non-empty.
    pub fn active(&self) -> Option<&ReviewEntry<'a>> {
        self.entries.get(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IntakeAnalysis, PlanOptions, StepResult};

    fn run_with_two_steps() -> PlanRun {
        let mut run = PlanRun::new(5, PlanOptions::default());
        run.steps.push(StepResult::generated(
            StepKind::IntakeAnalysis,
            StepPayload::IntakeAnalysis(IntakeAnalysis {
                analysis: "Good baseline".to_string(),
            }),
            Provenance::default(),
        ));
        run.steps
            .push(StepResult::failed(StepKind::Training, "upstream quota"));
        run
    }

    #[test]
    fn view_exposes_payloads_and_errors_in_order() {
        let run = run_with_two_steps();
        let view = ReviewView::new(&run);

        assert_eq!(view.entries().len(), 2);
        assert!(matches!(
            view.entries()[0].outcome,
            ReviewOutcome::Generated(StepPayload::IntakeAnalysis(_))
        ));
        assert_eq!(
            view.entries()[1].outcome,
            ReviewOutcome::Failed("upstream quota")
        );
        assert_eq!(view.summary().succeeded, 1);
        assert_eq!(view.summary().failed, 1);
    }

    #[test]
    fn selection_never_touches_the_run() {
        let run = run_with_two_steps();
        let before = run.clone();
        let mut view = ReviewView::new(&run);

        assert!(view.select(StepKind::Training));
        assert_eq!(view.active().map(|e| e.kind), Some(StepKind::Training));
        // Selecting a step that never ran leaves the selection unchanged
        assert!(!view.select(StepKind::Supplements));
        assert_eq!(view.active().map(|e| e.kind), Some(StepKind::Training));

        drop(view);
        assert_eq!(run, before);
    }
}
