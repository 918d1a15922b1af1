//! Data models for coaching plan generation runs.
//!
//! This module contains the core domain models for the plan generation
//! lifecycle: the selected options, the fixed step sequence, per-step
//! results with their generated payloads, the run-level state machine, and
//! the per-artifact apply outcome. Display implementations for these models
//! are located in [`crate::display`] to keep data structures separate from
//! presentation logic.
//!
//! # Lifecycle
//!
//! A [`PlanRun`] is created when generation starts and lives only for the
//! duration of the review/apply interaction. The artifacts it produces (and
//! their audit records, see [`audit`]) persist; the run itself does not.
//!
//! ```text
//! Options ──▶ Generating ──▶ Review ──▶ Applying ──▶ Done
//!                              ▲            │
//!                              └────────────┘  (partial apply failure)
//! ```

pub mod audit;
pub mod options;
pub mod outcome;
pub mod payload;
pub mod phase;
pub mod run;
pub mod step;


// Re-export all public types at the models level
pub use audit::{CoachingEvent, CoachingEventKind, GenerationLogEntry, Provenance};
pub use options::PlanOptions;
pub use outcome::{ApplyOutcome, ArtifactOutcome};
pub use payload::{
    Exercise, IntakeAnalysis, NutritionTargets, StepPayload, SupplementRecommendation,
    TrainingBlock, TrainingDay, TrainingProgram,
};
pub use phase::Phase;
pub use run::{PlanRun, RunSummary};
pub use step::{StepKind, StepResult};
