//! Core library for the Stride coaching plan generator.
//!
//! This crate implements the plan generation orchestrator: it drives a
//! sequence of independent AI content-generation steps for a client
//! (intake analysis, training program, nutrition targets, supplement
//! recommendations), collects per-step results including partial failures,
//! presents them for review, and applies the accepted results by
//! persisting each artifact independently with audit logging and token
//! accounting.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌───────────────┐
//! │ Orchestrator │──▶│ ReviewView  │──▶│    Applier    │
//! │ (generate)   │   │ (inspect)   │   │ (persist +    │
//! │              │   │             │   │  audit)       │
//! └──────┬───────┘   └─────────────┘   └───────┬───────┘
//!        │ GeneratorSuite                      │ ArtifactStore
//!        ▼                                     ▼
//!   external AI generators              external save calls
//!                                       (SqliteStore bundled)
//! ```
//!
//! Steps run strictly sequentially; a failed step never blocks the steps
//! after it, and apply degrades to partial success the same way. Apply is
//! idempotent per artifact: re-invoking it retries only failed or
//! unattempted steps.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stride_core::{Applier, Orchestrator, PlanOptions, SqliteStore};
//! # use stride_core::generate::GeneratorSuite;
//!
//! # async fn example<G: GeneratorSuite>(generators: G) -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = Orchestrator::builder(generators).build();
//! let run = orchestrator.run(42, PlanOptions::default()).await;
//!
//! let store = SqliteStore::builder()
//!     .with_database_path(Some("stride.db"))
//!     .build()
//!     .await?;
//! let applier = Applier::new(store);
//! let (run, outcome) = applier.apply(run).await?;
//! println!("applied {} artifact(s), run phase: {}", outcome.len(), run.phase);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod applier;
pub mod display;
pub mod error;
pub mod generate;
pub mod models;
pub mod orchestrator;
pub mod params;
pub mod review;
pub mod store;

// Re-export commonly used types
pub use applier::Applier;
pub use display::{ApplyReport, CoachingEvents, GenerationLogEntries, OperationStatus, ReviewReport};
pub use error::{OrchestratorError, Result};
pub use models::{
    ApplyOutcome, ArtifactOutcome, CoachingEvent, CoachingEventKind, GenerationLogEntry, Phase,
    PlanOptions, PlanRun, Provenance, RunSummary, StepKind, StepPayload, StepResult,
};
pub use orchestrator::{Orchestrator, OrchestratorBuilder, Progress};
pub use params::{ClientId, GeneratePlan};
pub use review::{ReviewEntry, ReviewOutcome, ReviewView};
pub use store::{ArtifactStore, SqliteStore, SqliteStoreBuilder};
