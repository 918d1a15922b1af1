//! Artifact persistence: the external save collaborators and a SQLite
//! reference implementation.
//!
//! The applier talks only to the [`ArtifactStore`] trait. Each artifact
//! type has its own save call and there is no shared transaction across
//! artifacts. [`SqliteStore`] is the bundled implementation: a thin async
//! wrapper that runs synchronous [`Database`] operations on the blocking
//! thread pool, one connection per operation.

use std::path::Path;

use async_trait::async_trait;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};
use crate::models::{
    CoachingEventKind, NutritionTargets, Provenance, StepKind, SupplementRecommendation,
    TrainingProgram,
};

pub mod artifact_queries;
pub mod log_queries;
pub mod migrations;
pub mod sqlite;

pub use sqlite::{SqliteStore, SqliteStoreBuilder};

/// External persistence operations for applied plan artifacts.
///
/// Persistence is per-artifact and non-atomic across artifacts.
/// Implementations should be idempotent per artifact. In particular,
/// `add_supplement` must be idempotent on (client, name) so a
/// retried all-or-nothing supplement apply cannot duplicate entries that
/// persisted before a partial failure.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Persists a training program; returns the created program ID.
    async fn save_training_program(
        &self,
        client_id: u64,
        program: &TrainingProgram,
    ) -> Result<u64>;

    /// Sets (or replaces) the client's daily nutrition targets.
    async fn set_nutrition_targets(
        &self,
        client_id: u64,
        targets: &NutritionTargets,
        provenance: &Provenance,
    ) -> Result<()>;

    /// Adds one supplement recommendation for the client.
    async fn add_supplement(
        &self,
        client_id: u64,
        recommendation: &SupplementRecommendation,
    ) -> Result<()>;

    /// Writes one audit entry for a generated artifact; returns the entry
    /// ID.
    async fn write_generation_log(
        &self,
        client_id: u64,
        kind: StepKind,
        payload: &serde_json::Value,
        provenance: &Provenance,
    ) -> Result<u64>;

    /// Writes one coaching timeline event; returns the event ID.
    async fn write_coaching_event(
        &self,
        client_id: u64,
        kind: CoachingEventKind,
        title: &str,
        related_id: Option<u64>,
    ) -> Result<u64>;
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
