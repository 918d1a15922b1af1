//! SQLite-backed artifact store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;

use super::{ArtifactStore, Database};
use crate::error::{OrchestratorError, Result};
use crate::models::{
    CoachingEvent, CoachingEventKind, GenerationLogEntry, NutritionTargets, Provenance, StepKind,
    SupplementRecommendation, TrainingProgram,
};

/// SQLite implementation of [`ArtifactStore`].
///
/// Holds only the database path; every operation opens a connection on the
/// blocking thread pool, which keeps the store trivially `Send + Sync` and
/// avoids holding a connection across await points.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Creates a builder with default settings.
    pub fn builder() -> SqliteStoreBuilder {
        SqliteStoreBuilder::new()
    }

    fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs a synchronous database operation on the blocking pool.
    async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| OrchestratorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists generation-log entries for a client, oldest first.
    pub async fn list_generation_log(&self, client_id: u64) -> Result<Vec<GenerationLogEntry>> {
        self.with_db(move |db| db.list_generation_log(client_id))
            .await
    }

    /// Lists coaching events for a client, oldest first.
    pub async fn list_coaching_events(&self, client_id: u64) -> Result<Vec<CoachingEvent>> {
        self.with_db(move |db| db.list_coaching_events(client_id))
            .await
    }

    /// Number of supplements stored for a client.
    pub async fn count_supplements(&self, client_id: u64) -> Result<u64> {
        self.with_db(move |db| db.count_supplements(client_id))
            .await
    }

    /// Number of training programs stored for a client.
    pub async fn count_training_programs(&self, client_id: u64) -> Result<u64> {
        self.with_db(move |db| db.count_training_programs(client_id))
            .await
    }

    /// The stored nutrition targets for a client, if set.
    pub async fn get_nutrition_targets(&self, client_id: u64) -> Result<Option<NutritionTargets>> {
        self.with_db(move |db| db.get_nutrition_targets(client_id))
            .await
    }
}

#[async_trait]
impl ArtifactStore for SqliteStore {
    async fn save_training_program(
        &self,
        client_id: u64,
        program: &TrainingProgram,
    ) -> Result<u64> {
        let program = program.clone();
        self.with_db(move |db| db.save_training_program(client_id, &program))
            .await
    }

    async fn set_nutrition_targets(
        &self,
        client_id: u64,
        targets: &NutritionTargets,
        provenance: &Provenance,
    ) -> Result<()> {
        let targets = targets.clone();
        let provenance = provenance.clone();
        self.with_db(move |db| db.set_nutrition_targets(client_id, &targets, &provenance))
            .await
    }

    async fn add_supplement(
        &self,
        client_id: u64,
        recommendation: &SupplementRecommendation,
    ) -> Result<()> {
        let recommendation = recommendation.clone();
        self.with_db(move |db| db.add_supplement(client_id, &recommendation))
            .await
    }

    async fn write_generation_log(
        &self,
        client_id: u64,
        kind: StepKind,
        payload: &serde_json::Value,
        provenance: &Provenance,
    ) -> Result<u64> {
        let payload = payload.clone();
        let provenance = provenance.clone();
        self.with_db(move |db| db.write_generation_log(client_id, kind, &payload, &provenance))
            .await
    }

    async fn write_coaching_event(
        &self,
        client_id: u64,
        kind: CoachingEventKind,
        title: &str,
        related_id: Option<u64>,
    ) -> Result<u64> {
        let title = title.to_string();
        self.with_db(move |db| db.write_coaching_event(client_id, kind, &title, related_id))
            .await
    }
}

/// Builder for creating and configuring [`SqliteStore`] instances.
#[derive(Debug, Clone, Default)]
pub struct SqliteStoreBuilder {
    database_path: Option<PathBuf>,
}

impl SqliteStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/stride.db` or `~/.local/share/stride/stride.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the database (and its parent
    /// directory) if needed.
    ///
    /// # Errors
    ///
    /// Returns `OrchestratorError::FileSystem` if the database path is
    /// invalid and `OrchestratorError::Database` if schema initialization
    /// fails.
    pub async fn build(self) -> Result<SqliteStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| OrchestratorError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), OrchestratorError>(())
        })
        .await
        .map_err(|e| OrchestratorError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(SqliteStore::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_data_file("stride.db")
            .map_err(|e| OrchestratorError::XdgDirectory(e.to_string()))
    }
}
