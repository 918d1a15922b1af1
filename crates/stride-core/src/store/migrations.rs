//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, OrchestratorError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if used_knowledge_retrieval column exists in generation_log
        let has_retrieval_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('generation_log') WHERE name = 'used_knowledge_retrieval'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        // Add the column for databases created before provenance tracking
        if !has_retrieval_column {
            self.connection
                .execute(
                    "ALTER TABLE generation_log ADD COLUMN used_knowledge_retrieval INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .map_err(|e| {
                    OrchestratorError::database_error(
                        "Failed to add used_knowledge_retrieval column to generation_log",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
