//! Write operations for applied plan artifacts.

use jiff::Timestamp;
use rusqlite::params;

use crate::error::{DatabaseResultExt, Result};
use crate::models::{NutritionTargets, Provenance, SupplementRecommendation, TrainingProgram};

const INSERT_PROGRAM_SQL: &str = "INSERT INTO training_programs (client_id, name, description, payload, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPSERT_TARGETS_SQL: &str = "INSERT INTO nutrition_targets (client_id, calories, protein_g, carbs_g, fat_g, rationale, model, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
     ON CONFLICT (client_id) DO UPDATE SET \
     calories = excluded.calories, protein_g = excluded.protein_g, \
     carbs_g = excluded.carbs_g, fat_g = excluded.fat_g, \
     rationale = excluded.rationale, model = excluded.model, \
     updated_at = excluded.updated_at";
const UPSERT_SUPPLEMENT_SQL: &str = "INSERT INTO supplements (client_id, name, dosage, timing, frequency, rationale, created_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
     ON CONFLICT (client_id, name) DO UPDATE SET \
     dosage = excluded.dosage, timing = excluded.timing, \
     frequency = excluded.frequency, rationale = excluded.rationale";

impl super::Database {
    /// Persists a training program and returns its ID. The full structured
    /// program is stored as JSON alongside the indexed name/description
    /// columns.
    pub fn save_training_program(
        &mut self,
        client_id: u64,
        program: &TrainingProgram,
    ) -> Result<u64> {
        let payload = serde_json::to_string(program)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PROGRAM_SQL,
            params![
                client_id as i64,
                program.name,
                program.description.as_deref(),
                payload,
                now
            ],
        )
        .db_context("Failed to insert training program")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(id)
    }

    /// Sets or replaces the client's daily nutrition targets.
    pub fn set_nutrition_targets(
        &self,
        client_id: u64,
        targets: &NutritionTargets,
        provenance: &Provenance,
    ) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPSERT_TARGETS_SQL,
                params![
                    client_id as i64,
                    targets.calories,
                    targets.protein_g,
                    targets.carbs_g,
                    targets.fat_g,
                    targets.rationale,
                    provenance.model.as_deref(),
                    now
                ],
            )
            .db_context("Failed to set nutrition targets")?;
        Ok(())
    }

    /// Adds one supplement recommendation. Idempotent on (client, name):
    /// re-adding an existing supplement updates the prescription in place
    /// instead of duplicating the row.
    pub fn add_supplement(
        &self,
        client_id: u64,
        recommendation: &SupplementRecommendation,
    ) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPSERT_SUPPLEMENT_SQL,
                params![
                    client_id as i64,
                    recommendation.name,
                    recommendation.dosage,
                    recommendation.timing,
                    recommendation.frequency,
                    recommendation.rationale,
                    now
                ],
            )
            .db_context("Failed to add supplement")?;
        Ok(())
    }

    /// Number of supplements stored for a client.
    pub fn count_supplements(&self, client_id: u64) -> Result<u64> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM supplements WHERE client_id = ?1",
                params![client_id as i64],
                |row| row.get::<_, i64>(0),
            )
            .map(|n| n as u64)
            .db_context("Failed to count supplements")
    }

    /// Number of training programs stored for a client.
    pub fn count_training_programs(&self, client_id: u64) -> Result<u64> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM training_programs WHERE client_id = ?1",
                params![client_id as i64],
                |row| row.get::<_, i64>(0),
            )
            .map(|n| n as u64)
            .db_context("Failed to count training programs")
    }

    /// The stored nutrition targets for a client, if set.
    pub fn get_nutrition_targets(&self, client_id: u64) -> Result<Option<NutritionTargets>> {
        use rusqlite::OptionalExtension;

        self.connection
            .query_row(
                "SELECT calories, protein_g, carbs_g, fat_g, rationale FROM nutrition_targets WHERE client_id = ?1",
                params![client_id as i64],
                |row| {
                    Ok(NutritionTargets {
                        calories: row.get(0)?,
                        protein_g: row.get(1)?,
                        carbs_g: row.get(2)?,
                        fat_g: row.get(3)?,
                        rationale: row.get(4)?,
                    })
                },
            )
            .optional()
            .db_context("Failed to query nutrition targets")
    }
}
