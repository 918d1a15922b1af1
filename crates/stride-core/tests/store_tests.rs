//! SQLite artifact store tests.

mod common;

use std::path::PathBuf;

use common::{sample_program, sample_supplements, sample_targets};
use stride_core::models::{CoachingEventKind, Provenance, StepKind, SupplementRecommendation};
use stride_core::{ArtifactStore, SqliteStore};
use tempfile::TempDir;

/// Helper function to create a temporary directory and database path
fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test_stride.db");
    (temp_dir, db_path)
}

async fn create_store(db_path: &PathBuf) -> SqliteStore {
    SqliteStore::builder()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create store")
}

fn provenance(tokens: u64) -> Provenance {
    Provenance {
        model: Some("test-model".to_string()),
        tokens_used: tokens,
        used_knowledge_retrieval: true,
    }
}

#[tokio::test]
async fn builder_initializes_schema_idempotently() {
    let (_temp_dir, db_path) = create_test_environment();
    let _first = create_store(&db_path).await;
    // Reopening an existing database re-runs schema init and migrations
    let store = create_store(&db_path).await;
    assert_eq!(store.count_training_programs(1).await.unwrap(), 0);
}

#[tokio::test]
async fn save_training_program_returns_distinct_ids() {
    let (_temp_dir, db_path) = create_test_environment();
    let store = create_store(&db_path).await;

    let first = store.save_training_program(1, &sample_program()).await.unwrap();
    let second = store.save_training_program(1, &sample_program()).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(store.count_training_programs(1).await.unwrap(), 2);
    assert_eq!(store.count_training_programs(2).await.unwrap(), 0);
}

#[tokio::test]
async fn nutrition_targets_are_replaced_per_client() {
    let (_temp_dir, db_path) = create_test_environment();
    let store = create_store(&db_path).await;

    let mut targets = sample_targets();
    store
        .set_nutrition_targets(1, &targets, &provenance(100))
        .await
        .unwrap();

    targets.calories = 3000;
    store
        .set_nutrition_targets(1, &targets, &provenance(120))
        .await
        .unwrap();

    let stored = store.get_nutrition_targets(1).await.unwrap().unwrap();
    assert_eq!(stored.calories, 3000);
    assert!(store.get_nutrition_targets(2).await.unwrap().is_none());
}

#[tokio::test]
async fn add_supplement_is_idempotent_on_client_and_name() {
    let (_temp_dir, db_path) = create_test_environment();
    let store = create_store(&db_path).await;

    let mut creatine = SupplementRecommendation {
        name: "Creatine".to_string(),
        dosage: "3 g".to_string(),
        timing: "any time".to_string(),
        frequency: "daily".to_string(),
        rationale: "Strength support".to_string(),
    };
    store.add_supplement(1, &creatine).await.unwrap();

    // A retried apply re-adds the same supplement; the row is updated,
    // not duplicated
    creatine.dosage = "5 g".to_string();
    store.add_supplement(1, &creatine).await.unwrap();
    assert_eq!(store.count_supplements(1).await.unwrap(), 1);

    // The same name for a different client is a separate row
    store.add_supplement(2, &creatine).await.unwrap();
    assert_eq!(store.count_supplements(2).await.unwrap(), 1);
}

#[tokio::test]
async fn generation_log_round_trips_payload_and_provenance() {
    let (_temp_dir, db_path) = create_test_environment();
    let store = create_store(&db_path).await;

    let payload = serde_json::to_value(sample_targets()).unwrap();
    let id = store
        .write_generation_log(7, StepKind::Nutrition, &payload, &provenance(512))
        .await
        .unwrap();
    assert!(id > 0);

    let entries = store.list_generation_log(7).await.unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.client_id, 7);
    assert_eq!(entry.kind, StepKind::Nutrition);
    assert_eq!(entry.payload, payload);
    assert_eq!(entry.model.as_deref(), Some("test-model"));
    assert_eq!(entry.tokens_used, 512);
    assert!(entry.used_knowledge_retrieval);

    assert!(store.list_generation_log(8).await.unwrap().is_empty());
}

#[tokio::test]
async fn coaching_events_round_trip_in_insertion_order() {
    let (_temp_dir, db_path) = create_test_environment();
    let store = create_store(&db_path).await;

    store
        .write_coaching_event(3, CoachingEventKind::IntakeAnalyzed, "Intake analysis recorded", None)
        .await
        .unwrap();
    store
        .write_coaching_event(
            3,
            CoachingEventKind::ProgramAssigned,
            "Training program 'Strength Foundation' assigned",
            Some(11),
        )
        .await
        .unwrap();

    let events = store.list_coaching_events(3).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, CoachingEventKind::IntakeAnalyzed);
    assert_eq!(events[0].related_id, None);
    assert_eq!(events[1].kind, CoachingEventKind::ProgramAssigned);
    assert_eq!(events[1].related_id, Some(11));
    assert!(events[1].title.contains("Strength Foundation"));
}

#[tokio::test]
async fn supplements_list_survives_a_retried_apply() {
    let (_temp_dir, db_path) = create_test_environment();
    let store = create_store(&db_path).await;

    for recommendation in &sample_supplements() {
        store.add_supplement(5, recommendation).await.unwrap();
    }
    // Retry the whole list, as the applier does after a partial failure
    for recommendation in &sample_supplements() {
        store.add_supplement(5, recommendation).await.unwrap();
    }

    assert_eq!(store.count_supplements(5).await.unwrap(), 3);
}
