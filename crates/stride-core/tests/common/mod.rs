//! Shared test fixtures: a scripted generator suite and a recording
//! artifact store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use stride_core::generate::{Generated, GeneratorError, GeneratorResult, GeneratorSuite};
use stride_core::models::{
    CoachingEventKind, IntakeAnalysis, NutritionTargets, Provenance, StepKind,
    SupplementRecommendation, TrainingProgram,
};
use stride_core::{OrchestratorError, Result};

/// Generator suite with canned payloads and per-step scripted failures.
#[derive(Default)]
pub struct ScriptedGenerators {
    pub failures: HashMap<StepKind, String>,
}

impl ScriptedGenerators {
    pub fn all_ok() -> Self {
        Self::default()
    }

    pub fn failing(kind: StepKind, error: &str) -> Self {
        Self {
            failures: HashMap::from([(kind, error.to_string())]),
        }
    }

    fn outcome<T>(&self, kind: StepKind, value: T, tokens: u64) -> GeneratorResult<T> {
        if let Some(error) = self.failures.get(&kind) {
            return Err(GeneratorError::Failed(error.clone()));
        }
        Ok(Generated {
            value,
            model: Some("scripted-v1".to_string()),
            tokens_used: tokens,
            used_knowledge_retrieval: false,
        })
    }
}

pub fn sample_program() -> TrainingProgram {
    TrainingProgram {
        name: "Strength Foundation".to_string(),
        description: Some("12-week linear progression".to_string()),
        blocks: Vec::new(),
        warnings: vec!["Deload on week 6".to_string()],
    }
}

pub fn sample_targets() -> NutritionTargets {
    NutritionTargets {
        calories: 2500,
        protein_g: 175,
        carbs_g: 260,
        fat_g: 78,
        rationale: "Slight deficit, protein preserved".to_string(),
    }
}

pub fn sample_supplements() -> Vec<SupplementRecommendation> {
    ["Creatine", "Omega-3", "Vitamin D"]
        .iter()
        .map(|name| SupplementRecommendation {
            name: (*name).to_string(),
            dosage: "standard".to_string(),
            timing: "with breakfast".to_string(),
            frequency: "daily".to_string(),
            rationale: "General support".to_string(),
        })
        .collect()
}

#[async_trait]
impl GeneratorSuite for ScriptedGenerators {
    async fn analyze_intake(&self, _client_id: u64) -> GeneratorResult<IntakeAnalysis> {
        self.outcome(
            StepKind::IntakeAnalysis,
            IntakeAnalysis {
                analysis: "Intake looks complete and consistent".to_string(),
            },
            320,
        )
    }

    async fn generate_training(&self, _client_id: u64) -> GeneratorResult<TrainingProgram> {
        self.outcome(StepKind::Training, sample_program(), 1450)
    }

    async fn generate_nutrition(&self, _client_id: u64) -> GeneratorResult<NutritionTargets> {
        self.outcome(StepKind::Nutrition, sample_targets(), 390)
    }

    async fn generate_supplements(
        &self,
        _client_id: u64,
    ) -> GeneratorResult<Vec<SupplementRecommendation>> {
        self.outcome(StepKind::Supplements, sample_supplements(), 260)
    }
}

/// Artifact store that records every call and fails on request.
#[derive(Default)]
pub struct RecordingStore {
    pub fail_training: Mutex<bool>,
    pub fail_nutrition: Mutex<bool>,
    pub fail_supplement_named: Mutex<Option<String>>,
    pub program_saves: Mutex<u32>,
    pub nutrition_saves: Mutex<u32>,
    pub supplement_saves: Mutex<Vec<String>>,
    pub log_writes: Mutex<Vec<StepKind>>,
    pub event_writes: Mutex<Vec<(CoachingEventKind, String)>>,
}

impl RecordingStore {
    fn store_error(message: &str) -> OrchestratorError {
        OrchestratorError::Configuration {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl stride_core::ArtifactStore for RecordingStore {
    async fn save_training_program(
        &self,
        _client_id: u64,
        _program: &TrainingProgram,
    ) -> Result<u64> {
        if *self.fail_training.lock().unwrap() {
            return Err(Self::store_error("program table unavailable"));
        }
        let mut saves = self.program_saves.lock().unwrap();
        *saves += 1;
        Ok(u64::from(*saves))
    }

    async fn set_nutrition_targets(
        &self,
        _client_id: u64,
        _targets: &NutritionTargets,
        _provenance: &Provenance,
    ) -> Result<()> {
        if *self.fail_nutrition.lock().unwrap() {
            return Err(Self::store_error("targets table unavailable"));
        }
        *self.nutrition_saves.lock().unwrap() += 1;
        Ok(())
    }

    async fn add_supplement(
        &self,
        _client_id: u64,
        recommendation: &SupplementRecommendation,
    ) -> Result<()> {
        if self
            .fail_supplement_named
            .lock()
            .unwrap()
            .as_deref()
            .is_some_and(|name| name == recommendation.name)
        {
            return Err(Self::store_error("supplement insert rejected"));
        }
        self.supplement_saves
            .lock()
            .unwrap()
            .push(recommendation.name.clone());
        Ok(())
    }

    async fn write_generation_log(
        &self,
        _client_id: u64,
        kind: StepKind,
        _payload: &serde_json::Value,
        _provenance: &Provenance,
    ) -> Result<u64> {
        let mut writes = self.log_writes.lock().unwrap();
        writes.push(kind);
        Ok(writes.len() as u64)
    }

    async fn write_coaching_event(
        &self,
        _client_id: u64,
        kind: CoachingEventKind,
        title: &str,
        _related_id: Option<u64>,
    ) -> Result<u64> {
        let mut writes = self.event_writes.lock().unwrap();
        writes.push((kind, title.to_string()));
        Ok(writes.len() as u64)
    }
}
