//! Fixture-scripted generator suite.
//!
//! The CLI drives generation from a JSON fixture file instead of a live
//! model backend. Each step is scripted independently, either with a full
//! payload or with an error message, so plan flows can be exercised end to
//! end without network access.
//!
//! Fixture file format:
//!
//! ```json
//! {
//!   "model": "coach-v2",
//!   "steps": {
//!     "intake_analysis": {
//!       "ok": { "analysis": "Intake looks complete" },
//!       "tokens_used": 320
//!     },
//!     "training": { "err": "model timeout" }
//!   }
//! }
//! ```
//!
//! A step missing from the file fails with a descriptive error, which keeps
//! fixture gaps visible in the review output instead of silently succeeding.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use stride_core::generate::{Generated, GeneratorError, GeneratorResult, GeneratorSuite};
use stride_core::models::{
    IntakeAnalysis, NutritionTargets, StepKind, SupplementRecommendation, TrainingProgram,
};

/// Scripted outcome for a single generation step.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureStep {
    /// Payload produced by the step, in the step's payload shape
    #[serde(default)]
    pub ok: Option<serde_json::Value>,
    /// Error message the step fails with; takes precedence over `ok`
    #[serde(default)]
    pub err: Option<String>,
    /// Model identifier for this step, overriding the file-level default
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub tokens_used: u64,
    #[serde(default)]
    pub used_knowledge_retrieval: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct FixtureFile {
    /// Default model identifier applied to steps without their own
    #[serde(default)]
    model: Option<String>,
    steps: HashMap<StepKind, FixtureStep>,
}

/// Generator suite backed by a JSON fixture file.
#[derive(Debug, Clone)]
pub struct FixtureGenerators {
    default_model: Option<String>,
    steps: HashMap<StepKind, FixtureStep>,
}

impl FixtureGenerators {
    /// Loads and parses a fixture file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
        let file: FixtureFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse fixture file {}", path.display()))?;
        Ok(Self {
            default_model: file.model,
            steps: file.steps,
        })
    }

    fn generated<T: DeserializeOwned>(&self, kind: StepKind) -> GeneratorResult<T> {
        let step = self.steps.get(&kind).ok_or_else(|| {
            GeneratorError::Failed(format!("no fixture scripted for step '{}'", kind.as_str()))
        })?;
        if let Some(error) = &step.err {
            return Err(GeneratorError::Failed(error.clone()));
        }
        let payload = step.ok.clone().ok_or_else(|| {
            GeneratorError::Failed(format!(
                "fixture for step '{}' has neither ok nor err",
                kind.as_str()
            ))
        })?;
        let value = serde_json::from_value(payload).map_err(|e| {
            GeneratorError::Failed(format!(
                "fixture payload for step '{}' is malformed: {e}",
                kind.as_str()
            ))
        })?;
        Ok(Generated {
            value,
            model: step.model.clone().or_else(|| self.default_model.clone()),
            tokens_used: step.tokens_used,
            used_knowledge_retrieval: step.used_knowledge_retrieval,
        })
    }
}

#[async_trait]
impl GeneratorSuite for FixtureGenerators {
    async fn analyze_intake(&self, _client_id: u64) -> GeneratorResult<IntakeAnalysis> {
        self.generated(StepKind::IntakeAnalysis)
    }

    async fn generate_training(&self, _client_id: u64) -> GeneratorResult<TrainingProgram> {
        self.generated(StepKind::Training)
    }

    async fn generate_nutrition(&self, _client_id: u64) -> GeneratorResult<NutritionTargets> {
        self.generated(StepKind::Nutrition)
    }

    async fn generate_supplements(
        &self,
        _client_id: u64,
    ) -> GeneratorResult<Vec<SupplementRecommendation>> {
        self.generated(StepKind::Supplements)
    }
}
