//! Unit tests for the orchestrator and step adapter.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};

use super::*;
use crate::generate::{Generated, GeneratorError, GeneratorResult, GeneratorSuite};
use crate::models::{
    IntakeAnalysis, NutritionTargets, SupplementRecommendation, TrainingProgram,
};

/// Scripted generator suite: per-step canned failures, token counts, an
/// optional artificial delay, and a call log.
#[derive(Default)]
struct ScriptedGenerators {
    failures: HashMap<StepKind, String>,
    tokens: HashMap<StepKind, u64>,
    delay: Option<Duration>,
    cancel_after_intake: Option<watch::Sender<bool>>,
    calls: Mutex<Vec<StepKind>>,
}

impl ScriptedGenerators {
    fn failing(kind: StepKind, error: &str) -> Self {
        Self {
            failures: HashMap::from([(kind, error.to_string())]),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<StepKind> {
        self.calls.lock().unwrap().clone()
    }

    async fn step<T>(&self, kind: StepKind, value: T) -> GeneratorResult<T> {
        self.calls.lock().unwrap().push(kind);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if kind == StepKind::IntakeAnalysis {
            if let Some(tx) = &self.cancel_after_intake {
                let _ = tx.send(true);
            }
        }
        if let Some(error) = self.failures.get(&kind) {
            return Err(GeneratorError::Failed(error.clone()));
        }
        Ok(Generated {
            value,
            model: Some("scripted-v1".to_string()),
            tokens_used: self.tokens.get(&kind).copied().unwrap_or(100),
            used_knowledge_retrieval: kind == StepKind::IntakeAnalysis,
        })
    }
}

#[async_trait]
impl GeneratorSuite for ScriptedGenerators {
    async fn analyze_intake(&self, _client_id: u64) -> GeneratorResult<IntakeAnalysis> {
        self.step(
            StepKind::IntakeAnalysis,
            IntakeAnalysis {
                analysis: "Client presents strong adherence history".to_string(),
            },
        )
        .await
    }

    async fn generate_training(&self, _client_id: u64) -> GeneratorResult<TrainingProgram> {
        self.step(
            StepKind::Training,
            TrainingProgram {
                name: "Base Block".to_string(),
                description: None,
                blocks: Vec::new(),
                warnings: Vec::new(),
            },
        )
        .await
    }

    async fn generate_nutrition(&self, _client_id: u64) -> GeneratorResult<NutritionTargets> {
        self.step(
            StepKind::Nutrition,
            NutritionTargets {
                calories: 2400,
                protein_g: 170,
                carbs_g: 250,
                fat_g: 75,
                rationale: "Maintenance with high protein".to_string(),
            },
        )
        .await
    }

    async fn generate_supplements(
        &self,
        _client_id: u64,
    ) -> GeneratorResult<Vec<SupplementRecommendation>> {
        self.step(
            StepKind::Supplements,
            vec![SupplementRecommendation {
                name: "Creatine".to_string(),
                dosage: "5 g".to_string(),
                timing: "any time".to_string(),
                frequency: "daily".to_string(),
                rationale: "Well-evidenced strength support".to_string(),
            }],
        )
        .await
    }
}

#[tokio::test]
async fn run_produces_one_result_per_selected_step() {
    for options in [
        PlanOptions::default(),
        PlanOptions::none(),
        PlanOptions {
            training: true,
            nutrition: false,
            supplements: true,
        },
    ] {
        let orchestrator = Orchestrator::builder(ScriptedGenerators::default()).build();
        let run = orchestrator.run(1, options).await;
        assert_eq!(run.steps.len(), 1 + options.enabled_count());
        assert_eq!(run.phase, Phase::Review);
        // Results appear in the fixed step order
        let kinds: Vec<StepKind> = run.steps.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, StepKind::sequence(&options));
    }
}

#[tokio::test]
async fn failed_step_never_blocks_later_steps() {
    let generators = ScriptedGenerators::failing(StepKind::Training, "upstream quota exceeded");
    let orchestrator = Orchestrator::builder(generators).build();
    let run = orchestrator.run(1, PlanOptions::default()).await;

    assert_eq!(run.steps.len(), 4);
    let training = run.result_for(StepKind::Training).unwrap();
    assert!(!training.succeeded());
    assert_eq!(training.error.as_deref(), Some("upstream quota exceeded"));
    assert!(run.result_for(StepKind::Nutrition).unwrap().succeeded());
    assert!(run.result_for(StepKind::Supplements).unwrap().succeeded());
}

#[tokio::test]
async fn intake_failure_does_not_abort_the_run() {
    let generators = ScriptedGenerators::failing(StepKind::IntakeAnalysis, "invalid intake");
    let orchestrator = Orchestrator::builder(generators).build();
    let run = orchestrator.run(1, PlanOptions::default()).await;

    assert!(!run.result_for(StepKind::IntakeAnalysis).unwrap().succeeded());
    assert_eq!(run.successful_steps().count(), 3);
}

#[tokio::test]
async fn total_tokens_sums_all_steps_exactly() {
    let generators = ScriptedGenerators {
        tokens: HashMap::from([
            (StepKind::IntakeAnalysis, 811),
            (StepKind::Training, 1204),
            (StepKind::Nutrition, 402),
            (StepKind::Supplements, 277),
        ]),
        ..ScriptedGenerators::default()
    };
    let orchestrator = Orchestrator::builder(generators).build();
    let run = orchestrator.run(1, PlanOptions::default()).await;
    assert_eq!(run.total_tokens(), 811 + 1204 + 402 + 277);
}

#[tokio::test]
async fn failed_steps_contribute_zero_tokens() {
    let generators = ScriptedGenerators::failing(StepKind::Nutrition, "model timeout");
    let orchestrator = Orchestrator::builder(generators).build();
    let run = orchestrator.run(1, PlanOptions::default()).await;
    assert_eq!(run.total_tokens(), 300);
}

#[tokio::test]
async fn progress_event_emitted_per_completed_step() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let orchestrator = Orchestrator::builder(ScriptedGenerators::failing(
        StepKind::Training,
        "quota",
    ))
    .with_progress(tx)
    .build();
    let _run = orchestrator.run(1, PlanOptions::default()).await;

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(events.len(), 4);
    assert_eq!(events[0].completed, 1);
    assert_eq!(events[0].total, 4);
    assert!(events[0].succeeded);
    assert_eq!(events[1].kind, StepKind::Training);
    assert!(!events[1].succeeded);
    assert_eq!(events[3].completed, 4);
}

#[tokio::test]
async fn cancellation_before_start_produces_empty_reviewable_run() {
    let (tx, rx) = watch::channel(false);
    tx.send(true).unwrap();
    let orchestrator = Orchestrator::builder(ScriptedGenerators::default())
        .with_cancellation(rx)
        .build();
    let run = orchestrator.run(1, PlanOptions::default()).await;

    assert!(run.steps.is_empty());
    assert_eq!(run.phase, Phase::Review);
}

#[tokio::test]
async fn cancellation_takes_effect_between_steps() {
    let (tx, rx) = watch::channel(false);
    let generators = ScriptedGenerators {
        cancel_after_intake: Some(tx),
        ..ScriptedGenerators::default()
    };
    let orchestrator = Orchestrator::builder(generators)
        .with_cancellation(rx)
        .build();
    let run = orchestrator.run(1, PlanOptions::default()).await;

    // The in-flight intake step completes; no further step is issued
    assert_eq!(run.steps.len(), 1);
    assert_eq!(run.steps[0].kind, StepKind::IntakeAnalysis);
    assert!(run.steps[0].succeeded());
    assert_eq!(run.phase, Phase::Review);
}

#[tokio::test]
async fn generator_timeout_becomes_a_failed_step() {
    let generators = ScriptedGenerators {
        delay: Some(Duration::from_millis(200)),
        ..ScriptedGenerators::default()
    };
    let orchestrator = Orchestrator::builder(generators)
        .with_step_timeout(Duration::from_millis(10))
        .build();
    let run = orchestrator.run(1, PlanOptions::none()).await;

    let intake = run.result_for(StepKind::IntakeAnalysis).unwrap();
    assert!(!intake.succeeded());
    assert!(intake.error.as_deref().unwrap().contains("timed out"));
    assert_eq!(run.phase, Phase::Review);
}

#[tokio::test]
async fn every_selected_generator_is_called_exactly_once() {
    let orchestrator = Orchestrator::builder(ScriptedGenerators::default()).build();
    let run = orchestrator
        .run(
            1,
            PlanOptions {
                training: false,
                nutrition: true,
                supplements: false,
            },
        )
        .await;

    assert_eq!(run.steps.len(), 2);
    assert_eq!(
        orchestrator.generators.calls(),
        vec![StepKind::IntakeAnalysis, StepKind::Nutrition]
    );
}

#[tokio::test]
async fn provenance_flows_through_the_adapter() {
    let orchestrator = Orchestrator::builder(ScriptedGenerators::default()).build();
    let run = orchestrator.run(1, PlanOptions::none()).await;

    let intake = run.result_for(StepKind::IntakeAnalysis).unwrap();
    assert_eq!(intake.model.as_deref(), Some("scripted-v1"));
    assert!(intake.used_knowledge_retrieval);
}
