//! Generator seam: the external AI content-generation collaborators.
//!
//! The orchestrator never calls a model directly. Each generation step is
//! backed by one method on [`GeneratorSuite`], implemented outside this
//! crate (an LLM backend in production, a scripted fixture in the CLI and
//! tests). Every call returns either a [`Generated`] value carrying the
//! payload plus provenance, or a [`GeneratorError`] describing a structured
//! failure. Both outcomes are expected; neither aborts a run.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    IntakeAnalysis, NutritionTargets, Provenance, SupplementRecommendation, TrainingProgram,
};

/// Structured failure reported by a generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The generator reported a failure (invalid intake, upstream quota, a
    /// refused prompt)
    #[error("{0}")]
    Failed(String),

    /// The call exceeded its deadline
    #[error("generator call timed out after {0}s")]
    Timeout(u64),
}

/// A successfully generated value plus its provenance.
///
/// Token usage and the retrieval flag are normalized here, at the seam, so
/// every step contributes a `tokens_used` figure even when a backend omits
/// usage reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    /// The generated content
    pub value: T,

    /// Model identity, when the backend reports it
    pub model: Option<String>,

    /// Tokens consumed by the call (0 if unavailable)
    pub tokens_used: u64,

    /// Whether a retrieval-augmented knowledge source was consulted
    pub used_knowledge_retrieval: bool,
}

impl<T> Generated<T> {
    /// Provenance snapshot for this value.
    pub fn provenance(&self) -> Provenance {
        Provenance {
            model: self.model.clone(),
            tokens_used: self.tokens_used,
            used_knowledge_retrieval: self.used_knowledge_retrieval,
        }
    }
}

/// Result alias for generator calls.
pub type GeneratorResult<T> = Result<Generated<T>, GeneratorError>;

/// The four external generation calls backing a plan run.
///
/// Each generator independently re-derives what it needs from the client
/// record, so no method depends on another having succeeded. Generation
/// output from a training call also carries human-readable warnings
/// (safety caveats) alongside the program itself.
#[async_trait]
pub trait GeneratorSuite: Send + Sync {
    /// Analyze the client's intake data into free text.
    async fn analyze_intake(&self, client_id: u64) -> GeneratorResult<IntakeAnalysis>;

    /// Generate a structured training program.
    async fn generate_training(&self, client_id: u64) -> GeneratorResult<TrainingProgram>;

    /// Generate daily nutrition targets.
    async fn generate_nutrition(&self, client_id: u64) -> GeneratorResult<NutritionTargets>;

    /// Generate an ordered list of supplement recommendations.
    async fn generate_supplements(
        &self,
        client_id: u64,
    ) -> GeneratorResult<Vec<SupplementRecommendation>>;
}
