//! Step kinds and per-step generation results.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PlanOptions, Provenance, StepPayload};

/// Type-safe enumeration of generation steps.
///
/// The declaration order is the fixed execution order: intake analysis
/// always runs first, the optional steps follow in training, nutrition,
/// supplements order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Free-text analysis of the client's intake data
    IntakeAnalysis,

    /// Structured training program
    Training,

    /// Daily nutrition targets
    Nutrition,

    /// Supplement recommendations
    Supplements,
}

impl StepKind {
    /// Computes the ordered step sequence for a run.
    ///
    /// Intake analysis is unconditional; the optional steps are included
    /// only when enabled in `options`.
    pub fn sequence(options: &PlanOptions) -> Vec<StepKind> {
        let mut kinds = vec![StepKind::IntakeAnalysis];
        if options.training {
            kinds.push(StepKind::Training);
        }
        if options.nutrition {
            kinds.push(StepKind::Nutrition);
        }
        if options.supplements {
            kinds.push(StepKind::Supplements);
        }
        kinds
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::IntakeAnalysis => "intake_analysis",
            StepKind::Training => "training",
            StepKind::Nutrition => "nutrition",
            StepKind::Supplements => "supplements",
        }
    }

    /// Human-readable label for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::IntakeAnalysis => "Intake Analysis",
            StepKind::Training => "Training Program",
            StepKind::Nutrition => "Nutrition Targets",
            StepKind::Supplements => "Supplements",
        }
    }
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intake_analysis" | "intake" => Ok(StepKind::IntakeAnalysis),
            "training" => Ok(StepKind::Training),
            "nutrition" => Ok(StepKind::Nutrition),
            "supplements" => Ok(StepKind::Supplements),
            _ => Err(format!("Invalid step kind: {s}")),
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one executed generation step.
///
/// `payload` is present exactly when the step succeeded; `error` is present
/// exactly when it failed. Token usage is always reported (0 when the
/// generator did not provide it), so run-level cost accounting never skips
/// a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepResult {
    /// Which step this result belongs to
    pub kind: StepKind,

    /// Generated content (present iff the step succeeded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<StepPayload>,

    /// Failure description (present iff the step failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Model that produced the content, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Tokens consumed by the generator call (0 if unavailable)
    pub tokens_used: u64,

    /// Whether the generator drew on a retrieval-augmented knowledge source
    pub used_knowledge_retrieval: bool,
}

impl StepResult {
    /// Builds a successful result from a generated payload and its
    /// provenance.
    pub fn generated(kind: StepKind, payload: StepPayload, provenance: Provenance) -> Self {
        Self {
            kind,
            payload: Some(payload),
            error: None,
            model: provenance.model,
            tokens_used: provenance.tokens_used,
            used_knowledge_retrieval: provenance.used_knowledge_retrieval,
        }
    }

    /// Builds a failed result carrying the error description.
    pub fn failed(kind: StepKind, error: impl Into<String>) -> Self {
        Self {
            kind,
            payload: None,
            error: Some(error.into()),
            model: None,
            tokens_used: 0,
            used_knowledge_retrieval: false,
        }
    }

    /// Whether this step produced a payload.
    pub fn succeeded(&self) -> bool {
        self.payload.is_some()
    }

    /// Provenance snapshot for audit logging.
    pub fn provenance(&self) -> Provenance {
        Provenance {
            model: self.model.clone(),
            tokens_used: self.tokens_used,
            used_knowledge_retrieval: self.used_knowledge_retrieval,
        }
    }
}
