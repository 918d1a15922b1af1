//! Provenance and audit record types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StepKind;

/// Provenance of one generated artifact: which model produced it, at what
/// token cost, and whether knowledge retrieval was involved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provenance {
    /// Model identity, when the generator reported it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Tokens consumed (0 if the generator did not report usage)
    pub tokens_used: u64,

    /// Whether a retrieval-augmented knowledge source was consulted
    pub used_knowledge_retrieval: bool,
}

/// One generation-log entry, written per applied artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationLogEntry {
    /// Unique identifier for the entry
    pub id: u64,

    /// Client the artifact was generated for
    pub client_id: u64,

    /// Which generation step produced the artifact
    pub kind: StepKind,

    /// The generated payload, as stored JSON
    pub payload: serde_json::Value,

    /// Model identity, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Tokens consumed by the generating call
    pub tokens_used: u64,

    /// Whether knowledge retrieval was used
    pub used_knowledge_retrieval: bool,

    /// Timestamp when the entry was written (UTC)
    pub created_at: Timestamp,
}

/// Type-safe enumeration of coaching event kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoachingEventKind {
    /// Intake data was analyzed
    IntakeAnalyzed,

    /// A training program was assigned
    ProgramAssigned,

    /// Nutrition targets were set
    NutritionTargetsSet,

    /// Supplement recommendations were added
    SupplementsAdded,
}

impl CoachingEventKind {
    /// The event kind recorded when the artifact for `step` is applied.
    pub fn for_step(step: StepKind) -> Self {
        match step {
            StepKind::IntakeAnalysis => CoachingEventKind::IntakeAnalyzed,
            StepKind::Training => CoachingEventKind::ProgramAssigned,
            StepKind::Nutrition => CoachingEventKind::NutritionTargetsSet,
            StepKind::Supplements => CoachingEventKind::SupplementsAdded,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoachingEventKind::IntakeAnalyzed => "intake_analyzed",
            CoachingEventKind::ProgramAssigned => "program_assigned",
            CoachingEventKind::NutritionTargetsSet => "nutrition_targets_set",
            CoachingEventKind::SupplementsAdded => "supplements_added",
        }
    }
}

impl std::str::FromStr for CoachingEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intake_analyzed" => Ok(CoachingEventKind::IntakeAnalyzed),
            "program_assigned" => Ok(CoachingEventKind::ProgramAssigned),
            "nutrition_targets_set" => Ok(CoachingEventKind::NutritionTargetsSet),
            "supplements_added" => Ok(CoachingEventKind::SupplementsAdded),
            _ => Err(format!("Invalid coaching event kind: {s}")),
        }
    }
}

/// One coaching timeline event, written per applied artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoachingEvent {
    /// Unique identifier for the event
    pub id: u64,

    /// Client the event belongs to
    pub client_id: u64,

    /// Event kind
    pub kind: CoachingEventKind,

    /// Human-readable event title
    pub title: String,

    /// Reference to the created record, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_id: Option<u64>,

    /// Timestamp when the event was written (UTC)
    pub created_at: Timestamp,
}
