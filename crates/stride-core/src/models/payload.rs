//! Step-specific generated payload types.

use serde::{Deserialize, Serialize};

use super::StepKind;

/// Generated content for one step, tagged by step kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StepPayload {
    /// Free-text intake analysis
    IntakeAnalysis(IntakeAnalysis),

    /// Structured training program
    Training(TrainingProgram),

    /// Daily nutrition targets
    Nutrition(NutritionTargets),

    /// Ordered supplement recommendations
    Supplements(Vec<SupplementRecommendation>),
}

impl StepPayload {
    /// The step kind this payload belongs to.
    pub fn kind(&self) -> StepKind {
        match self {
            StepPayload::IntakeAnalysis(_) => StepKind::IntakeAnalysis,
            StepPayload::Training(_) => StepKind::Training,
            StepPayload::Nutrition(_) => StepKind::Nutrition,
            StepPayload::Supplements(_) => StepKind::Supplements,
        }
    }
}

/// Free-text analysis of a client's intake data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeAnalysis {
    /// The analysis text
    pub analysis: String,
}

/// A structured training program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingProgram {
    /// Program name
    pub name: String,

    /// Optional multi-line description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered training blocks
    pub blocks: Vec<TrainingBlock>,

    /// Human-readable warnings (safety caveats, contraindications)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// One block of a training program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingBlock {
    /// Block name (e.g. "Hypertrophy Base")
    pub name: String,

    /// Block duration in weeks
    pub duration_weeks: u32,

    /// Ordered training days within one week of the block
    pub days: Vec<TrainingDay>,
}

/// One prescribed day within a training block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrainingDay {
    /// Rest day, no prescription
    Rest,

    /// Workout day with an ordered exercise list
    Workout {
        /// Prescribed exercises in execution order
        exercises: Vec<Exercise>,
    },
}

/// A single exercise prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,

    /// Number of sets
    pub sets: u32,

    /// Rep scheme (free-form: "8-12", "AMRAP", "5x5 @ RPE 8")
    pub reps: String,

    /// Rest between sets in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,

    /// Coaching cues or substitution notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Daily nutrition targets with a rationale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    /// Daily calorie target (kcal)
    pub calories: u32,

    /// Daily protein target (grams)
    pub protein_g: u32,

    /// Daily carbohydrate target (grams)
    pub carbs_g: u32,

    /// Daily fat target (grams)
    pub fat_g: u32,

    /// Why these targets were chosen
    pub rationale: String,
}

/// One supplement recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplementRecommendation {
    /// Supplement name (unique per client in the reference store)
    pub name: String,

    /// Dosage (e.g. "5 g")
    pub dosage: String,

    /// Timing (e.g. "post-workout", "with breakfast")
    pub timing: String,

    /// Frequency (e.g. "daily")
    pub frequency: String,

    /// Why this supplement is recommended
    pub rationale: String,
}
