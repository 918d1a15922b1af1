//! Display implementations for domain models.
//!
//! Markdown formatting for generated payloads and audit records, kept
//! apart from the model definitions. The review screen shows the raw
//! generated content, not a paraphrase of it.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    CoachingEvent, GenerationLogEntry, IntakeAnalysis, NutritionTargets, StepPayload,
    SupplementRecommendation, TrainingDay, TrainingProgram,
};

impl fmt::Display for StepPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPayload::IntakeAnalysis(analysis) => write!(f, "{analysis}"),
            StepPayload::Training(program) => write!(f, "{program}"),
            StepPayload::Nutrition(targets) => write!(f, "{targets}"),
            StepPayload::Supplements(recommendations) => {
                if recommendations.is_empty() {
                    writeln!(f, "No supplements recommended.")
                } else {
                    for recommendation in recommendations {
                        write!(f, "{recommendation}")?;
                    }
                    Ok(())
                }
            }
        }
    }
}

impl fmt::Display for IntakeAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.analysis)
    }
}

impl fmt::Display for TrainingProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        for block in &self.blocks {
            writeln!(f)?;
            writeln!(f, "**{}** ({} weeks)", block.name, block.duration_weeks)?;
            for (i, day) in block.days.iter().enumerate() {
                match day {
                    TrainingDay::Rest => writeln!(f, "- Day {}: Rest", i + 1)?,
                    TrainingDay::Workout { exercises } => {
                        writeln!(f, "- Day {}:", i + 1)?;
                        for exercise in exercises {
                            write!(f, "  - {}: {}x{}", exercise.name, exercise.sets, exercise.reps)?;
                            if let Some(rest) = exercise.rest_seconds {
                                write!(f, ", rest {rest}s")?;
                            }
                            if let Some(notes) = &exercise.notes {
                                write!(f, " ({notes})")?;
                            }
                            writeln!(f)?;
                        }
                    }
                }
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "- {warning}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for NutritionTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Calories: {} kcal", self.calories)?;
        writeln!(f, "- Protein: {} g", self.protein_g)?;
        writeln!(f, "- Carbs: {} g", self.carbs_g)?;
        writeln!(f, "- Fat: {} g", self.fat_g)?;
        writeln!(f)?;
        writeln!(f, "{}", self.rationale)
    }
}

impl fmt::Display for SupplementRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}**: {} {} ({}). {}",
            self.name, self.dosage, self.frequency, self.timing, self.rationale
        )
    }
}

impl fmt::Display for GenerationLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- [{}] {}: {} tokens",
            LocalDateTime(&self.created_at),
            self.kind.label(),
            self.tokens_used
        )?;
        if let Some(model) = &self.model {
            write!(f, ", model {model}")?;
        }
        if self.used_knowledge_retrieval {
            write!(f, ", knowledge retrieval")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CoachingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- [{}] {}",
            LocalDateTime(&self.created_at),
            self.title
        )?;
        if let Some(related) = self.related_id {
            write!(f, " (record {related})")?;
        }
        writeln!(f)
    }
}
