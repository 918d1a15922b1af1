//! Review screen formatting.

use std::fmt;

use crate::review::{ReviewOutcome, ReviewView};

/// Wrapper type for rendering a [`ReviewView`] as a markdown report.
///
/// Marks each step as generated, failed, or applied, and shows the raw
/// payload per step so the caller can inspect exactly what apply would
/// persist.
pub struct ReviewReport<'a>(pub &'a ReviewView<'a>);

impl<'a> fmt::Display for ReviewReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0.summary();
        writeln!(f, "# Plan Review")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Steps: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        )?;
        writeln!(f, "- Total tokens: {}", summary.total_tokens)?;

        for entry in self.0.entries() {
            writeln!(f)?;
            let marker = match (&entry.outcome, entry.applied) {
                (_, Some(applied)) if applied.success => "✓ applied",
                (ReviewOutcome::Generated(_), Some(_)) => "✗ apply failed",
                (ReviewOutcome::Generated(_), None) => "○ generated",
                (ReviewOutcome::Failed(_), _) => "✗ failed",
            };
            writeln!(f, "## {} [{marker}]", entry.kind.label())?;
            writeln!(f)?;

            match &entry.outcome {
                ReviewOutcome::Generated(payload) => {
                    write!(f, "{payload}")?;
                    if entry.provenance.tokens_used > 0 || entry.provenance.model.is_some() {
                        writeln!(f)?;
                        write!(f, "_{} tokens", entry.provenance.tokens_used)?;
                        if let Some(model) = &entry.provenance.model {
                            write!(f, ", {model}")?;
                        }
                        if entry.provenance.used_knowledge_retrieval {
                            write!(f, ", knowledge retrieval")?;
                        }
                        writeln!(f, "_")?;
                    }
                }
                ReviewOutcome::Failed(error) => {
                    writeln!(f, "Error: {error}")?;
                }
            }

            if let Some(applied) = entry.applied {
                if let Some(error) = &applied.error {
                    writeln!(f)?;
                    writeln!(f, "Apply error: {error}")?;
                }
            }
        }

        Ok(())
    }
}
