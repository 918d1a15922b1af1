//! Result wrapper types for displaying apply outcomes.

use std::fmt;

use crate::models::ApplyOutcome;

/// Wrapper type for displaying the result of an apply invocation.
///
/// Formats the per-artifact outcome map with one line per attempted step,
/// so the caller can see exactly which artifacts landed and which need a
/// retry.
pub struct ApplyReport<'a>(pub &'a ApplyOutcome);

impl<'a> fmt::Display for ApplyReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No artifacts were applied.");
        }

        writeln!(f, "# Apply Report")?;
        writeln!(f)?;
        for (kind, outcome) in self.0.iter() {
            if outcome.success {
                write!(f, "- ✓ {}", kind.label())?;
                if let Some(record_id) = outcome.record_id {
                    write!(f, " (record {record_id})")?;
                }
                writeln!(f)?;
            } else {
                writeln!(
                    f,
                    "- ✗ {}: {}",
                    kind.label(),
                    outcome.error.as_deref().unwrap_or("unknown error")
                )?;
            }
        }

        let failed = self.0.failed_kinds();
        if !failed.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "{} artifact(s) failed; re-run apply to retry only the failed subset.",
                failed.len()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtifactOutcome, StepKind};

    #[test]
    fn report_lists_successes_and_failures() {
        let mut outcome = ApplyOutcome::new();
        outcome.record(StepKind::Training, ArtifactOutcome::applied(Some(3)));
        outcome.record(StepKind::Supplements, ArtifactOutcome::failed("disk full"));

        let report = format!("{}", ApplyReport(&outcome));
        assert!(report.contains("✓ Training Program (record 3)"));
        assert!(report.contains("✗ Supplements: disk full"));
        assert!(report.contains("re-run apply"));
    }

    #[test]
    fn empty_report() {
        let outcome = ApplyOutcome::new();
        let report = format!("{}", ApplyReport(&outcome));
        assert!(report.contains("No artifacts"));
    }
}
