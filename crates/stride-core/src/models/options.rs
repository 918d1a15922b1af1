//! Plan generation options.

use serde::{Deserialize, Serialize};

/// Selection of optional generation steps for a plan run.
///
/// Intake analysis is always performed and has no flag here. Options are
/// fixed once generation starts; the orchestrator copies them into the
/// [`crate::models::PlanRun`] and never consults them again afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanOptions {
    /// Generate a structured training program
    pub training: bool,

    /// Generate daily nutrition targets
    pub nutrition: bool,

    /// Generate supplement recommendations
    pub supplements: bool,
}

impl Default for PlanOptions {
    /// A full plan: every optional step enabled.
    fn default() -> Self {
        Self {
            training: true,
            nutrition: true,
            supplements: true,
        }
    }
}

impl PlanOptions {
    /// Options with every optional step disabled (intake analysis only).
    pub fn none() -> Self {
        Self {
            training: false,
            nutrition: false,
            supplements: false,
        }
    }

    /// Number of enabled optional steps.
    pub fn enabled_count(&self) -> usize {
        usize::from(self.training) + usize::from(self.nutrition) + usize::from(self.supplements)
    }
}
