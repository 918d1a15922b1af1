//! Per-artifact apply outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::StepKind;

/// Outcome of persisting one generated artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactOutcome {
    /// Whether persistence (and audit logging) completed
    pub success: bool,

    /// Failure description (present iff persistence failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// ID of the created record, where the artifact produces one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<u64>,
}

impl ArtifactOutcome {
    /// A successful outcome, optionally referencing the created record.
    pub fn applied(record_id: Option<u64>) -> Self {
        Self {
            success: true,
            error: None,
            record_id,
        }
    }

    /// A failed outcome carrying the persistence error.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            record_id: None,
        }
    }
}

/// Mapping from step kind to its apply outcome.
///
/// Contains one entry per step whose generation succeeded; steps whose
/// generation failed are never attempted and never appear here. Entries
/// iterate in step order (the same order artifacts are attempted).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyOutcome {
    entries: BTreeMap<StepKind, ArtifactOutcome>,
}

impl ApplyOutcome {
    /// An empty outcome map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for a step, replacing any prior entry.
    pub fn record(&mut self, kind: StepKind, outcome: ArtifactOutcome) {
        self.entries.insert(kind, outcome);
    }

    /// The outcome for a step, if it was attempted.
    pub fn get(&self, kind: StepKind) -> Option<&ArtifactOutcome> {
        self.entries.get(&kind)
    }

    /// Whether the step has already been applied successfully.
    pub fn is_applied(&self, kind: StepKind) -> bool {
        self.get(kind).is_some_and(|o| o.success)
    }

    /// Iterate over entries in step order.
    pub fn iter(&self) -> impl Iterator<Item = (StepKind, &ArtifactOutcome)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Step kinds whose persistence failed on the last attempt.
    pub fn failed_kinds(&self) -> Vec<StepKind> {
        self.entries
            .iter()
            .filter(|(_, o)| !o.success)
            .map(|(k, _)| *k)
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no step has been attempted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
