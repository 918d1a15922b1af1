//! Parameter structures for orchestration operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, other
//! surfaces later) without framework-specific derives. Interface layers
//! define their own argument types and convert into these.

use serde::{Deserialize, Serialize};

use crate::models::PlanOptions;

/// Parameters for starting a plan generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratePlan {
    /// Client to generate the plan for
    pub client_id: u64,

    /// Optional step selection
    pub options: PlanOptions,
}

/// Parameters identifying a client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientId {
    /// The client's unique identifier
    pub client_id: u64,
}
