//! Builder for creating and configuring Orchestrator instances.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use super::{Orchestrator, Progress};
use crate::adapter::DEFAULT_STEP_TIMEOUT;
use crate::generate::GeneratorSuite;

/// Builder for creating and configuring Orchestrator instances.
pub struct OrchestratorBuilder<G> {
    generators: G,
    step_timeout: Duration,
    progress: Option<mpsc::UnboundedSender<Progress>>,
    cancel: Option<watch::Receiver<bool>>,
}

impl<G: GeneratorSuite> OrchestratorBuilder<G> {
    /// Creates a new builder with default settings.
    pub fn new(generators: G) -> Self {
        Self {
            generators,
            step_timeout: DEFAULT_STEP_TIMEOUT,
            progress: None,
            cancel: None,
        }
    }

    /// Sets the per-step generator timeout.
    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = timeout;
        self
    }

    /// Attaches a progress channel; one event is sent per completed step.
    pub fn with_progress(mut self, sender: mpsc::UnboundedSender<Progress>) -> Self {
        self.progress = Some(sender);
        self
    }

    /// Attaches a cancellation signal, observed between steps.
    ///
    /// Send `true` on the paired [`watch::Sender`] to stop the run at the
    /// next safe point; in-flight generator calls are not preempted.
    pub fn with_cancellation(mut self, receiver: watch::Receiver<bool>) -> Self {
        self.cancel = Some(receiver);
        self
    }

    /// Builds the configured orchestrator instance.
    pub fn build(self) -> Orchestrator<G> {
        Orchestrator {
            generators: self.generators,
            step_timeout: self.step_timeout,
            progress: self.progress,
            cancel: self.cancel,
        }
    }
}
