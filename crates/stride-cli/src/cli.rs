//! Command handlers bridging parsed arguments to core operations.

use anyhow::{Context, Result};
use log::info;
use stride_core::params::{ClientId, GeneratePlan};
use stride_core::{
    Applier, ApplyReport, CoachingEvents, GenerationLogEntries, OperationStatus, Orchestrator,
    Phase, ReviewReport, ReviewView, SqliteStore,
};
use tokio::sync::mpsc;

use crate::args::GenerateArgs;
use crate::fixtures::FixtureGenerators;
use crate::renderer::TerminalRenderer;

/// CLI command handler holding the store and output renderer.
pub struct Cli {
    store: SqliteStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: SqliteStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Runs the generation steps, renders the review, and optionally applies
    /// the generated artifacts.
    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let generators = FixtureGenerators::from_file(&args.fixtures)?;
        let params = GeneratePlan::from(&args);

        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel::<stride_core::Progress>();
        let printer = tokio::spawn(async move {
            while let Some(progress) = progress_rx.recv().await {
                let marker = if progress.succeeded { "✓" } else { "✗" };
                println!(
                    "[{}/{}] {} {marker}",
                    progress.completed,
                    progress.total,
                    progress.kind.label()
                );
            }
        });

        let orchestrator = Orchestrator::builder(generators)
            .with_progress(progress_tx)
            .build();
        info!(
            "Generating plan for client {} with options {:?}",
            params.client_id, params.options
        );
        let run = orchestrator.run(params.client_id, params.options).await;

        // Orchestrator owns the sender; dropping it closes the channel
        drop(orchestrator);
        printer.await.context("Progress printer task failed")?;

        println!();
        let view = ReviewView::new(&run);
        self.renderer.render(&ReviewReport(&view).to_string())?;

        if !args.apply {
            return Ok(());
        }

        let applier = Applier::new(self.store.clone());
        let (run, outcome) = applier
            .apply(run)
            .await
            .context("Failed to apply generated artifacts")?;

        println!();
        self.renderer.render(&ApplyReport(&outcome).to_string())?;

        let status = if run.phase == Phase::Done {
            OperationStatus::success(format!(
                "Plan for client {} applied in full",
                params.client_id
            ))
        } else {
            OperationStatus::failure(format!(
                "Plan for client {} applied partially; re-run apply to retry",
                params.client_id
            ))
        };
        self.renderer.render(&status.to_string())
    }

    /// Renders the generation log for a client, oldest first.
    pub async fn show_log(&self, params: &ClientId) -> Result<()> {
        let entries = self
            .store
            .list_generation_log(params.client_id)
            .await
            .context("Failed to read generation log")?;
        self.renderer
            .render(&GenerationLogEntries(entries).to_string())
    }

    /// Renders the coaching event timeline for a client, oldest first.
    pub async fn show_events(&self, params: &ClientId) -> Result<()> {
        let events = self
            .store
            .list_coaching_events(params.client_id)
            .await
            .context("Failed to read coaching events")?;
        self.renderer.render(&CoachingEvents(events).to_string())
    }
}
