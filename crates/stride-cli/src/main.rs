//! Stride CLI Application
//!
//! Command-line interface for the coaching plan generation orchestrator.

mod args;
mod cli;
mod fixtures;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use stride_core::SqliteStore;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let store = SqliteStore::builder()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize artifact store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stride started");

    let cli = Cli::new(store, renderer);
    match command {
        Commands::Generate(args) => cli.generate(args).await,
        Commands::Log(args) => cli.show_log(&args.into()).await,
        Commands::Events(args) => cli.show_events(&args.into()).await,
    }
}
