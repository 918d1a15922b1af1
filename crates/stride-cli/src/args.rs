use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use stride_core::params::{ClientId, GeneratePlan};
use stride_core::PlanOptions;

/// Main command-line interface for the Stride coaching plan generator
///
/// Stride generates coaching plan artifacts for a client through a sequence
/// of scripted generation steps, presents the generated payloads for review,
/// and applies them to the coaching database together with a full audit
/// trail.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stride/stride.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Stride CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a coaching plan for a client
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show the generation log for a client
    #[command(alias = "l")]
    Log(LogArgs),
    /// Show the coaching event timeline for a client
    #[command(alias = "e")]
    Events(EventsArgs),
}

/// Generate a coaching plan
///
/// Runs the selected generation steps in order and prints a review of every
/// generated payload. Intake analysis always runs; the other steps can be
/// skipped individually. With `--apply` the generated artifacts are written
/// to the database immediately after review.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// ID of the client to generate a plan for
    #[arg(help = "Unique identifier of the client to generate a plan for")]
    pub client_id: u64,
    /// JSON file scripting the outcome of each generation step
    #[arg(long, help = "JSON file scripting the outcome of each generation step")]
    pub fixtures: PathBuf,
    /// Skip the training program step
    #[arg(long, help = "Skip the training program step")]
    pub skip_training: bool,
    /// Skip the nutrition targets step
    #[arg(long, help = "Skip the nutrition targets step")]
    pub skip_nutrition: bool,
    /// Skip the supplement recommendations step
    #[arg(long, help = "Skip the supplement recommendations step")]
    pub skip_supplements: bool,
    /// Apply the generated artifacts after review
    #[arg(long, help = "Apply the generated artifacts to the database after review")]
    pub apply: bool,
}

impl From<&GenerateArgs> for GeneratePlan {
    fn from(val: &GenerateArgs) -> Self {
        GeneratePlan {
            client_id: val.client_id,
            options: PlanOptions {
                training: !val.skip_training,
                nutrition: !val.skip_nutrition,
                supplements: !val.skip_supplements,
            },
        }
    }
}

/// Show the generation log
///
/// Displays every generation-log entry recorded for a client during apply,
/// oldest first, including the raw payload, model, and token usage.
#[derive(ClapArgs)]
pub struct LogArgs {
    /// ID of the client whose generation log to show
    #[arg(help = "Unique identifier of the client whose generation log to show")]
    pub client_id: u64,
}

impl From<LogArgs> for ClientId {
    fn from(val: LogArgs) -> Self {
        ClientId {
            client_id: val.client_id,
        }
    }
}

/// Show the coaching event timeline
#[derive(ClapArgs)]
pub struct EventsArgs {
    /// ID of the client whose events to show
    #[arg(help = "Unique identifier of the client whose coaching events to show")]
    pub client_id: u64,
}

impl From<EventsArgs> for ClientId {
    fn from(val: EventsArgs) -> Self {
        ClientId {
            client_id: val.client_id,
        }
    }
}
