//! Display formatting functions and result types.
//!
//! Presentation logic for the plan generation flow lives here, separated
//! from the domain models. Everything formats as markdown so the CLI's
//! terminal renderer (and any other consumer of the presentation boundary)
//! gets rich output from plain `Display` calls.
//!
//! - [`models`]: Display implementations for payloads and audit records
//! - [`review`]: the review-screen projection (`ReviewReport`)
//! - [`results`]: the apply report (`ApplyReport`)
//! - [`collections`]: wrappers for log/event listings
//! - [`status`]: operation status lines
//! - [`datetime`]: local timezone timestamp formatting

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod review;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{CoachingEvents, GenerationLogEntries};
pub use datetime::LocalDateTime;
pub use results::ApplyReport;
pub use review::ReviewReport;
pub use status::OperationStatus;
