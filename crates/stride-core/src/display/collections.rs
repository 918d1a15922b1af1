//! Collection wrapper types for displaying audit records.

use std::fmt;

use crate::models::{CoachingEvent, GenerationLogEntry};

/// Newtype wrapper for displaying a client's generation log.
///
/// Handles empty collections gracefully; each entry formats through its
/// own Display implementation.
pub struct GenerationLogEntries(pub Vec<GenerationLogEntry>);

impl GenerationLogEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, GenerationLogEntry> {
        self.0.iter()
    }
}

impl fmt::Display for GenerationLogEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No generation log entries found.")
        } else {
            for entry in &self.0 {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a client's coaching timeline.
pub struct CoachingEvents(pub Vec<CoachingEvent>);

impl CoachingEvents {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of events in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the events.
    pub fn iter(&self) -> std::slice::Iter<'_, CoachingEvent> {
        self.0.iter()
    }
}

impl fmt::Display for CoachingEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No coaching events found.")
        } else {
            for event in &self.0 {
                write!(f, "{event}")?;
            }
            Ok(())
        }
    }
}
