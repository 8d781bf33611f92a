//! Change notifications published after progress writes.

use serde::{Deserialize, Serialize};
use crate::Time;

/// What kind of write produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// A record was created or overwritten
    Saved,
    /// A record was removed (or the removal was a no-op)
    Cleared,
}

/// Emitted once per `save_progress` / `clear_progress` call.
///
/// Carries only the program id; observers re-query for current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressChanged {
    /// Program that was written
    pub program_id: String,

    /// Write kind
    pub kind: ChangeKind,

    /// When the write happened
    pub timestamp: Time,
}

impl ProgressChanged {
    /// Create a new event.
    pub fn new(program_id: impl Into<String>, kind: ChangeKind, timestamp: Time) -> Self {
        Self {
            program_id: program_id.into(),
            kind,
            timestamp,
        }
    }
}
