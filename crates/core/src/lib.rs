//! KineTips core data models.
//!
//! This crate defines the records shared by the storage, progress,
//! content and session crates.

#![warn(missing_docs)]

// Identities
mod id;

// Progress tracking
mod progress;
mod event;

// Content
mod program;

pub mod time;

// Re-exports
pub use id::*;

pub use progress::{ProgramProgress, ProgramStatus, TodayStats};
pub use event::{ChangeKind, ProgressChanged};
pub use program::{
    program_id, split_program_id, BabyCategory, BabyExercise, BabyProgram, ThemeSummary,
    THEME_SEPARATOR,
};
pub use time::{Clock, DayCalendar};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
