//! Progress model - per-program completion state and daily aggregates.

use serde::{Deserialize, Serialize};
use crate::Time;

/// Saved progress for one program.
///
/// Field names serialize in camelCase so the persisted blob keeps the
/// layout existing installs already have on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramProgress {
    /// Program identifier, e.g. `p_4_6_th_tummy_reach`
    pub program_id: String,

    /// Exercises completed so far in the current run
    pub current_exercise_index: u32,

    /// Number of exercises in the program
    pub total_exercises: u32,

    /// Whether the current run reached the end
    pub is_completed: bool,

    /// Set on every save
    pub last_updated: Time,

    /// Completions attributed to the day of `last_completion_date`
    pub completed_today: u32,

    /// Most recent completion event
    #[serde(default)]
    pub last_completion_date: Option<Time>,
}

impl ProgramProgress {
    /// Exercises this record counts as done, clamped to `0..=total`.
    pub fn exercises_done(&self) -> u32 {
        let done = if self.is_completed {
            self.total_exercises
        } else {
            self.current_exercise_index
        };
        done.min(self.total_exercises)
    }

    /// Fraction complete in `[0, 1]`.
    pub fn percentage(&self) -> f64 {
        if self.is_completed {
            return 1.0;
        }
        if self.total_exercises == 0 {
            return 0.0;
        }
        f64::from(self.current_exercise_index) / f64::from(self.total_exercises)
    }
}

/// Coarse status of a program for list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramStatus {
    /// No saved progress, or saved at index 0
    NotStarted,
    /// Partway through a run
    InProgress {
        /// Exercises done
        index: u32,
        /// Exercises in the program
        total: u32,
    },
    /// Run finished
    Completed,
}

impl ProgramStatus {
    /// Status for an optional saved record.
    pub fn of(progress: Option<&ProgramProgress>) -> Self {
        match progress {
            None => ProgramStatus::NotStarted,
            Some(p) if p.is_completed => ProgramStatus::Completed,
            Some(p) if p.current_exercise_index == 0 => ProgramStatus::NotStarted,
            Some(p) => ProgramStatus::InProgress {
                index: p.current_exercise_index,
                total: p.total_exercises,
            },
        }
    }
}

/// Aggregate counters for the current calendar day.
///
/// Computed on each query by scanning every stored record; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    /// Exercises done in programs touched today
    pub exercises_completed: u32,

    /// Estimated minutes (one per exercise)
    pub total_minutes: u32,

    /// Programs whose completion event happened today
    pub themes_completed: u32,
}
