//! Progress tracking service.

use kinetips_core::{ProgramProgress, TodayStats};

use crate::ProgressError;

/// Progress tracking service.
///
/// Implemented by [`crate::WorkoutProgressManager`]; session players and
/// screens depend on this trait so they can be driven by a test double.
pub trait ProgressTracker: Send + Sync {
    /// Record the state of a run and notify observers.
    fn save_progress(
        &self,
        program_id: &str,
        current_index: u32,
        total_exercises: u32,
        is_completed: bool,
    ) -> Result<ProgramProgress, ProgressError>;

    /// Saved record for a program.
    fn get_progress(&self, program_id: &str) -> Option<ProgramProgress>;

    /// Forget a program's record and notify observers.
    fn clear_progress(&self, program_id: &str) -> bool;

    /// Fraction complete in `[0, 1]`.
    fn get_progress_percentage(&self, program_id: &str) -> f64;

    /// Completions attributed to today.
    fn get_completed_today(&self, program_id: &str) -> u32;

    /// Counters across every program for today.
    fn get_today_stats(&self) -> TodayStats;
}
