//! Session error types.

use kinetips_progress::ProgressError;

use crate::SessionPhase;

/// Errors from driving a workout session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Action not allowed in the current phase
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        /// Attempted action
        action: &'static str,
        /// Phase name at the time
        phase: &'static str,
    },

    /// Program has no exercises
    #[error("program {0} has no exercises")]
    EmptyProgram(String),

    /// Resume point past the last exercise
    #[error("start index {index} is outside a program of {total} exercises")]
    StartIndexOutOfRange {
        /// Requested start
        index: u32,
        /// Exercises in the program
        total: u32,
    },

    /// Progress write rejected
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

impl SessionError {
    pub(crate) fn invalid(action: &'static str, phase: SessionPhase) -> Self {
        Self::InvalidTransition {
            action,
            phase: phase.as_str(),
        }
    }
}
