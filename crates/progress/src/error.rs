//! Progress error types.

/// Rejected progress writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Program id was empty
    #[error("program id must not be empty")]
    EmptyProgramId,

    /// A program needs at least one exercise
    #[error("total exercises must be positive for {0}")]
    ZeroTotalExercises(String),
}
