//! Exercise content for KineTips.
//!
//! Age categories, their themes, and the deterministic generator that turns
//! a program id into a ten-exercise program with per-exercise instructions
//! and setup checklists.

#![warn(missing_docs)]

pub mod catalog;
pub mod details;
pub mod generator;

pub use details::{detailed_instructions_for, environment_setup_for, AgeTier};
pub use generator::{
    age_range_for_category, all_categories, category, generate_program, themes_for_category,
    COUNT_EXERCISE_REPS, TIMED_EXERCISE_SECONDS,
};

/// Content lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// No category with this id
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
