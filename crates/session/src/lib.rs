//! Workout Sessions
//!
//! Plays a program exercise by exercise with prep, rest and exercise
//! countdowns, saving progress as it goes.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod player;

pub use config::SessionConfig;
pub use error::SessionError;
pub use player::{SessionPhase, WorkoutSession};
