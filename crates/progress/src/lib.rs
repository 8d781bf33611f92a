//! Progress Tracking
//!
//! Per-program completion state, daily completion counters and today's
//! aggregate statistics.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod manager;
pub mod observer;
pub mod stats;
pub mod tracker;

pub use config::ProgressConfig;
pub use error::ProgressError;
pub use manager::WorkoutProgressManager;
pub use observer::{ObserverRegistry, ProgressObserver};
pub use stats::today_stats;
pub use tracker::ProgressTracker;
