//! Progress manager over the file backend.

use std::sync::Arc;

use chrono::Duration;
use kinetips_core::{time::fixed_now, Clock, DayCalendar, TodayStats};
use kinetips_progress::{ProgressConfig, ProgressTracker, WorkoutProgressManager};
use kinetips_storage::{FileStore, KeyValueStore};

const TUMMY: &str = "p_4_6_th_tummy_reach";

fn open(dir: &std::path::Path, clock: Clock) -> WorkoutProgressManager {
    let backend = FileStore::new(dir).unwrap();
    let config = ProgressConfig::default().with_calendar(DayCalendar::utc());
    WorkoutProgressManager::with_config(Arc::new(backend), config).with_clock(clock)
}

#[test]
fn test_progress_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    let first = open(dir.path(), Clock::fixed(fixed_now()));
    first.save_progress(TUMMY, 3, 10, false).unwrap();
    drop(first);

    let second = open(dir.path(), Clock::fixed(fixed_now() + Duration::minutes(5)));
    assert_eq!(second.get_progress_percentage(TUMMY), 0.3);
    assert_eq!(second.resume_index(TUMMY), 3);

    second.save_progress(TUMMY, 10, 10, true).unwrap();
    assert_eq!(second.get_completed_today(TUMMY), 1);
    assert_eq!(second.get_today_stats().themes_completed, 1);
}

#[test]
fn test_next_day_reads_fresh_counters() {
    let dir = tempfile::tempdir().unwrap();

    let monday = open(dir.path(), Clock::fixed(fixed_now()));
    monday.save_progress(TUMMY, 10, 10, true).unwrap();
    assert_eq!(monday.get_today_stats().exercises_completed, 10);

    let tuesday = open(dir.path(), Clock::fixed(fixed_now() + Duration::days(1)));
    assert_eq!(tuesday.get_completed_today(TUMMY), 0);
    assert_eq!(tuesday.get_today_stats(), TodayStats::default());
    // The record itself is untouched until the next write.
    assert_eq!(tuesday.get_progress_percentage(TUMMY), 1.0);
}

#[test]
fn test_custom_storage_key() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileStore::new(dir.path()).unwrap();
    let config = ProgressConfig::default()
        .with_storage_key("baby_two_progress")
        .with_calendar(DayCalendar::utc());
    let m = WorkoutProgressManager::with_config(Arc::new(backend.clone()), config)
        .with_clock(Clock::fixed(fixed_now()));

    m.save_progress(TUMMY, 1, 10, false).unwrap();

    assert!(backend.get("workout_progress").unwrap().is_none());
    let raw = backend.get("baby_two_progress").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(json[TUMMY]["currentExerciseIndex"], 1);
}
