//! Workout progress manager.
//!
//! Sole mutator of the progress store. Every write loads the whole map,
//! updates one record, writes the whole map back and then notifies
//! observers. Reads load the map fresh, so an observer re-querying from
//! inside its callback sees the write that triggered it.

use std::sync::Arc;

use kinetips_core::{
    ChangeKind, Clock, DayCalendar, ProgramProgress, ProgressChanged, SubscriptionId, Time,
    TodayStats,
};
use kinetips_storage::{KeyValueStore, ProgressStore};
use tracing::{debug, info};

use crate::observer::ObserverRegistry;
use crate::stats::today_stats;
use crate::{ProgressConfig, ProgressError, ProgressTracker};

/// Progress manager over a key-value backend.
#[derive(Debug)]
pub struct WorkoutProgressManager {
    store: ProgressStore,
    calendar: DayCalendar,
    clock: Clock,
    observers: ObserverRegistry,
}

impl WorkoutProgressManager {
    /// Create a manager with the default configuration.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_config(backend, ProgressConfig::default())
    }

    /// Create a manager with an explicit configuration.
    pub fn with_config(backend: Arc<dyn KeyValueStore>, config: ProgressConfig) -> Self {
        Self {
            store: ProgressStore::with_key(backend, config.storage_key),
            calendar: config.calendar,
            clock: Clock::System,
            observers: ObserverRegistry::new(),
        }
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Calendar used for "today" decisions.
    pub fn calendar(&self) -> DayCalendar {
        self.calendar
    }

    /// Register a change observer.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ProgressChanged) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Remove a change observer.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Every saved record, ordered by program id.
    pub fn get_all_progress(&self) -> Vec<ProgramProgress> {
        let mut all: Vec<_> = self.store.load().into_values().collect();
        all.sort_by(|a, b| a.program_id.cmp(&b.program_id));
        all
    }

    /// Index a new session should start from.
    ///
    /// Finished or unknown programs start over at 0.
    pub fn resume_index(&self, program_id: &str) -> u32 {
        match self.get_progress(program_id) {
            Some(p) if !p.is_completed => p.current_exercise_index.min(p.total_exercises),
            _ => 0,
        }
    }

    fn is_today(&self, at: Time, now: Time) -> bool {
        self.calendar.is_same_day(at, now)
    }

    fn publish(&self, program_id: &str, kind: ChangeKind, now: Time) {
        self.observers.notify(&ProgressChanged::new(program_id, kind, now));
    }
}

impl ProgressTracker for WorkoutProgressManager {
    /// `current_index` is clamped to `total_exercises`; a completed save
    /// always stores `total_exercises` as the index.
    fn save_progress(
        &self,
        program_id: &str,
        current_index: u32,
        total_exercises: u32,
        is_completed: bool,
    ) -> Result<ProgramProgress, ProgressError> {
        if program_id.is_empty() {
            return Err(ProgressError::EmptyProgramId);
        }
        if total_exercises == 0 {
            return Err(ProgressError::ZeroTotalExercises(program_id.to_string()));
        }

        let now = self.clock.now();
        let mut all = self.store.load();
        let existing = all.get(program_id);

        let mut completed_today = existing.map_or(0, |p| p.completed_today);
        let mut last_completion_date = existing.and_then(|p| p.last_completion_date);

        // Lazy rollover: the counter belongs to the day of the last completion.
        if let Some(last) = last_completion_date {
            if !self.is_today(last, now) {
                completed_today = 0;
            }
        }

        let was_completed = existing.is_some_and(|p| p.is_completed);
        if is_completed && !was_completed {
            completed_today += 1;
            last_completion_date = Some(now);
            info!("Program {} completed ({} today)", program_id, completed_today);
        }

        let current_exercise_index = if is_completed {
            total_exercises
        } else {
            current_index.min(total_exercises)
        };

        let progress = ProgramProgress {
            program_id: program_id.to_string(),
            current_exercise_index,
            total_exercises,
            is_completed,
            last_updated: now,
            completed_today,
            last_completion_date,
        };

        all.insert(program_id.to_string(), progress.clone());
        self.store.save(&all);
        debug!(
            "Saved progress for {}: {}/{}",
            program_id, current_exercise_index, total_exercises
        );

        self.publish(program_id, ChangeKind::Saved, now);
        Ok(progress)
    }

    fn get_progress(&self, program_id: &str) -> Option<ProgramProgress> {
        self.store.load().remove(program_id)
    }

    /// Persists and notifies even when nothing was stored for `program_id`.
    fn clear_progress(&self, program_id: &str) -> bool {
        let now = self.clock.now();
        let mut all = self.store.load();
        let removed = all.remove(program_id).is_some();
        self.store.save(&all);
        debug!("Cleared progress for {} (existed: {})", program_id, removed);

        self.publish(program_id, ChangeKind::Cleared, now);
        removed
    }

    fn get_progress_percentage(&self, program_id: &str) -> f64 {
        self.get_progress(program_id).map_or(0.0, |p| p.percentage())
    }

    /// Read-only: a stale counter from an earlier day reads as 0 but is
    /// only reset in storage by the next save.
    fn get_completed_today(&self, program_id: &str) -> u32 {
        let Some(progress) = self.get_progress(program_id) else {
            return 0;
        };
        match progress.last_completion_date {
            Some(last) if self.is_today(last, self.clock.now()) => progress.completed_today,
            _ => 0,
        }
    }

    fn get_today_stats(&self) -> TodayStats {
        let all = self.store.load();
        today_stats(all.values(), self.clock.now(), self.calendar)
    }
}
