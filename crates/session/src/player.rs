//! Workout session player.
//!
//! A session walks a program's exercises in order. Each exercise is
//! preceded by a countdown (a short prep before the first exercise of a
//! fresh run, a rest otherwise) and then waits for the parent to start it.
//! Timed exercises finish on their own; count-based ones finish when the
//! parent marks them done. Every finished exercise is saved through the
//! progress tracker.

use std::sync::Arc;

use kinetips_core::{BabyExercise, BabyProgram, SessionId};
use kinetips_progress::ProgressTracker;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{SessionConfig, SessionError};

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Countdown before the first exercise of a fresh run
    Prep {
        /// Seconds left
        remaining: u32,
    },
    /// Countdown between exercises
    Rest {
        /// Seconds left
        remaining: u32,
    },
    /// Countdown over; waiting for the parent to start the exercise
    AwaitingStart,
    /// Exercise running
    Exercise {
        /// Seconds left for timed exercises, `None` for count-based ones
        remaining: Option<u32>,
    },
    /// Every exercise done
    Finished,
    /// Parent left early
    Quit,
}

impl SessionPhase {
    /// Short name for logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Prep { .. } => "Prep",
            SessionPhase::Rest { .. } => "Rest",
            SessionPhase::AwaitingStart => "AwaitingStart",
            SessionPhase::Exercise { .. } => "Exercise",
            SessionPhase::Finished => "Finished",
            SessionPhase::Quit => "Quit",
        }
    }

    /// Whether the session has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Finished | SessionPhase::Quit)
    }
}

/// A running workout over one program.
pub struct WorkoutSession {
    id: SessionId,
    program: BabyProgram,
    tracker: Arc<dyn ProgressTracker>,
    config: SessionConfig,
    index: u32,
    phase: SessionPhase,
    paused: bool,
}

impl WorkoutSession {
    /// Start a session at `start_index`.
    ///
    /// A run from 0 opens with the prep countdown; a resumed run opens
    /// with a rest countdown.
    pub fn start(
        program: BabyProgram,
        start_index: u32,
        tracker: Arc<dyn ProgressTracker>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let total = program.total_exercises();
        if total == 0 {
            return Err(SessionError::EmptyProgram(program.program_id));
        }
        if start_index >= total {
            return Err(SessionError::StartIndexOutOfRange {
                index: start_index,
                total,
            });
        }

        let phase = if start_index == 0 {
            SessionPhase::Prep {
                remaining: config.prep_seconds,
            }
        } else {
            SessionPhase::Rest {
                remaining: config.rest_seconds,
            }
        };

        let session = Self {
            id: SessionId::new(),
            program,
            tracker,
            config,
            index: start_index,
            phase,
            paused: false,
        };
        info!(
            "Session {} started on {} at {}/{}",
            session.id, session.program.program_id, start_index, total
        );
        Ok(session)
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Program being played.
    pub fn program(&self) -> &BabyProgram {
        &self.program
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Exercises completed in this run.
    pub fn current_index(&self) -> u32 {
        self.index
    }

    /// Exercise up next or in progress.
    pub fn current_exercise(&self) -> Option<&BabyExercise> {
        self.program.exercises.get(self.index as usize)
    }

    /// Whether ticks are ignored.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fraction of exercises done.
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.index) / f64::from(self.program.total_exercises())
    }

    /// Pause or resume the countdowns.
    pub fn toggle_pause(&mut self) -> Result<bool, SessionError> {
        self.ensure_active("toggle_pause")?;
        self.paused = !self.paused;
        Ok(self.paused)
    }

    /// Advance one second.
    ///
    /// A countdown of N seconds hands over on its Nth tick, so the phase
    /// never shows a remaining time of 0. Pausing freezes every countdown,
    /// including a timed exercise started while paused.
    pub fn tick(&mut self) -> Result<SessionPhase, SessionError> {
        if self.paused || self.phase.is_terminal() {
            return Ok(self.phase);
        }

        match self.phase {
            SessionPhase::Prep { remaining } | SessionPhase::Rest { remaining } => {
                let remaining = remaining.saturating_sub(1);
                self.phase = if remaining == 0 {
                    SessionPhase::AwaitingStart
                } else if matches!(self.phase, SessionPhase::Prep { .. }) {
                    SessionPhase::Prep { remaining }
                } else {
                    SessionPhase::Rest { remaining }
                };
            }
            SessionPhase::Exercise {
                remaining: Some(remaining),
            } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.complete_current()?;
                } else {
                    self.phase = SessionPhase::Exercise {
                        remaining: Some(remaining),
                    };
                }
            }
            SessionPhase::Exercise { remaining: None }
            | SessionPhase::AwaitingStart
            | SessionPhase::Finished
            | SessionPhase::Quit => {}
        }
        Ok(self.phase)
    }

    /// End the prep/rest countdown early.
    pub fn skip_rest(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Prep { .. } | SessionPhase::Rest { .. } => {
                self.phase = SessionPhase::AwaitingStart;
                Ok(())
            }
            other => Err(SessionError::invalid("skip_rest", other)),
        }
    }

    /// Begin the exercise after the countdown.
    pub fn start_exercise(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::AwaitingStart {
            return Err(SessionError::invalid("start_exercise", self.phase));
        }
        let remaining = self
            .current_exercise()
            .filter(|e| e.is_timed())
            .map(|e| e.duration_seconds);
        self.phase = SessionPhase::Exercise { remaining };
        Ok(())
    }

    /// Mark the running exercise done.
    pub fn complete_exercise(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, SessionPhase::Exercise { .. }) {
            return Err(SessionError::invalid("complete_exercise", self.phase));
        }
        self.complete_current()
    }

    /// Leave early, saving the run as not completed.
    pub fn quit(&mut self) -> Result<(), SessionError> {
        self.ensure_active("quit")?;
        let total = self.program.total_exercises();
        self.tracker
            .save_progress(&self.program.program_id, self.index, total, false)?;
        self.phase = SessionPhase::Quit;
        info!("Session {} quit at {}/{}", self.id, self.index, total);
        Ok(())
    }

    fn complete_current(&mut self) -> Result<(), SessionError> {
        let total = self.program.total_exercises();
        let next = self.index + 1;
        let done = next >= total;

        self.tracker
            .save_progress(&self.program.program_id, next, total, done)?;
        self.index = next;

        if done {
            self.phase = SessionPhase::Finished;
            info!("Session {} finished {}", self.id, self.program.program_id);
        } else {
            self.phase = SessionPhase::Rest {
                remaining: self.config.rest_seconds,
            };
            debug!("Session {} at {}/{}", self.id, next, total);
        }
        Ok(())
    }

    fn ensure_active(&self, action: &'static str) -> Result<(), SessionError> {
        if self.phase.is_terminal() {
            Err(SessionError::invalid(action, self.phase))
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Debug for WorkoutSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkoutSession")
            .field("id", &self.id)
            .field("program_id", &self.program.program_id)
            .field("index", &self.index)
            .field("phase", &self.phase)
            .field("paused", &self.paused)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetips_core::{time::fixed_now, Clock, DayCalendar};
    use kinetips_content::generate_program;
    use kinetips_progress::{ProgressConfig, WorkoutProgressManager};
    use kinetips_storage::InMemoryStore;

    const TUMMY: &str = "p_4_6_th_tummy_reach";

    fn tracker() -> Arc<WorkoutProgressManager> {
        let config = ProgressConfig::default().with_calendar(DayCalendar::utc());
        Arc::new(
            WorkoutProgressManager::with_config(Arc::new(InMemoryStore::new()), config)
                .with_clock(Clock::fixed(fixed_now())),
        )
    }

    fn session(tracker: &Arc<WorkoutProgressManager>, start: u32) -> WorkoutSession {
        let tracker: Arc<dyn ProgressTracker> = tracker.clone();
        let config = SessionConfig::default();
        WorkoutSession::start(generate_program(TUMMY), start, tracker, config).unwrap()
    }

    fn tick_n(s: &mut WorkoutSession, n: u32) {
        for _ in 0..n {
            s.tick().unwrap();
        }
    }

    #[test]
    fn test_fresh_run_opens_with_prep() {
        let t = tracker();
        let s = session(&t, 0);
        assert_eq!(s.phase(), SessionPhase::Prep { remaining: 5 });
        assert_eq!(s.current_exercise().unwrap().name, "Tummy Setup");
    }

    #[test]
    fn test_resumed_run_opens_with_rest() {
        let t = tracker();
        let s = session(&t, 4);
        assert_eq!(s.phase(), SessionPhase::Rest { remaining: 10 });
        assert_eq!(s.progress_fraction(), 0.4);
    }

    #[test]
    fn test_prep_counts_down_to_awaiting_start() {
        let t = tracker();
        let mut s = session(&t, 0);
        tick_n(&mut s, 4);
        assert_eq!(s.phase(), SessionPhase::Prep { remaining: 1 });
        s.tick().unwrap();
        assert_eq!(s.phase(), SessionPhase::AwaitingStart);
    }

    #[test]
    fn test_timed_exercise_completes_itself_and_saves() {
        let t = tracker();
        let mut s = session(&t, 0);
        s.skip_rest().unwrap();
        s.start_exercise().unwrap();
        assert_eq!(
            s.phase(),
            SessionPhase::Exercise {
                remaining: Some(60)
            }
        );

        tick_n(&mut s, 59);
        assert_eq!(
            s.phase(),
            SessionPhase::Exercise {
                remaining: Some(1)
            }
        );
        s.tick().unwrap();
        assert_eq!(s.phase(), SessionPhase::Rest { remaining: 10 });
        assert_eq!(s.current_index(), 1);

        let saved = t.get_progress(TUMMY).unwrap();
        assert_eq!(saved.current_exercise_index, 1);
        assert!(!saved.is_completed);
    }

    #[test]
    fn test_count_exercise_waits_for_parent() {
        let t = tracker();
        let mut s = session(&t, 1);
        s.skip_rest().unwrap();
        s.start_exercise().unwrap();
        assert_eq!(s.phase(), SessionPhase::Exercise { remaining: None });

        tick_n(&mut s, 120);
        assert_eq!(s.current_index(), 1);

        s.complete_exercise().unwrap();
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn test_pause_freezes_countdown() {
        let t = tracker();
        let mut s = session(&t, 0);
        assert!(s.toggle_pause().unwrap());
        tick_n(&mut s, 10);
        assert_eq!(s.phase(), SessionPhase::Prep { remaining: 5 });

        assert!(!s.toggle_pause().unwrap());
        s.tick().unwrap();
        assert_eq!(s.phase(), SessionPhase::Prep { remaining: 4 });
    }

    #[test]
    fn test_pause_carries_into_exercise() {
        let t = tracker();
        let mut s = session(&t, 0);
        s.skip_rest().unwrap();
        assert!(s.toggle_pause().unwrap());
        s.start_exercise().unwrap();

        assert!(s.is_paused());
        tick_n(&mut s, 90);
        assert_eq!(
            s.phase(),
            SessionPhase::Exercise {
                remaining: Some(60)
            }
        );
        assert_eq!(s.current_index(), 0);

        s.toggle_pause().unwrap();
        s.tick().unwrap();
        assert_eq!(
            s.phase(),
            SessionPhase::Exercise {
                remaining: Some(59)
            }
        );
    }

    #[test]
    fn test_quit_saves_partial_progress() {
        let t = tracker();
        let mut s = session(&t, 3);
        s.quit().unwrap();

        assert_eq!(s.phase(), SessionPhase::Quit);
        let saved = t.get_progress(TUMMY).unwrap();
        assert_eq!(saved.current_exercise_index, 3);
        assert!(!saved.is_completed);
        assert!(matches!(s.quit(), Err(SessionError::InvalidTransition { .. })));
    }

    #[test]
    fn test_finishing_last_exercise_marks_completed() {
        let t = tracker();
        let mut s = session(&t, 9);
        s.skip_rest().unwrap();
        s.start_exercise().unwrap();
        s.complete_exercise().unwrap();

        assert_eq!(s.phase(), SessionPhase::Finished);
        assert_eq!(t.get_progress_percentage(TUMMY), 1.0);
        assert_eq!(t.get_completed_today(TUMMY), 1);
        assert_eq!(s.tick().unwrap(), SessionPhase::Finished);
    }

    #[test]
    fn test_rejects_out_of_order_actions() {
        let t = tracker();
        let mut s = session(&t, 0);
        assert!(matches!(
            s.start_exercise(),
            Err(SessionError::InvalidTransition {
                action: "start_exercise",
                ..
            })
        ));
        assert!(s.complete_exercise().is_err());

        s.skip_rest().unwrap();
        assert!(s.skip_rest().is_err());
    }

    #[test]
    fn test_start_index_must_be_inside_program() {
        let t = tracker();
        let tracker: Arc<dyn ProgressTracker> = t;
        let config = SessionConfig::default();
        let err = WorkoutSession::start(generate_program(TUMMY), 10, tracker, config).unwrap_err();
        assert!(matches!(
            err,
            SessionError::StartIndexOutOfRange {
                index: 10,
                total: 10
            }
        ));
    }
}
