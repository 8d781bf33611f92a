//! A full workout from the program list through today's stats.

use std::sync::{Arc, Mutex};

use kinetips_content::{generate_program, themes_for_category};
use kinetips_core::{time::fixed_now, Clock, DayCalendar, ProgramStatus};
use kinetips_progress::{ProgressConfig, ProgressTracker, WorkoutProgressManager};
use kinetips_session::{SessionConfig, SessionPhase, WorkoutSession};
use kinetips_storage::InMemoryStore;

fn manager(backend: &InMemoryStore) -> Arc<WorkoutProgressManager> {
    let config = ProgressConfig::default().with_calendar(DayCalendar::utc());
    Arc::new(
        WorkoutProgressManager::with_config(Arc::new(backend.clone()), config)
            .with_clock(Clock::fixed(fixed_now())),
    )
}

fn play_to_end(session: &mut WorkoutSession) {
    while !session.phase().is_terminal() {
        match session.phase() {
            SessionPhase::Prep { .. } | SessionPhase::Rest { .. } => session.skip_rest().unwrap(),
            SessionPhase::AwaitingStart => session.start_exercise().unwrap(),
            SessionPhase::Exercise { remaining: Some(_) } => {
                session.tick().unwrap();
            }
            SessionPhase::Exercise { remaining: None } => session.complete_exercise().unwrap(),
            SessionPhase::Finished | SessionPhase::Quit => {}
        }
    }
}

#[test]
fn test_full_workout_updates_stats_and_observers() {
    let backend = InMemoryStore::new();
    let m = manager(&backend);

    let notified = Arc::new(Mutex::new(0u32));
    let counter = Arc::clone(&notified);
    m.subscribe(move |_| *counter.lock().unwrap() += 1);

    let theme = &themes_for_category("p_4_6")[0];
    let tracker: Arc<dyn ProgressTracker> = m.clone();
    let program = generate_program(&theme.program_id);
    let config = SessionConfig::default();
    let mut session = WorkoutSession::start(program, 0, tracker, config).unwrap();

    play_to_end(&mut session);

    assert_eq!(session.phase(), SessionPhase::Finished);
    assert_eq!(*notified.lock().unwrap(), 10);
    assert_eq!(
        ProgramStatus::of(m.get_progress(&theme.program_id).as_ref()),
        ProgramStatus::Completed
    );

    let stats = m.get_today_stats();
    assert_eq!(stats.exercises_completed, 10);
    assert_eq!(stats.total_minutes, 10);
    assert_eq!(stats.themes_completed, 1);
}

#[test]
fn test_quit_then_resume_finishes_once() {
    let backend = InMemoryStore::new();
    let m = manager(&backend);
    let program_id = "p_8_10_th_pull_to_stand";

    let tracker: Arc<dyn ProgressTracker> = m.clone();
    let config = SessionConfig::default();
    let mut first =
        WorkoutSession::start(generate_program(program_id), 0, tracker.clone(), config).unwrap();
    for _ in 0..4 {
        first.skip_rest().unwrap();
        first.start_exercise().unwrap();
        first.complete_exercise().unwrap();
    }
    first.quit().unwrap();
    assert_eq!(m.get_progress_percentage(program_id), 0.4);

    let resume_at = m.resume_index(program_id);
    assert_eq!(resume_at, 4);

    let mut second =
        WorkoutSession::start(generate_program(program_id), resume_at, tracker, config).unwrap();
    assert_eq!(second.phase(), SessionPhase::Rest { remaining: 10 });
    play_to_end(&mut second);

    assert_eq!(m.get_completed_today(program_id), 1);
    assert_eq!(m.get_today_stats().themes_completed, 1);
}
