//! Today statistics over the full progress map.

use kinetips_core::{DayCalendar, ProgramProgress, Time, TodayStats};

/// Aggregate today's counters from every stored record.
///
/// Exercises count for any record touched today, completed or not. Themes
/// count only when the completion event itself happened today. Minutes are
/// approximated as one per exercise.
pub fn today_stats<'a, I>(records: I, now: Time, calendar: DayCalendar) -> TodayStats
where
    I: IntoIterator<Item = &'a ProgramProgress>,
{
    let mut exercises_completed: u32 = 0;
    let mut themes_completed: u32 = 0;

    for progress in records {
        if calendar.is_same_day(progress.last_updated, now) {
            exercises_completed = exercises_completed.saturating_add(progress.exercises_done());
        }

        let completed_today = progress
            .last_completion_date
            .is_some_and(|at| calendar.is_same_day(at, now));
        if progress.is_completed && completed_today {
            themes_completed += 1;
        }
    }

    TodayStats {
        exercises_completed,
        total_minutes: exercises_completed,
        themes_completed,
    }
}
