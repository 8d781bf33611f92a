//! Clock and calendar-day helpers.
//!
//! Timestamps are stored in UTC. "Today" is a calendar question and is
//! answered in the device's local zone unless a fixed offset is configured.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Offset, Utc};

/// Source of "now" for services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Wall-clock time.
    #[default]
    System,
    /// Frozen at a given instant.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Clock frozen at `at`.
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Current instant according to this clock.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Move a fixed clock forward. No effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// How instants are mapped onto calendar days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayCalendar {
    /// Device time zone, read at comparison time.
    #[default]
    Local,
    /// A fixed UTC offset.
    Fixed(FixedOffset),
}

impl DayCalendar {
    /// Calendar anchored at UTC.
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Calendar date of `at`.
    pub fn date_of(&self, at: DateTime<Utc>) -> NaiveDate {
        match self {
            DayCalendar::Local => at.with_timezone(&Local).date_naive(),
            DayCalendar::Fixed(offset) => at.with_timezone(offset).date_naive(),
        }
    }

    /// Whether two instants fall on the same calendar day.
    pub fn is_same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.date_of(a) == self.date_of(b)
    }
}

/// Deterministic timestamp for tests (2026-03-14T10:00:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_773_482_400;

/// Deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let mut clock = Clock::fixed(fixed_now());
        clock.advance(Duration::hours(3));
        assert_eq!(clock.now(), fixed_now() + Duration::hours(3));
    }

    #[test]
    fn test_system_clock_ignores_advance() {
        let mut clock = Clock::System;
        clock.advance(Duration::days(1));
        assert_eq!(clock, Clock::System);
    }

    #[test]
    fn test_same_day_in_utc() {
        let cal = DayCalendar::utc();
        let morning = fixed_now();
        assert!(cal.is_same_day(morning, morning + Duration::hours(13)));
        assert!(!cal.is_same_day(morning, morning + Duration::hours(14)));
    }

    #[test]
    fn test_offset_changes_day_boundary() {
        // 10:00Z is 23:00 at +13:00, so two hours later is tomorrow there.
        let tonga = DayCalendar::Fixed(FixedOffset::east_opt(13 * 3600).unwrap());
        let at = fixed_now();
        assert!(!tonga.is_same_day(at, at + Duration::hours(2)));
        assert!(DayCalendar::utc().is_same_day(at, at + Duration::hours(2)));
    }
}
