//! Progress manager configuration.

use kinetips_core::DayCalendar;
use kinetips_storage::DEFAULT_PROGRESS_KEY;
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::WorkoutProgressManager`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Key the progress map is persisted under
    pub storage_key: String,

    /// How "today" is decided
    #[serde(skip)]
    pub calendar: DayCalendar,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_PROGRESS_KEY.to_string(),
            calendar: DayCalendar::Local,
        }
    }
}

impl ProgressConfig {
    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the day calendar.
    pub fn with_calendar(mut self, calendar: DayCalendar) -> Self {
        self.calendar = calendar;
        self
    }
}
