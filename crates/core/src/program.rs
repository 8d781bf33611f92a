//! Program model - categories, themes and their exercises.

use serde::{Deserialize, Serialize};

/// Separator between category id and theme slug in a program id.
pub const THEME_SEPARATOR: &str = "_th_";

/// A single exercise inside a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabyExercise {
    /// Display name
    pub name: String,

    /// Short description (step cue)
    pub description: String,

    /// Parent tip shown alongside the exercise
    pub parent_tips: String,

    /// Numbered step-by-step instructions
    #[serde(default)]
    pub detailed_instructions: String,

    /// Environment setup checklist, markdown
    #[serde(default)]
    pub environment_setup: String,

    /// Timed length in seconds, 0 for count-based exercises
    pub duration_seconds: u32,

    /// Repetitions, 0 for timed exercises
    pub repetitions: u32,

    /// Youngest age in months
    pub age_range_min: u32,

    /// Oldest age in months
    pub age_range_max: u32,
}

impl BabyExercise {
    /// Whether the exercise runs on a countdown.
    pub fn is_timed(&self) -> bool {
        self.duration_seconds > 0
    }

    /// Whether the exercise is a number of repetitions.
    pub fn is_count_based(&self) -> bool {
        self.repetitions > 0
    }

    /// e.g. `4-6 months`
    pub fn age_range_text(&self) -> String {
        age_range_text(self.age_range_min, self.age_range_max)
    }

    /// e.g. `60s` or `10 reps`
    pub fn duration_text(&self) -> String {
        if self.is_timed() {
            format!("{}s", self.duration_seconds)
        } else if self.is_count_based() {
            format!("{} reps", self.repetitions)
        } else {
            String::new()
        }
    }
}

/// One category + theme pairing with its exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabyProgram {
    /// Program identifier
    pub program_id: String,

    /// Age bucket, e.g. `p_4_6`
    pub category_id: String,

    /// Theme slug, e.g. `tummy_reach`
    pub theme_slug: String,

    /// Theme display title
    pub theme_title: String,

    /// Parent hint for the theme
    pub theme_hint: String,

    /// Exercises in session order
    pub exercises: Vec<BabyExercise>,

    /// Youngest age in months
    pub age_range_min: u32,

    /// Oldest age in months
    pub age_range_max: u32,
}

impl BabyProgram {
    /// Number of exercises, as stored in progress records.
    pub fn total_exercises(&self) -> u32 {
        u32::try_from(self.exercises.len()).unwrap_or(u32::MAX)
    }

    /// e.g. `4-6 months`
    pub fn age_range_text(&self) -> String {
        age_range_text(self.age_range_min, self.age_range_max)
    }
}

/// An age bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabyCategory {
    /// Category id, e.g. `p_0_2`
    pub category_id: String,

    /// Display title
    pub title: String,

    /// Youngest age in months
    pub age_range_min: u32,

    /// Oldest age in months
    pub age_range_max: u32,

    /// Emoji icon
    pub icon: String,

    /// Theme color name
    pub color: String,
}

impl BabyCategory {
    /// e.g. `0-2 months`
    pub fn age_range_text(&self) -> String {
        age_range_text(self.age_range_min, self.age_range_max)
    }
}

/// Theme listing entry for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSummary {
    /// Theme slug
    pub slug: String,

    /// Display title
    pub title: String,

    /// Program identifier for this category + theme
    pub program_id: String,
}

/// Build a program id from its parts.
pub fn program_id(category_id: &str, theme_slug: &str) -> String {
    format!("{category_id}{THEME_SEPARATOR}{theme_slug}")
}

/// Split a program id into `(category_id, theme_slug)`.
///
/// An id without the separator is treated as a bare category with an empty slug.
pub fn split_program_id(program_id: &str) -> (&str, &str) {
    match program_id.find(THEME_SEPARATOR) {
        Some(pos) => (&program_id[..pos], &program_id[pos + THEME_SEPARATOR.len()..]),
        None => (program_id, ""),
    }
}

fn age_range_text(min: u32, max: u32) -> String {
    format!("{min}-{max} months")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_program_id() {
        assert_eq!(split_program_id("p_4_6_th_tummy_reach"), ("p_4_6", "tummy_reach"));
        assert_eq!(split_program_id("p_4_6"), ("p_4_6", ""));
        assert_eq!(program_id("p_0_2", "stretch"), "p_0_2_th_stretch");
    }

    #[test]
    fn test_duration_text() {
        let mut ex = BabyExercise {
            name: "Reach Right".into(),
            description: String::new(),
            parent_tips: String::new(),
            detailed_instructions: String::new(),
            environment_setup: String::new(),
            duration_seconds: 60,
            repetitions: 0,
            age_range_min: 4,
            age_range_max: 6,
        };
        assert!(ex.is_timed());
        assert_eq!(ex.duration_text(), "60s");
        assert_eq!(ex.age_range_text(), "4-6 months");

        ex.duration_seconds = 0;
        ex.repetitions = 10;
        assert!(ex.is_count_based());
        assert_eq!(ex.duration_text(), "10 reps");
    }
}
