//! Program generation from the catalog.
//!
//! Pure lookups: the same program id always yields the same program.
//! Unknown categories or themes fall back to generic content instead of
//! failing, so stale ids in saved progress still open.

use kinetips_core::{
    program_id, split_program_id, BabyCategory, BabyExercise, BabyProgram, ThemeSummary,
};

use crate::catalog::{
    category_def, CATEGORIES, EXERCISES_PER_PROGRAM, FALLBACK_AGE_RANGE, FALLBACK_HINT,
    FALLBACK_STEPS,
};
use crate::details::{detailed_instructions_for, environment_setup_for};
use crate::ContentError;

/// Length of a timed exercise.
pub const TIMED_EXERCISE_SECONDS: u32 = 60;

/// Repetitions of a count-based exercise.
pub const COUNT_EXERCISE_REPS: u32 = 10;

/// Every category, youngest first.
pub fn all_categories() -> Vec<BabyCategory> {
    CATEGORIES
        .iter()
        .map(|c| BabyCategory {
            category_id: c.id.to_string(),
            title: c.title.to_string(),
            age_range_min: c.age_range.0,
            age_range_max: c.age_range.1,
            icon: c.icon.to_string(),
            color: c.color.to_string(),
        })
        .collect()
}

/// A single category.
pub fn category(category_id: &str) -> Result<BabyCategory, ContentError> {
    all_categories()
        .into_iter()
        .find(|c| c.category_id == category_id)
        .ok_or_else(|| ContentError::UnknownCategory(category_id.to_string()))
}

/// Themes of a category in display order; empty for unknown categories.
pub fn themes_for_category(category_id: &str) -> Vec<ThemeSummary> {
    category_def(category_id)
        .map(|c| {
            c.themes
                .iter()
                .map(|t| ThemeSummary {
                    slug: t.slug.to_string(),
                    title: t.title.to_string(),
                    program_id: program_id(c.id, t.slug),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Age range in months for a category.
pub fn age_range_for_category(category_id: &str) -> (u32, u32) {
    category_def(category_id).map_or(FALLBACK_AGE_RANGE, |c| c.age_range)
}

/// Build the ten-exercise program for `program_id`.
///
/// Even positions are timed, odd positions are count-based. Every exercise
/// carries the category's instructions and the theme's setup checklist.
pub fn generate_program(program_id: &str) -> BabyProgram {
    let (category_id, theme_slug) = split_program_id(program_id);
    let category = category_def(category_id);
    let theme = category.and_then(|c| c.theme(theme_slug));

    let (age_min, age_max) = age_range_for_category(category_id);
    let theme_title = theme.map_or_else(|| theme_slug.to_string(), |t| t.title.to_string());
    let theme_hint = theme.map_or(FALLBACK_HINT, |t| t.hint).to_string();
    let steps = category.map_or(&FALLBACK_STEPS, |c| &c.steps);
    let instructions = detailed_instructions_for(category_id);
    let setup = environment_setup_for(category_id, theme_slug);

    let exercises = (0..EXERCISES_PER_PROGRAM)
        .map(|i| {
            let name = theme.map_or_else(|| theme_title.clone(), |t| t.names[i].to_string());
            let timed = i % 2 == 0;
            BabyExercise {
                name,
                description: steps[i].to_string(),
                parent_tips: theme_hint.clone(),
                detailed_instructions: instructions.to_string(),
                environment_setup: setup.clone(),
                duration_seconds: if timed { TIMED_EXERCISE_SECONDS } else { 0 },
                repetitions: if timed { 0 } else { COUNT_EXERCISE_REPS },
                age_range_min: age_min,
                age_range_max: age_max,
            }
        })
        .collect();

    BabyProgram {
        program_id: program_id.to_string(),
        category_id: category_id.to_string(),
        theme_slug: theme_slug.to_string(),
        theme_title,
        theme_hint,
        exercises,
        age_range_min: age_min,
        age_range_max: age_max,
    }
}
