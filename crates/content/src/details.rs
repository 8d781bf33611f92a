//! Per-exercise detail text: step-by-step instructions and environment setup.
//!
//! Both depend only on the age tier of the category, plus a safety note
//! keyed on the theme slug for the setup text.

/// Age tier used to pick detail text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTier {
    /// 0-2 months
    Newborn,
    /// 2-4 months
    Early,
    /// 4-8 months
    Mover,
    /// 8-12 months
    Cruiser,
    /// 12 months and up, and anything unrecognised
    Toddler,
}

impl AgeTier {
    /// Tier for a category id. Matches on the age fragment so stale or
    /// prefixed ids still land in the right tier.
    pub fn of(category_id: &str) -> Self {
        if category_id.contains("0_2") {
            Self::Newborn
        } else if category_id.contains("2_4") {
            Self::Early
        } else if category_id.contains("4_6") || category_id.contains("6_8") {
            Self::Mover
        } else if category_id.contains("8_10") || category_id.contains("10_12") {
            Self::Cruiser
        } else {
            Self::Toddler
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            Self::Newborn => {
                "1. Place baby on their back on a soft, comfortable surface\n\
                 2. Ensure baby is calm and alert, not hungry or tired\n\
                 3. Make eye contact and speak softly to baby\n\
                 4. Perform movements slowly and gently\n\
                 5. Watch for baby's cues - stop if they show discomfort\n\
                 6. Keep sessions short (2-3 minutes maximum)\n\
                 7. Support baby's head and neck at all times\n\
                 8. Celebrate with smiles and gentle praise"
            }
            Self::Early => {
                "1. Position baby on a clean, padded surface\n\
                 2. Get down to baby's eye level for engagement\n\
                 3. Use colorful toys to motivate movement\n\
                 4. Demonstrate the movement first if possible\n\
                 5. Provide gentle support where needed\n\
                 6. Encourage with your voice and facial expressions\n\
                 7. Take breaks between repetitions\n\
                 8. End on a positive note with cuddles or play"
            }
            Self::Mover => {
                "1. Clear the area of hazards and provide safe space\n\
                 2. Place engaging toys just out of reach to motivate\n\
                 3. Get on the floor with baby for encouragement\n\
                 4. Provide minimal support - let baby work\n\
                 5. Use enthusiastic praise for all attempts\n\
                 6. Allow rest periods as needed\n\
                 7. Keep sessions playful and fun\n\
                 8. Celebrate progress, no matter how small"
            }
            Self::Cruiser => {
                "1. Baby-proof the area and remove obstacles\n\
                 2. Stay close for safety but allow independence\n\
                 3. Use toys and games to make it fun\n\
                 4. Demonstrate the activity if needed\n\
                 5. Encourage with clapping and cheering\n\
                 6. Let baby set the pace\n\
                 7. Provide support only when necessary\n\
                 8. Make it a positive, playful experience"
            }
            Self::Toddler => {
                "1. Create a safe, open space for movement\n\
                 2. Remove any hazards or obstacles\n\
                 3. Stay nearby for supervision and support\n\
                 4. Make the activity fun and game-like\n\
                 5. Use positive reinforcement and encouragement\n\
                 6. Allow child to explore at their own pace\n\
                 7. Take breaks when needed\n\
                 8. Celebrate all efforts and achievements"
            }
        }
    }

    fn setup(self) -> &'static str {
        match self {
            Self::Newborn => {
                "• Soft mat or blanket on the floor\n\
                 • Comfortable room temperature (68-72°F)\n\
                 • Quiet space with minimal distractions\n\
                 • Good lighting (natural light preferred)\n\
                 • Have a small towel for support if needed\n\
                 • Keep baby's favorite toy nearby\n\
                 • Ensure you have time without interruptions"
            }
            Self::Early => {
                "• Large, clean play mat or soft surface\n\
                 • Remove small objects and choking hazards\n\
                 • Temperature-controlled comfortable room\n\
                 • Engaging toys within reach\n\
                 • Pillows or cushions for support\n\
                 • Mirror for visual engagement (optional)\n\
                 • Water bottle for parent nearby"
            }
            Self::Mover => {
                "• Spacious, carpeted or padded area\n\
                 • Baby-proofed space (cover outlets, secure furniture)\n\
                 • Variety of safe toys at different distances\n\
                 • Low, stable furniture for pulling up\n\
                 • Cushions or pillows for safety\n\
                 • Remove sharp edges and corners\n\
                 • Keep phone nearby for photos/videos"
            }
            Self::Cruiser => {
                "• Large open area free of obstacles\n\
                 • Stable furniture for cruising/support\n\
                 • Soft landing surfaces (mats, cushions)\n\
                 • Age-appropriate toys and balls\n\
                 • Secure all furniture to walls\n\
                 • Cover sharp corners and edges\n\
                 • Keep first aid kit accessible"
            }
            Self::Toddler => {
                "• Safe, spacious play area indoors or outdoors\n\
                 • Remove tripping hazards and obstacles\n\
                 • Soft surfaces for falls (grass, mats, carpet)\n\
                 • Age-appropriate equipment and toys\n\
                 • Proper footwear (or barefoot on safe surfaces)\n\
                 • Water and snacks nearby\n\
                 • Sunscreen if outdoors\n\
                 • Supervision at all times"
            }
        }
    }
}

/// Heading that opens every environment setup block.
pub const SETUP_HEADING: &str = "**Environment Setup:**";

// First matching keyword group wins.
const SPECIAL_NOTES: &[(&[&str], &str)] = &[
    (&["tummy"], "Use a firm surface for tummy time, not a soft bed or couch."),
    (&["crawl"], "Ensure floor is clean and free of small objects baby could put in mouth."),
    (&["stand", "walk"], "Clear area of furniture with sharp edges. Stay within arm's reach."),
    (&["climb", "stairs"], "Always supervise climbing. Use safety gates when not practicing."),
];

/// Numbered step-by-step instructions for any exercise in the category.
pub fn detailed_instructions_for(category_id: &str) -> &'static str {
    AgeTier::of(category_id).instructions()
}

/// Safety note for a theme, if its slug names a risky movement.
pub fn special_note_for(theme_slug: &str) -> Option<&'static str> {
    SPECIAL_NOTES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| theme_slug.contains(k)))
        .map(|(_, note)| *note)
}

/// Environment setup checklist for a category and theme.
pub fn environment_setup_for(category_id: &str, theme_slug: &str) -> String {
    let mut setup = format!("{SETUP_HEADING}\n\n{}", AgeTier::of(category_id).setup());
    if let Some(note) = special_note_for(theme_slug) {
        setup.push_str("\n\n**Special Note:** ");
        setup.push_str(note);
    }
    setup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_tiers() {
        assert_eq!(AgeTier::of("p_0_2"), AgeTier::Newborn);
        assert_eq!(AgeTier::of("p_2_4"), AgeTier::Early);
        assert_eq!(AgeTier::of("p_4_6"), AgeTier::Mover);
        assert_eq!(AgeTier::of("p_6_8"), AgeTier::Mover);
        assert_eq!(AgeTier::of("p_8_10"), AgeTier::Cruiser);
        assert_eq!(AgeTier::of("p_10_12"), AgeTier::Cruiser);
        assert_eq!(AgeTier::of("p_12_18"), AgeTier::Toddler);
        assert_eq!(AgeTier::of("p_99"), AgeTier::Toddler);
    }

    #[test]
    fn test_instructions_have_eight_steps() {
        for id in ["p_0_2", "p_2_4", "p_4_6", "p_8_10", "p_12_18"] {
            let text = detailed_instructions_for(id);
            assert_eq!(text.lines().count(), 8, "{id}");
            assert!(text.starts_with("1. "));
            assert!(text.lines().all(|l| !l.starts_with(' ')));
        }
        assert!(detailed_instructions_for("p_0_2").contains("Support baby's head and neck"));
    }

    #[test]
    fn test_tummy_theme_gets_firm_surface_note() {
        let setup = environment_setup_for("p_4_6", "tummy_reach");
        assert!(setup.starts_with("**Environment Setup:**\n\n• Spacious, carpeted"));
        assert!(setup.ends_with(
            "\n\n**Special Note:** Use a firm surface for tummy time, not a soft bed or couch."
        ));
    }

    #[test]
    fn test_crawl_theme_gets_floor_note() {
        let setup = environment_setup_for("p_6_8", "belly_crawl");
        assert!(setup.contains("Low, stable furniture for pulling up"));
        let note = setup.rsplit("**Special Note:** ").next().unwrap();
        assert!(note.starts_with("Ensure floor is clean"));
    }

    #[test]
    fn test_first_matching_note_wins() {
        assert_eq!(special_note_for("tummy_crawl"), special_note_for("tummy"));
        assert_eq!(special_note_for("stairs_walk"), special_note_for("walk"));
        assert!(special_note_for("stairs").unwrap().starts_with("Always supervise"));
        assert_eq!(special_note_for("massage"), None);
    }

    #[test]
    fn test_unknown_category_uses_toddler_setup_without_note() {
        let setup = environment_setup_for("p_99", "");
        assert!(setup.contains("• Supervision at all times"));
        assert!(!setup.contains("Special Note"));
        assert_eq!(setup.lines().filter(|l| l.starts_with('•')).count(), 8);
    }
}
