//! Static exercise catalog.
//!
//! Every category carries ten step cues used as exercise descriptions, and
//! every theme carries ten exercise names. Order matters: it is the session
//! order of the generated program.

/// Exercises per program.
pub const EXERCISES_PER_PROGRAM: usize = 10;

/// A theme inside a category.
#[derive(Debug)]
pub struct ThemeDef {
    /// Theme slug
    pub slug: &'static str,
    /// Display title
    pub title: &'static str,
    /// Parent hint
    pub hint: &'static str,
    /// Exercise names in session order
    pub names: [&'static str; EXERCISES_PER_PROGRAM],
}

/// An age bucket with its themes.
#[derive(Debug)]
pub struct CategoryDef {
    /// Category id
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Age range in months, inclusive
    pub age_range: (u32, u32),
    /// Emoji icon
    pub icon: &'static str,
    /// Color name
    pub color: &'static str,
    /// Step cues in session order
    pub steps: [&'static str; EXERCISES_PER_PROGRAM],
    /// Themes in display order
    pub themes: &'static [ThemeDef],
}

impl CategoryDef {
    /// Theme by slug.
    pub fn theme(&self, slug: &str) -> Option<&'static ThemeDef> {
        self.themes.iter().find(|t| t.slug == slug)
    }
}

/// Age range for ids outside the catalog.
pub const FALLBACK_AGE_RANGE: (u32, u32) = (0, 18);

/// Hint for themes outside the catalog.
pub const FALLBACK_HINT: &str = "Parent tip: follow your child's cues and keep it playful.";

/// Step cues for categories outside the catalog.
pub const FALLBACK_STEPS: [&str; EXERCISES_PER_PROGRAM] = [
    "Setup: prepare environment",
    "Begin: start movement",
    "Support: provide assistance",
    "Encourage: use positive cues",
    "Pause: rest as needed",
    "Progress: advance gradually",
    "Observe: watch baby's response",
    "Adjust: modify as needed",
    "Complete: finish activity",
    "Rest: allow recovery",
];

/// Category by id.
pub fn category_def(id: &str) -> Option<&'static CategoryDef> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// All categories, youngest first.
pub static CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: "p_0_2",
        title: "0-2 Months",
        age_range: (0, 2),
        icon: "🍼",
        color: "pastelPink",
        steps: [
            "Setup: calm environment, baby comfortable", "Begin: slow, gentle movement",
            "Observe: watch baby's cues", "Pause: reset if needed", "Continue: maintain calm pace",
            "Support: use hands for stability", "Encourage: soft voice cues",
            "Adjust: respond to baby's signals", "Complete: finish gently",
            "Rest: allow recovery time",
        ],
        themes: &[
            ThemeDef {
                slug: "calm_connect",
                title: "Calm & Connect",
                hint: "Parent: Gentle holds and slow movements support bonding and regulation.",
                names: [
                    "Gentle Hold", "Skin-to-Skin", "Slow Rock", "Eye Contact", "Soft Voice",
                    "Calm Breathing", "Still Pause", "Gentle Sway", "Quiet Time", "End Hold",
                ],
            },
            ThemeDef {
                slug: "track_soothe",
                title: "Track & Soothe",
                hint: "Parent: Use slow-moving toys or your face for tracking practice.",
                names: [
                    "Face Tracking", "Slow Toy Move", "Side-to-Side", "Up & Down", "Pause & Reset",
                    "Soft Rattle", "Gentle Voice", "Eye Follow", "Short Track", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "stretch",
                title: "Gentle Stretches",
                hint: "Parent: Gentle stretches in a comfortable range only; no forcing.",
                names: [
                    "Leg Stretch", "Arm Stretch", "Hip Circles", "Ankle Flex", "Shoulder Relax",
                    "Neck Support", "Gentle Twist", "Knee to Chest", "Arm Circles", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "arm_mobility",
                title: "Arm Mobility",
                hint: "Parent: Support shoulders and move arms slowly through comfortable ranges.",
                names: [
                    "Shoulder Support Hold", "Arm Open & Close", "Hands to Midline",
                    "Gentle Arm Circles", "Cross-Body Reach", "Elbow Bend & Extend",
                    "Palm Open Relax", "Hand-to-Cheek Touch", "Slow Symmetry Check", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "side_lying",
                title: "Side-lying Support",
                hint: "Parent: Side-lying with towel support helps midline hands and head control.",
                names: [
                    "Supported Side-lying Setup", "Towel Roll Support", "Hands to Midline",
                    "Toy in Front", "Short Side Switch", "Head Support Check", "Hip Comfort Check",
                    "Gentle Reach Cue", "Calm Pause", "End Hold",
                ],
            },
            ThemeDef {
                slug: "massage",
                title: "Gentle Massage",
                hint: "Parent: Gentle massage with calm voice. Stop if baby shows discomfort.",
                names: [
                    "Leg Massage", "Arm Massage", "Foot Rub", "Hand Massage", "Belly Clockwise",
                    "Back Soothing", "Shoulder Relax Touch", "Cheek/Face Touch",
                    "Slow Pressure Test", "Stop Cue Practice",
                ],
            },
            ThemeDef {
                slug: "feeding_posture",
                title: "Feeding Posture",
                hint: "Parent: Check chin off chest, midline alignment, and switch sides regularly.",
                names: [
                    "Chin Off Chest Check", "Midline Alignment", "Switch Sides",
                    "Supported Burp Hold", "Shoulder Relax", "Hip Comfort", "Neck Neutral",
                    "Slow Reposition", "Short Break", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "sensory_calm",
                title: "Sensory Calm",
                hint: "Parent: One sensory item at a time. Stop if overstimulated.",
                names: [
                    "Soft Voice Cue", "Gentle Touch", "Slow Rock", "Quiet Music", "Dim Light",
                    "White Noise", "One Sensory Item", "Stop if Overstimulated",
                    "Short Calm Pause", "End Still",
                ],
            },
        ],
    },
    CategoryDef {
        id: "p_2_4",
        title: "2-4 Months",
        age_range: (2, 4),
        icon: "👶",
        color: "pastelBlue",
        steps: [
            "Setup: position baby safely", "Begin: introduce movement slowly",
            "Motivate: use toy or voice", "Support: provide trunk/head support",
            "Pause: short breaks as needed", "Encourage: celebrate small wins",
            "Adjust: modify based on response", "Continue: keep sets brief",
            "Complete: end on positive note", "Rest: allow full recovery",
        ],
        themes: &[
            ThemeDef {
                slug: "tummy",
                title: "Tummy Time Starter",
                hint: "Parent: Short tummy sets with breaks. Use toys for motivation.",
                names: [
                    "Tummy on Chest", "Tummy on Mat", "Towel Roll Support", "Toy Motivation",
                    "Head Turn Practice", "Short Set Reset", "Reach on Tummy",
                    "Elbows Under Shoulders", "Tiny Push-Up", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "head_control",
                title: "Head Control",
                hint: "Parent: Support at chest/trunk and practice slow head turns.",
                names: [
                    "Supported Upright Carry", "Tummy Head Lift", "Side Look Practice",
                    "Midline Look", "Slow Turn Right", "Slow Turn Left", "Short Break Reset",
                    "Chest Support", "Neck Neutral Check", "End Hold",
                ],
            },
            ThemeDef {
                slug: "reach_track",
                title: "Reach & Track",
                hint: "Parent: Place toys within reach and track slowly side-to-side.",
                names: [
                    "Toy Within Reach", "Slow Track Right", "Slow Track Left", "Hands to Toy",
                    "One-Hand Reach", "Two-Hand Hold", "Bring Toy to Mouth", "Open Palm Practice",
                    "Gentle Pull (No Force)", "Reach Across Body",
                ],
            },
            ThemeDef {
                slug: "sensory_play",
                title: "Sensory Play",
                hint: "Parent: One texture or toy at a time. Stop if overstimulated.",
                names: [
                    "Texture Touch", "Soft Rattle Listen", "Toy Tap", "Gentle Mirror Look",
                    "One Item Only", "Pause & Reset", "Switch Texture", "Short Calm Break",
                    "Stop if Overstimulated", "End Still",
                ],
            },
            ThemeDef {
                slug: "calm_reset",
                title: "Calm Reset",
                hint: "Parent: Slow rocks, quiet voice, and dim lights for regulation.",
                names: [
                    "Slow Rock", "Cradle Sway", "Quiet Voice", "Dim Lights", "Breathing Sync",
                    "Short Hold", "Side-to-Side", "Stillness Pause", "Stop Cue", "End Hold",
                ],
            },
            ThemeDef {
                slug: "gentle_mobility",
                title: "Gentle Mobility",
                hint: "Parent: Mix tummy, side-lying, and back play with frequent breaks.",
                names: [
                    "Comfort Stretch", "Hands to Midline", "Short Tummy Set", "Toy Reach",
                    "Side-lying Switch", "Leg Bicycles", "Arm Mobility", "Slow Reset",
                    "Pause Often", "Calm Finish",
                ],
            },
        ],
    },
    CategoryDef {
        id: "p_4_6",
        title: "4-6 Months",
        age_range: (4, 6),
        icon: "🎯",
        color: "pastelGreen",
        steps: [
            "Setup: safe surface, toys ready", "Begin: demonstrate movement",
            "Motivate: place toy strategically", "Support: assist at hips/trunk",
            "Encourage: use voice and praise", "Pause: reset between attempts",
            "Progress: reduce support gradually", "Observe: watch for fatigue",
            "Complete: finish with success", "Rest: allow adequate recovery",
        ],
        themes: &[
            ThemeDef {
                slug: "tummy_reach",
                title: "Tummy Reach & Play",
                hint: "Parent: Short tummy sets with reaching. Support elbows under shoulders and keep it calm.",
                names: [
                    "Tummy Setup", "Elbows Under Shoulders", "Toy Just in Front", "Reach Right",
                    "Reach Left", "Tiny Push-Up", "Weight Shift Right", "Weight Shift Left",
                    "Rest & Reset", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "roll_to_tummy",
                title: "Roll to Tummy",
                hint: "Parent: Guide the roll with a toy and gentle support at shoulder/hip. Avoid pulling by arms.",
                names: [
                    "Toy to Side", "Assist Shoulder", "Assist Hip", "Pause on Side", "Finish Roll",
                    "Tummy Reset", "Try Other Side", "Minimal Help", "Celebrate", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "roll_to_back",
                title: "Roll to Back",
                hint: "Parent: From tummy, guide hips and pause on the side before rolling to back. Keep it slow.",
                names: [
                    "Tummy Start", "Toy Up & Over", "Shift the Hips", "Pause on Side",
                    "Back Landing", "Hands to Midline", "Try Other Side", "Slow Pattern",
                    "Rest Break", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "side_lying",
                title: "Side-lying Play",
                hint: "Parent: Supported side-lying helps midline hands and rolling setup. Always supervise.",
                names: [
                    "Side-lying Setup", "Towel Support", "Hands to Midline", "Toy in Front",
                    "Short Reach", "Switch Sides", "Rolling Hint", "Head Turn", "Pause", "Finish",
                ],
            },
            ThemeDef {
                slug: "sit_support",
                title: "Supported Sitting",
                hint: "Parent: Support at hips/trunk for short sitting sets. Reset often; avoid pushing through fatigue.",
                names: [
                    "Supported Sit Setup", "Hips Back", "Trunk Support", "Hands Forward",
                    "Short Hold", "Reset Often", "Toy at Midline", "No Pushing Through Fatigue",
                    "Celebrate", "End Calm",
                ],
            },
            ThemeDef {
                slug: "sit_balance",
                title: "Sitting Balance",
                hint: "Parent: Tiny reaches to the side build balance. Keep baby safe and supervised.",
                names: [
                    "Supported Sit", "Tiny Reach Right", "Tiny Reach Left", "Toy to Side",
                    "Short Hold", "Reset", "Hands Catch", "Celebrate", "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "hands_grasp",
                title: "Hands & Grasp",
                hint: "Parent: Offer safe, easy-to-grab toys to practice grasp and transfers. Keep it brief.",
                names: [
                    "Toy Offer", "Grasp Practice", "Hold & Release", "Transfer Hand-to-Hand",
                    "Bring to Mouth", "Two-Hand Hold", "Open Palm Practice",
                    "Gentle Pull (No Force)", "Reach Across Body", "Short Pause",
                ],
            },
            ThemeDef {
                slug: "feet_play",
                title: "Feet Discovery",
                hint: "Parent: Encourage gentle feet discovery (hands-to-feet, toe wiggles). Comfort range only.",
                names: [
                    "Hands to Feet", "Toe Wiggle", "Foot Hold", "Gentle Leg Lift", "Knee to Chest",
                    "Hip Comfort", "Ankle Flex", "Short Play", "Rest", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "pivot_play",
                title: "Pivot & Turn",
                hint: "Parent: Place toys to the side on tummy time to encourage tiny pivots. Alternate sides.",
                names: [
                    "Tummy Setup", "Toy to Right", "Tiny Pivot", "Toy to Left", "Pivot Other Way",
                    "Elbows Under Shoulders", "Short Rest", "Repeat", "Celebrate", "End Calm",
                ],
            },
            ThemeDef {
                slug: "back_play",
                title: "Back Play & Reach",
                hint: "Parent: Back play is a great rest between tummy sets; use slow toy movement and midline hands.",
                names: [
                    "Back Setup", "Toy Above", "Slow Track", "Hands to Midline", "Reach Up",
                    "Two-Hand Hold", "Bring to Mouth", "Short Rest", "Repeat", "Calm Finish",
                ],
            },
        ],
    },
    CategoryDef {
        id: "p_6_8",
        title: "6-8 Months",
        age_range: (6, 8),
        icon: "🧸",
        color: "pastelYellow",
        steps: [
            "Setup: clear space, safe surface", "Begin: demonstrate the movement",
            "Motivate: use engaging toys", "Support: minimal assistance",
            "Encourage: praise effort and progress", "Challenge: increase difficulty slightly",
            "Pause: rest between repetitions", "Observe: monitor form and fatigue",
            "Complete: end with achievement", "Rest: allow full recovery",
        ],
        themes: &[
            ThemeDef {
                slug: "sit_balance",
                title: "Sitting Balance",
                hint: "Parent: Sitting balance with tiny reaches. Support at hips and keep sets short.",
                names: [
                    "Independent Sit", "Tiny Reach Right", "Tiny Reach Left", "Toy to Side",
                    "Hands Catch", "Short Hold", "Reset", "Repeat", "Celebrate", "Finish",
                ],
            },
            ThemeDef {
                slug: "sit_to_floor",
                title: "Sit to Floor",
                hint: "Parent: Controlled lowering from sit to floor. Guide hands forward and keep it slow.",
                names: [
                    "Sit & Pause", "Hands Forward", "Slow Lean", "Controlled Lower",
                    "Tummy Landing", "Toy in Front", "Back to Sit (Assist)", "Break", "Repeat",
                    "End Calm",
                ],
            },
            ThemeDef {
                slug: "floor_to_sit",
                title: "Floor to Sit",
                hint: "Parent: From tummy/side, guide baby to sitting. Support at hips and celebrate effort.",
                names: [
                    "Tummy Setup", "Side-lying Roll", "Prop on Elbow", "Hand on Floor",
                    "Hip Assist", "Arrive Sitting", "Toy at Midline", "Short Hold", "Break",
                    "Finish",
                ],
            },
            ThemeDef {
                slug: "all_fours_rock",
                title: "All-Fours Rocking",
                hint: "Parent: Rocking on hands-and-knees builds crawl readiness. Keep it brief and playful.",
                names: [
                    "Hands-and-Knees Setup", "Rock Forward", "Rock Back", "Pause",
                    "Rock Side-to-Side", "Short Break", "Repeat Rock", "Toy Motivation",
                    "End with Tummy", "Calm Finish",
                ],
            },
            ThemeDef {
                slug: "hands_knees_setup",
                title: "Hands & Knees Setup",
                hint: "Parent: Short holds on hands-and-knees. Support at hips if needed and keep it calm.",
                names: [
                    "Tummy Start", "Bring Knees Under Hips", "Hands Under Shoulders",
                    "Hold 3 Seconds", "Release to Tummy", "Repeat", "Toy in Front", "Short Hold",
                    "Break", "Finish Calm",
                ],
            },
            ThemeDef {
                slug: "belly_crawl",
                title: "Belly Crawl",
                hint: "Parent: Belly crawl with toy motivation. Celebrate any forward movement and keep it fun.",
                names: [
                    "Tummy Setup", "Toy in Front", "Belly Drag", "Use Arms", "Use Legs",
                    "Any Forward Movement", "Celebrate", "Short Rest", "Repeat", "End Play",
                ],
            },
            ThemeDef {
                slug: "reach_pivot",
                title: "Reach & Pivot",
                hint: "Parent: Reaching and pivoting on tummy. Place toys to the side to encourage turning.",
                names: [
                    "Tummy Setup", "Toy to Right", "Reach & Pivot", "Toy to Left",
                    "Pivot Other Way", "Belly Crawl Try", "Short Rest", "Repeat", "Celebrate",
                    "Finish",
                ],
            },
            ThemeDef {
                slug: "kneel_play",
                title: "Kneel Play",
                hint: "Parent: Supported tall kneel at a stable surface builds hips/trunk. Keep it short and supervised.",
                names: [
                    "Tall Kneel Setup", "Support at Surface", "Short Hold", "Toy at Eye Level",
                    "Reach Up", "Balance Check", "Hip Support", "Short Duration", "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "hand_coordination",
                title: "Hand Coordination",
                hint: "Parent: Practice transfers and simple container play with safe, large objects.",
                names: [
                    "Container Play", "Drop-In", "Take-Out", "Transfer Toy", "Two-Hand Hold",
                    "Open/Close Lid", "Stack Attempt", "Short Break", "Repeat", "End Play",
                ],
            },
            ThemeDef {
                slug: "cause_effect_play",
                title: "Cause & Effect",
                hint: "Parent: Simple cause-and-effect toys build focus. Demonstrate once, then let baby try.",
                names: [
                    "Press a Button Toy", "Pull a Cloth", "Drop-in Play", "Find the Toy",
                    "Open/Close Container", "Push a Ball", "Repeat", "Short Break", "One More Try",
                    "Calm Finish",
                ],
            },
        ],
    },
    CategoryDef {
        id: "p_8_10",
        title: "8-10 Months",
        age_range: (8, 10),
        icon: "🎨",
        color: "pastelPurple",
        steps: [
            "Setup: safe space, remove hazards", "Begin: demonstrate activity",
            "Motivate: use toys and encouragement", "Support: stay close for safety",
            "Encourage: celebrate all attempts", "Challenge: add slight difficulty",
            "Pause: rest when needed", "Observe: watch for fatigue", "Complete: end positively",
            "Rest: allow recovery",
        ],
        themes: &[
            ThemeDef {
                slug: "crawl_explore",
                title: "Crawl & Explore",
                hint: "Parent: Encourage crawling exploration with toys and safe obstacles. Supervise closely.",
                names: [
                    "Crawl Forward", "Crawl to Toy", "Crawl Around Object", "Crawl Over Pillow",
                    "Crawl Under Table", "Speed Crawl", "Direction Change", "Crawl & Stop",
                    "Crawl & Sit", "Finish Play",
                ],
            },
            ThemeDef {
                slug: "pull_to_stand",
                title: "Pull to Stand",
                hint: "Parent: Support at trunk as baby pulls to stand. Use stable furniture and celebrate effort.",
                names: [
                    "Kneel at Couch", "Pull Up to Stand", "Hold Standing", "Knee Bend Down",
                    "Pull Up Again", "Side Step Hold", "Let Go Briefly", "Controlled Lower",
                    "Repeat", "End Stand",
                ],
            },
            ThemeDef {
                slug: "cruise_furniture",
                title: "Cruise Furniture",
                hint: "Parent: Baby-proof furniture edges. Stay close as baby cruises and practices side-stepping.",
                names: [
                    "Stand at Couch", "Side Step Right", "Side Step Left", "Reach for Toy",
                    "Two Steps Right", "Two Steps Left", "Turn Corner", "Short Rest", "Repeat",
                    "Finish",
                ],
            },
            ThemeDef {
                slug: "squat_play",
                title: "Squat Play",
                hint: "Parent: Squatting builds leg strength. Place toys low to encourage squatting and standing.",
                names: [
                    "Stand at Surface", "Squat Down", "Pick Up Toy", "Stand Back Up",
                    "Squat Again", "Place Toy Down", "Stand Up", "Repeat Pattern", "Rest",
                    "End Play",
                ],
            },
            ThemeDef {
                slug: "transition_practice",
                title: "Transition Practice",
                hint: "Parent: Practice moving between positions. Support as needed and keep it playful.",
                names: [
                    "Sit to Stand", "Stand to Sit", "Sit to Crawl", "Crawl to Sit", "Sit to Kneel",
                    "Kneel to Stand", "Stand to Squat", "Squat to Stand", "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "hand_skills",
                title: "Hand Skills",
                hint: "Parent: Offer small safe objects for pincer grasp. Supervise closely to prevent choking.",
                names: [
                    "Pincer Grasp", "Pick Small Item", "Transfer Hand-to-Hand",
                    "Place in Container", "Stack Two Blocks", "Knock Down Stack",
                    "Point at Object", "Clap Hands", "Wave Bye", "End Play",
                ],
            },
            ThemeDef {
                slug: "balance_stand",
                title: "Balance Standing",
                hint: "Parent: Stand close for safety. Brief balance challenges build confidence and strength.",
                names: [
                    "Stand with Support", "Lift One Foot", "Weight Shift Right",
                    "Weight Shift Left", "Reach Up High", "Reach Down Low", "Turn Head Right",
                    "Turn Head Left", "Brief No Hands", "Finish",
                ],
            },
            ThemeDef {
                slug: "climb_explore",
                title: "Climb & Explore",
                hint: "Parent: Supervise all climbing. Use soft surfaces and teach safe climbing down.",
                names: [
                    "Crawl to Step", "Climb Up One Step", "Sit on Step", "Climb Down (Assist)",
                    "Climb Over Pillow", "Climb Into Box", "Climb Out of Box", "Rest", "Repeat",
                    "End Explore",
                ],
            },
            ThemeDef {
                slug: "push_pull",
                title: "Push & Pull",
                hint: "Parent: Push and pull toys build strength and coordination. Clear space for safe movement.",
                names: [
                    "Push Toy Forward", "Pull Toy Backward", "Push Standing", "Pull Standing",
                    "Push While Walking", "Pull While Walking", "Push to Wall", "Pull Back",
                    "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "coordination_play",
                title: "Coordination Play",
                hint: "Parent: Simple coordination activities build skills. Keep it fun and celebrate attempts.",
                names: [
                    "Roll Ball Forward", "Catch Ball", "Stack Blocks", "Knock Blocks",
                    "Put In Container", "Take Out Container", "Turn Pages", "Press Buttons",
                    "Clap & Dance", "End Play",
                ],
            },
        ],
    },
    CategoryDef {
        id: "p_10_12",
        title: "10-12 Months",
        age_range: (10, 12),
        icon: "🚼",
        color: "pastelOrange",
        steps: [
            "Setup: clear safe area", "Begin: show the activity", "Motivate: make it fun",
            "Support: provide minimal help", "Encourage: praise efforts",
            "Challenge: increase complexity", "Pause: take breaks", "Observe: monitor safety",
            "Complete: celebrate success", "Rest: allow rest time",
        ],
        themes: &[
            ThemeDef {
                slug: "stand_strong",
                title: "Stand Strong",
                hint: "Parent: Independent standing builds confidence. Stay close and celebrate balance achievements.",
                names: [
                    "Stand Independently", "Hold 5 Seconds", "Reach Up", "Reach Down",
                    "Turn Around", "Squat & Stand", "One Foot Lift", "Weight Shift",
                    "Clap Standing", "Finish",
                ],
            },
            ThemeDef {
                slug: "first_steps",
                title: "First Steps",
                hint: "Parent: First steps are exciting! Stay close, encourage, and celebrate every attempt.",
                names: [
                    "Stand Independently", "One Step Forward", "Two Steps Forward",
                    "Walk to Parent", "Walk to Toy", "Turn While Walking", "Stop & Start",
                    "Walk & Clap", "Short Walk", "End Walk",
                ],
            },
            ThemeDef {
                slug: "cruise_confident",
                title: "Confident Cruising",
                hint: "Parent: Confident cruising leads to walking. Provide stable furniture and stay nearby.",
                names: [
                    "Cruise Right", "Cruise Left", "Let Go Briefly", "Cruise Fast",
                    "Cruise & Reach", "Turn Corner", "Cruise Backward", "Change Direction", "Rest",
                    "Finish",
                ],
            },
            ThemeDef {
                slug: "squat_stand",
                title: "Squat & Stand",
                hint: "Parent: Squatting and standing builds leg strength. Make it a game with toys.",
                names: [
                    "Stand Up", "Squat Down", "Pick Up Toy", "Stand Up", "Squat Again",
                    "Place Toy", "Stand Up", "Repeat Fast", "Rest", "End",
                ],
            },
            ThemeDef {
                slug: "walk_assist",
                title: "Assisted Walking",
                hint: "Parent: Hold one hand for support. Gradually reduce assistance as confidence grows.",
                names: [
                    "Hold One Hand", "Walk Forward", "Walk Sideways", "Walk Backward",
                    "Let Go Briefly", "Walk to Toy", "Walk & Stop", "Walk & Turn", "Rest",
                    "Finish",
                ],
            },
            ThemeDef {
                slug: "fine_motor",
                title: "Fine Motor Skills",
                hint: "Parent: Fine motor skills develop through play. Offer blocks, cups, and safe small objects.",
                names: [
                    "Pincer Grasp", "Stack 3 Blocks", "Nest Cups", "Turn Pages", "Point & Poke",
                    "Drop In Slot", "Scribble", "Clap Hands", "Wave", "End Play",
                ],
            },
            ThemeDef {
                slug: "ball_play",
                title: "Ball Play",
                hint: "Parent: Ball play builds coordination. Use soft balls and keep it fun and simple.",
                names: [
                    "Roll Ball", "Catch Ball", "Throw Ball", "Kick Ball", "Chase Ball",
                    "Roll to Target", "Throw in Basket", "Kick to Goal", "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "climb_stairs",
                title: "Climb Stairs",
                hint: "Parent: Always supervise stairs. Teach safe climbing and use gates when unsupervised.",
                names: [
                    "Crawl Up Step", "Stand on Step", "Step Up (Assist)", "Step Down (Assist)",
                    "Climb Two Steps", "Sit on Step", "Stand Up", "Step Down", "Rest", "End",
                ],
            },
            ThemeDef {
                slug: "push_walk",
                title: "Push & Walk",
                hint: "Parent: Push toys support early walking. Ensure toys are stable and the path is clear.",
                names: [
                    "Push Toy Standing", "Push & Walk", "Push Forward", "Push & Turn", "Push Fast",
                    "Push Slow", "Push to Wall", "Push Back", "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "dance_move",
                title: "Dance & Move",
                hint: "Parent: Dancing builds rhythm and balance. Play music and move together.",
                names: [
                    "Stand & Bounce", "Sway Side-to-Side", "Clap to Music", "Stomp Feet",
                    "Turn Around", "Arms Up", "Bend Knees", "Spin Slow", "Rest", "Finish",
                ],
            },
        ],
    },
    CategoryDef {
        id: "p_12_18",
        title: "12-18 Months",
        age_range: (12, 18),
        icon: "🎪",
        color: "pastelMint",
        steps: [
            "Setup: prepare safe space", "Begin: demonstrate clearly", "Motivate: keep it playful",
            "Support: supervise closely", "Encourage: positive reinforcement",
            "Challenge: add variations", "Pause: rest as needed", "Observe: ensure safety",
            "Complete: finish with praise", "Rest: recovery time",
        ],
        themes: &[
            ThemeDef {
                slug: "walk_confident",
                title: "Confident Walking",
                hint: "Parent: Confident walking opens new exploration. Provide safe spaces and supervise closely.",
                names: [
                    "Walk Forward", "Walk Fast", "Walk Slow", "Walk & Stop", "Walk & Turn",
                    "Walk Backward", "Walk Sideways", "Walk in Circle", "Walk & Clap", "Finish",
                ],
            },
            ThemeDef {
                slug: "run_explore",
                title: "Run & Explore",
                hint: "Parent: Early running is unsteady. Clear obstacles and stay close for safety.",
                names: [
                    "Fast Walk", "Slow Run", "Run to Parent", "Run to Toy", "Run & Stop",
                    "Change Direction", "Run Around Object", "Run & Laugh", "Rest", "End",
                ],
            },
            ThemeDef {
                slug: "jump_practice",
                title: "Jump Practice",
                hint: "Parent: Jumping develops gradually. Use soft surfaces and celebrate small jumps.",
                names: [
                    "Bounce on Spot", "Small Jump", "Jump Forward", "Jump on Mat", "Jump Off Step",
                    "Jump & Land", "Jump & Clap", "Jump to Music", "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "kick_throw",
                title: "Kick & Throw",
                hint: "Parent: Kicking and throwing build coordination. Use soft balls in safe spaces.",
                names: [
                    "Kick Ball Forward", "Throw Ball", "Kick to Target", "Throw in Basket",
                    "Kick & Chase", "Throw & Catch", "Kick Standing", "Throw Overhand", "Rest",
                    "End Play",
                ],
            },
            ThemeDef {
                slug: "climb_stairs_independent",
                title: "Independent Stairs",
                hint: "Parent: Supervise all stair use. Teach safe techniques and use gates when needed.",
                names: [
                    "Walk Up Step", "Walk Down Step", "Climb Up Stairs", "Climb Down Stairs",
                    "Step Over Object", "Climb on Couch", "Climb Down Couch", "Step Practice",
                    "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "balance_beam",
                title: "Balance Beam",
                hint: "Parent: Balance activities build confidence. Start low and stay close for safety.",
                names: [
                    "Walk on Line", "Walk on Tape", "Walk on Curb", "Balance on One Foot",
                    "Walk Heel-Toe", "Arms Out Balance", "Turn on Line", "Walk Backward", "Rest",
                    "End",
                ],
            },
            ThemeDef {
                slug: "push_pull_walk",
                title: "Push & Pull Walking",
                hint: "Parent: Push and pull toys while walking builds strength. Clear the path of obstacles.",
                names: [
                    "Push Toy Walking", "Pull Toy Walking", "Push Fast", "Pull Fast",
                    "Push & Turn", "Pull & Turn", "Push Uphill", "Pull Backward", "Rest", "Finish",
                ],
            },
            ThemeDef {
                slug: "dance_rhythm",
                title: "Dance & Rhythm",
                hint: "Parent: Dancing builds coordination and joy. Move together to music and have fun.",
                names: [
                    "Dance to Music", "Stomp Feet", "Clap Hands", "Spin Around", "Jump to Beat",
                    "Sway Side-to-Side", "Arms Up & Down", "March in Place", "Bow", "Finish",
                ],
            },
            ThemeDef {
                slug: "obstacle_course",
                title: "Obstacle Course",
                hint: "Parent: Simple obstacle courses build multiple skills. Keep it safe and age-appropriate.",
                names: [
                    "Crawl Under Table", "Step Over Pillow", "Walk Around Cone", "Climb Over Box",
                    "Walk on Tape", "Jump on Mat", "Push Toy", "Throw Ball", "Rest", "End Course",
                ],
            },
            ThemeDef {
                slug: "fine_motor_advanced",
                title: "Advanced Fine Motor",
                hint: "Parent: Advanced fine motor skills take practice. Offer varied activities and celebrate progress.",
                names: [
                    "Stack 6 Blocks", "String Beads", "Turn Pages", "Scribble Circle", "Use Spoon",
                    "Pour Water", "Zip Zipper", "Button Practice", "Clap Pattern", "End Play",
                ],
            },
        ],
    },
];
