//! Static reference tables embedded in every analysis prompt.
//!
//! The emotion spectrum follows Hawkins' Map of Consciousness ("Letting Go"),
//! ordered from the lowest to the highest level. The needs list follows
//! Rosenberg's NVC inventory of universal human needs.

/// One level on the emotion spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionLevel {
    pub level: u16,
    pub name: &'static str,
    pub synonyms: &'static [&'static str],
}

/// A named group of universal needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeedCategory {
    pub name: &'static str,
    pub needs: &'static [&'static str],
}

/// Strictly ascending by `level`.
pub const EMOTION_SPECTRUM: &[EmotionLevel] = &[
    EmotionLevel {
        level: 20,
        name: "Shame",
        synonyms: &["humiliation", "worthlessness"],
    },
    EmotionLevel {
        level: 30,
        name: "Guilt",
        synonyms: &["blame", "remorse"],
    },
    EmotionLevel {
        level: 50,
        name: "Apathy",
        synonyms: &["hopelessness", "despair", "defeat"],
    },
    EmotionLevel {
        level: 75,
        name: "Grief",
        synonyms: &["sadness", "loss", "regret"],
    },
    EmotionLevel {
        level: 100,
        name: "Fear",
        synonyms: &["anxiety", "worry", "dread"],
    },
    EmotionLevel {
        level: 125,
        name: "Desire",
        synonyms: &["craving", "wanting", "needing"],
    },
    EmotionLevel {
        level: 150,
        name: "Anger",
        synonyms: &["frustration", "hatred", "resentment"],
    },
    EmotionLevel {
        level: 175,
        name: "Pride",
        synonyms: &["disdain", "scorn", "dismissiveness"],
    },
    EmotionLevel {
        level: 200,
        name: "Courage",
        synonyms: &["confidence", "affirmation", "empowerment"],
    },
    EmotionLevel {
        level: 250,
        name: "Neutrality",
        synonyms: &["release", "non-attachment", "okayness"],
    },
    EmotionLevel {
        level: 310,
        name: "Willingness",
        synonyms: &["optimism", "intention", "openness"],
    },
    EmotionLevel {
        level: 350,
        name: "Acceptance",
        synonyms: &["forgiveness", "harmony"],
    },
    EmotionLevel {
        level: 400,
        name: "Reason",
        synonyms: &["understanding", "logic", "discernment"],
    },
    EmotionLevel {
        level: 500,
        name: "Love",
        synonyms: &["reverence", "care", "appreciation"],
    },
    EmotionLevel {
        level: 540,
        name: "Joy",
        synonyms: &["serenity", "compassion", "effortless"],
    },
    EmotionLevel {
        level: 600,
        name: "Peace",
        synonyms: &["bliss", "perfection", "oneness"],
    },
];

pub const UNIVERSAL_NEEDS: &[NeedCategory] = &[
    NeedCategory {
        name: "Connection",
        needs: &[
            "acceptance",
            "affection",
            "appreciation",
            "belonging",
            "closeness",
            "community",
            "companionship",
            "consideration",
            "empathy",
            "inclusion",
            "intimacy",
            "love",
            "mutuality",
            "respect",
            "safety",
            "security",
            "stability",
            "trust",
            "understanding",
            "warmth",
        ],
    },
    NeedCategory {
        name: "Autonomy",
        needs: &["choice", "freedom", "independence", "space", "spontaneity"],
    },
    NeedCategory {
        name: "Honesty",
        needs: &["authenticity", "integrity", "presence", "transparency"],
    },
    NeedCategory {
        name: "Play",
        needs: &["humor", "joy", "ease", "fun", "lightness"],
    },
    NeedCategory {
        name: "Peace",
        needs: &["beauty", "clarity", "ease", "equanimity", "harmony", "order"],
    },
    NeedCategory {
        name: "Physical well-being",
        needs: &[
            "air",
            "food",
            "movement/exercise",
            "protection",
            "rest",
            "safety",
            "shelter",
            "touch",
            "water",
        ],
    },
    NeedCategory {
        name: "Meaning",
        needs: &[
            "awareness",
            "celebration",
            "challenge",
            "clarity",
            "competence",
            "consciousness",
            "contribution",
            "creativity",
            "discovery",
            "efficacy",
            "effectiveness",
            "growth",
            "hope",
            "learning",
            "mourning",
            "participation",
            "purpose",
            "self-expression",
            "stimulation",
            "vision",
        ],
    },
];

/// Render the spectrum as one aligned row per level, lowest first.
pub fn render_emotion_spectrum(levels: &[EmotionLevel]) -> String {
    let name_width = levels.iter().map(|l| l.name.len()).max().unwrap_or(0);
    levels
        .iter()
        .map(|l| {
            format!(
                "Level {:<3} — {:<name_width$} ({})",
                l.level,
                l.name,
                l.synonyms.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render each needs category as `Name: need, need, ...`, one blank line apart.
pub fn render_universal_needs(categories: &[NeedCategory]) -> String {
    categories
        .iter()
        .map(|c| format!("{}: {}", c.name, c.needs.join(", ")))
        .collect::<Vec<_>>()
        .join("\n\n")
}
