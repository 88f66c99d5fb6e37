//! Career-interest classifier: maps a message to a domain-of-interest bucket.
//!
//! Same first-match-wins scheme as the emotion classifier, with eight ordered
//! keyword sets. For ambiguous messages containing words from multiple sets,
//! the set listed first in the rule table wins.

use serde::{Deserialize, Serialize};

/// Domain-of-interest bucket detected in a user message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerLabel {
    Engineering,
    Medical,
    Management,
    Political,
    Arts,
    Music,
    Dance,
    Law,
    #[default]
    General,
}

impl CareerLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerLabel::Engineering => "engineering",
            CareerLabel::Medical => "medical",
            CareerLabel::Management => "management",
            CareerLabel::Political => "political",
            CareerLabel::Arts => "arts",
            CareerLabel::Music => "music",
            CareerLabel::Dance => "dance",
            CareerLabel::Law => "law",
            CareerLabel::General => "general",
        }
    }
}

const ENGINEERING_KEYWORDS: &[&str] = &[
    "engineering",
    "engineer",
    "software",
    "coding",
    "programming",
    "computer science",
    "robotics",
];

const MEDICAL_KEYWORDS: &[&str] = &[
    "medical",
    "medicine",
    "doctor",
    "mbbs",
    "surgeon",
    "nursing",
    "pharmacy",
];

const MANAGEMENT_KEYWORDS: &[&str] = &[
    "management",
    "business",
    "mba",
    "finance",
    "marketing",
    "entrepreneur",
    "commerce",
];

const POLITICAL_KEYWORDS: &[&str] = &[
    "political",
    "politics",
    "government",
    "civil service",
    "public policy",
    "diplomat",
];

const ARTS_KEYWORDS: &[&str] = &[
    "arts",
    "design",
    "painting",
    "literature",
    "creative writing",
    "fine art",
];

const MUSIC_KEYWORDS: &[&str] = &["music", "singing", "singer", "composer", "instrument"];

const DANCE_KEYWORDS: &[&str] = &["dance", "dancing", "dancer", "choreography"];

const LAW_KEYWORDS: &[&str] = &["law", "lawyer", "legal", "llb", "advocate", "judiciary"];

/// Priority-ordered rules; General is the fallback when nothing matches.
const INTEREST_RULES: &[(CareerLabel, &[&str])] = &[
    (CareerLabel::Engineering, ENGINEERING_KEYWORDS),
    (CareerLabel::Medical, MEDICAL_KEYWORDS),
    (CareerLabel::Management, MANAGEMENT_KEYWORDS),
    (CareerLabel::Political, POLITICAL_KEYWORDS),
    (CareerLabel::Arts, ARTS_KEYWORDS),
    (CareerLabel::Music, MUSIC_KEYWORDS),
    (CareerLabel::Dance, DANCE_KEYWORDS),
    (CareerLabel::Law, LAW_KEYWORDS),
];

/// Classifies the career interest of a message.
///
/// Total over any input. Case-insensitive substring containment, first rule
/// wins.
pub fn classify_interest(message: &str) -> CareerLabel {
    let text = message.to_lowercase();
    INTEREST_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(label, _)| *label)
        .unwrap_or(CareerLabel::General)
}
