//! Emotion classifier: maps a free-text message to a coarse emotional tone.
//!
//! Pure keyword matching, no LLM call. Rules are evaluated in a fixed
//! priority order and the first set with a substring hit wins, so a message
//! carrying both stress and confusion words always classifies as stressed.

use serde::{Deserialize, Serialize};

/// Coarse emotional tone detected in a user message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Stressed,
    Confused,
    Ambition,
    Confident,
    #[default]
    Neutral,
}

impl EmotionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Stressed => "stressed",
            EmotionLabel::Confused => "confused",
            EmotionLabel::Ambition => "ambition",
            EmotionLabel::Confident => "confident",
            EmotionLabel::Neutral => "neutral",
        }
    }
}

const STRESS_KEYWORDS: &[&str] = &[
    "stress",
    "anxious",
    "anxiety",
    "worried",
    "overwhelmed",
    "pressure",
    "scared",
    "panic",
];

const CONFUSION_KEYWORDS: &[&str] = &[
    "confused",
    "confusing",
    "unsure",
    "not sure",
    "don't know",
    "no idea",
    "torn between",
    "lost",
];

const AMBITION_KEYWORDS: &[&str] = &[
    "ambitious",
    "ambition",
    "dream",
    "aspire",
    "top rank",
    "ivy league",
    "world class",
];

const CONFIDENCE_KEYWORDS: &[&str] = &[
    "confident",
    "confidence",
    "certain",
    "ready to",
    "decided",
    "made up my mind",
];

/// Priority-ordered rules. Stress outranks confusion, confusion outranks
/// ambition, ambition outranks confidence. Neutral is the fallback.
const EMOTION_RULES: &[(EmotionLabel, &[&str])] = &[
    (EmotionLabel::Stressed, STRESS_KEYWORDS),
    (EmotionLabel::Confused, CONFUSION_KEYWORDS),
    (EmotionLabel::Ambition, AMBITION_KEYWORDS),
    (EmotionLabel::Confident, CONFIDENCE_KEYWORDS),
];

/// Classifies the emotional tone of a message.
///
/// Total over any input, including the empty string. Matching is
/// case-insensitive substring containment, first rule wins.
pub fn classify_emotion(message: &str) -> EmotionLabel {
    let text = message.to_lowercase();
    EMOTION_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(label, _)| *label)
        .unwrap_or(EmotionLabel::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_keyword_classifies_stressed() {
        assert_eq!(
            classify_emotion("I am stressed about my exams"),
            EmotionLabel::Stressed
        );
    }

    #[test]
    fn test_stress_outranks_confusion() {
        // Contains both a stress word and a confusion word; priority order
        // must make stress win.
        assert_eq!(
            classify_emotion("I am stressed and confused about everything"),
            EmotionLabel::Stressed
        );
    }

    #[test]
    fn test_confusion_detected_without_stress() {
        assert_eq!(
            classify_emotion("I am confused about what to pick"),
            EmotionLabel::Confused
        );
    }

    #[test]
    fn test_ambition_detected() {
        assert_eq!(
            classify_emotion("I am ambitious about ivy league law schools"),
            EmotionLabel::Ambition
        );
    }

    #[test]
    fn test_confidence_detected() {
        assert_eq!(
            classify_emotion("I feel confident about my shortlist"),
            EmotionLabel::Confident
        );
    }

    #[test]
    fn test_no_keywords_falls_back_to_neutral() {
        assert_eq!(
            classify_emotion("tell me about universities"),
            EmotionLabel::Neutral
        );
    }

    #[test]
    fn test_empty_message_is_neutral() {
        assert_eq!(classify_emotion(""), EmotionLabel::Neutral);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify_emotion("SO MUCH PRESSURE"), EmotionLabel::Stressed);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let msg = "worried and not sure about my dream college";
        assert_eq!(classify_emotion(msg), classify_emotion(msg));
    }

    #[test]
    fn test_label_serializes_snake_case() {
        let json = serde_json::to_string(&EmotionLabel::Stressed).unwrap();
        assert_eq!(json, "\"stressed\"");
    }
}
