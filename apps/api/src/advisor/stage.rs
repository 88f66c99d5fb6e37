//! Conversation-stage classifier for the advising funnel:
//! discovery, locking in a choice, application.
//!
//! Matching is bare substring containment on purpose. "lock" also matches
//! words like "locksmith" or "blockage"; that imprecision is part of the
//! compatibility contract and must not be refined silently.

use serde::{Deserialize, Serialize};

/// Point in the advising funnel a message belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageLabel {
    #[default]
    Discovery,
    Locking,
    Application,
}

impl StageLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageLabel::Discovery => "discovery",
            StageLabel::Locking => "locking",
            StageLabel::Application => "application",
        }
    }
}

/// Classifies the conversation stage of a message.
///
/// "lock" is checked before "application"/"documents", so a message carrying
/// both classifies as Locking.
pub fn classify_stage(message: &str) -> StageLabel {
    let text = message.to_lowercase();
    if text.contains("lock") {
        StageLabel::Locking
    } else if text.contains("application") || text.contains("documents") {
        StageLabel::Application
    } else {
        StageLabel::Discovery
    }
}

/// Derives the stage to steer the conversation toward next.
///
/// Discovery advances to Locking; Locking and Application both map to
/// Application. The funnel has a single forward edge out of Discovery and
/// collapses after it.
pub fn next_stage(current: StageLabel) -> StageLabel {
    match current {
        StageLabel::Discovery => StageLabel::Locking,
        StageLabel::Locking | StageLabel::Application => StageLabel::Application,
    }
}
