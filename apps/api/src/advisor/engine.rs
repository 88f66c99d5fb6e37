//! Advisory engine: runs the three classifiers and the university selector,
//! then assembles the canned reply, reasoning trail, and stage advice into a
//! single response record.
//!
//! Everything here is a pure function of the message text. Identical input
//! always yields an identical response, so concurrent handler invocations
//! need no coordination.

use serde::Serialize;
use tracing::debug;

use crate::advisor::emotion::{classify_emotion, EmotionLabel};
use crate::advisor::interest::{classify_interest, CareerLabel};
use crate::advisor::stage::{classify_stage, next_stage, StageLabel};
use crate::advisor::universities::{recommend, UniversityRecord};

/// Full advisory result returned to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryResponse {
    pub reply: String,
    pub emotion: EmotionLabel,
    pub career_interest: CareerLabel,
    pub current_stage: StageLabel,
    pub next_stage: StageLabel,
    pub reasoning: Vec<String>,
    pub universities: Vec<UniversityRecord>,
}

/// Stateless advisory service. Held in `AppState` behind an `Arc` and shared
/// across all requests.
#[derive(Debug, Default)]
pub struct AdvisoryEngine;

impl AdvisoryEngine {
    pub fn new() -> Self {
        AdvisoryEngine
    }

    /// Classifies a message and assembles the advisory response.
    ///
    /// The language tag is accepted for wire compatibility but never
    /// consulted; replies are English-only canned text.
    pub fn advise(&self, message: &str, language: &str) -> AdvisoryResponse {
        debug!(%language, "running advisory classification");

        let emotion = classify_emotion(message);
        let career_interest = classify_interest(message);
        let current_stage = classify_stage(message);
        let next = next_stage(current_stage);
        let universities = recommend(career_interest, emotion);

        let reasoning = vec![
            format!("Detected emotional tone '{}' from message keywords.", emotion.as_str()),
            format!("Detected career interest '{}' from message keywords.", career_interest.as_str()),
            format!(
                "Conversation is at the '{}' stage; steering toward '{}'.",
                current_stage.as_str(),
                next.as_str()
            ),
        ];

        let reply = format!(
            "{} {} {}",
            emotion_opener(emotion),
            interest_guidance(career_interest),
            stage_nudge(current_stage)
        );

        AdvisoryResponse {
            reply,
            emotion,
            career_interest,
            current_stage,
            next_stage: next,
            reasoning,
            universities,
        }
    }
}

fn emotion_opener(emotion: EmotionLabel) -> &'static str {
    match emotion {
        EmotionLabel::Stressed => {
            "Take a breath. Admissions pressure is normal, and we can work through it one step at a time."
        }
        EmotionLabel::Confused => {
            "Feeling unsure at this point is completely fine. Let's narrow things down together."
        }
        EmotionLabel::Ambition => {
            "Great energy. Aiming high gives us a clear target to plan around."
        }
        EmotionLabel::Confident => {
            "You sound ready. Let's make sure the plan matches that confidence."
        }
        EmotionLabel::Neutral => "Thanks for sharing. Let's look at where you stand.",
    }
}

fn interest_guidance(interest: CareerLabel) -> &'static str {
    match interest {
        CareerLabel::Engineering => {
            "Engineering programs reward strong math and visible project work, so keep both in focus."
        }
        CareerLabel::Medical => {
            "Medical paths are long but structured; grades in biology and chemistry carry the most weight."
        }
        CareerLabel::Management => {
            "Business and management schools look for initiative, so highlight anything you have organised or led."
        }
        CareerLabel::Political => {
            "Political science and public policy value writing and debate; essays will matter as much as grades."
        }
        CareerLabel::Arts => {
            "Art and design schools admit on portfolio first, so start assembling your best work now."
        }
        CareerLabel::Music => {
            "Music programs audition; consistent practice and a recorded repertoire matter more than test scores."
        }
        CareerLabel::Dance => {
            "Dance conservatoires select by audition, so training footage and stage experience are your strongest assets."
        }
        CareerLabel::Law => {
            "Law schools weigh reading, writing, and argumentation; debate and essay work build a strong case."
        }
        CareerLabel::General => {
            "Tell me more about the subjects you enjoy so we can shortlist a field together."
        }
    }
}

fn stage_nudge(stage: StageLabel) -> &'static str {
    match stage {
        StageLabel::Discovery => "Your next step is locking in a shortlist of programs.",
        StageLabel::Locking => "Once your choice is locked, we move straight on to applications.",
        StageLabel::Application => "Focus now on documents and deadlines.",
    }
}
