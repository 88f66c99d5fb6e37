// Advisory Classifier: emotion, career-interest, and stage classification
// plus static university recommendation. All pure string matching, no LLM.

pub mod emotion;
pub mod engine;
pub mod handlers;
pub mod interest;
pub mod stage;
pub mod universities;
