pub mod engine;
pub mod priority;
pub mod question_validator;
pub mod similarity;
pub mod text_classifier;

pub use engine::ModerationEngine;
pub use priority::{PriorityRanker, QueueSummary};
pub use question_validator::QuestionValidator;
pub use similarity::compute_similarity;
pub use text_classifier::TextClassifier;
