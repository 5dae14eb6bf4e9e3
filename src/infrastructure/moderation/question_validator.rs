use super::similarity::compute_similarity;
use crate::config::ModerationThresholds;
use crate::domain::moderation::QuestionValidation;
use tracing::{instrument, warn};

/// Options scoring above this are near-duplicates.
pub const SIMILARITY_LIMIT: f64 = 0.9;

/// Structural checks on a two-option question.
#[derive(Debug, Clone)]
pub struct QuestionValidator {
    min_length: usize,
    max_length: usize,
}

impl QuestionValidator {
    pub fn new(thresholds: &ModerationThresholds) -> Self {
        Self {
            min_length: thresholds.min_length,
            max_length: thresholds.max_length,
        }
    }

    /// Runs every check and reports all violations together, in a fixed order.
    #[instrument(level = "debug", skip(self, text_a, text_b))]
    pub fn validate(&self, text_a: &str, text_b: &str) -> QuestionValidation {
        let mut errors = Vec::new();
        let len_a = text_a.chars().count();
        let len_b = text_b.chars().count();

        if len_a < self.min_length {
            errors.push(format!("Option A too short (min {} chars)", self.min_length));
        }
        if len_b < self.min_length {
            errors.push(format!("Option B too short (min {} chars)", self.min_length));
        }
        if len_a > self.max_length {
            errors.push(format!("Option A too long (max {} chars)", self.max_length));
        }
        if len_b > self.max_length {
            errors.push(format!("Option B too long (max {} chars)", self.max_length));
        }

        if text_a.to_lowercase() == text_b.to_lowercase() {
            errors.push("Options A and B must be different".to_string());
        }

        if compute_similarity(text_a, text_b) > SIMILARITY_LIMIT {
            errors.push("Options A and B are too similar".to_string());
        }

        let validation = QuestionValidation::from_errors(errors);
        if !validation.is_valid {
            warn!("Question validation failed: {:?}", validation.errors);
        }
        validation
    }
}
