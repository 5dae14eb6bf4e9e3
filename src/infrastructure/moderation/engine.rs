use super::question_validator::QuestionValidator;
use super::text_classifier::TextClassifier;
use crate::config::{Lexicons, ModerationThresholds, Settings};
use crate::domain::moderation::{
    ModerationDecision, ModerationResult, QuestionValidation, Severity,
};
use tracing::{info, instrument};

/// Combines structural validation, text classification and the stored flag
/// count into a single decision. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct ModerationEngine {
    classifier: TextClassifier,
    validator: QuestionValidator,
    auto_delete_threshold: u32,
}

impl ModerationEngine {
    pub fn new(lexicons: Lexicons, thresholds: &ModerationThresholds) -> Self {
        Self {
            classifier: TextClassifier::new(lexicons),
            validator: QuestionValidator::new(thresholds),
            auto_delete_threshold: thresholds.auto_delete,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.lexicons.clone(), &settings.thresholds)
    }

    pub fn classify(&self, text: &str) -> ModerationResult {
        self.classifier.classify(text)
    }

    pub fn validate(&self, text_a: &str, text_b: &str) -> QuestionValidation {
        self.validator.validate(text_a, text_b)
    }

    /// Decides what happens to a question.
    ///
    /// A malformed pair is rejected on format alone and never reaches the
    /// classifier. Once `flagged_count` reaches the auto-delete threshold the
    /// question is deleted whatever its text says.
    #[instrument(skip(self, text_a, text_b))]
    pub fn moderate(&self, text_a: &str, text_b: &str, flagged_count: u32) -> ModerationDecision {
        let validation = self.validator.validate(text_a, text_b);
        if !validation.is_valid {
            return ModerationDecision {
                should_allow: false,
                should_flag: true,
                should_auto_delete: false,
                severity: Severity::Medium,
                reasons: validation.errors,
            };
        }

        let verdict_a = self.classifier.classify(text_a);
        let verdict_b = self.classifier.classify(text_b);
        let mut decision = merge_verdicts(verdict_a, verdict_b);

        if flagged_count >= self.auto_delete_threshold {
            info!(
                flagged_count,
                threshold = self.auto_delete_threshold,
                "flag threshold exceeded, forcing delete"
            );
            decision.should_allow = false;
            decision.should_flag = true;
            decision.should_auto_delete = true;
            decision.severity = Severity::High;
            decision
                .reasons
                .push(format!("Exceeded flag threshold ({} flags)", flagged_count));
        }

        decision
    }
}

/// OR of the boolean signals and max of severity; A's reasons come first.
fn merge_verdicts(a: ModerationResult, b: ModerationResult) -> ModerationDecision {
    let should_auto_delete = a.should_auto_delete || b.should_auto_delete;
    let mut reasons = a.reasons;
    reasons.extend(b.reasons);

    ModerationDecision {
        should_allow: !should_auto_delete,
        should_flag: a.should_flag || b.should_flag,
        should_auto_delete,
        severity: a.severity.max(b.severity),
        reasons,
    }
}
