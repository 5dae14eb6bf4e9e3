use super::severity::Severity;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

const REASON_SEPARATOR: &str = " • ";
const NO_ISSUES: &str = "No issues detected";

/// Outcome of scanning a single piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModerationResult {
    pub is_clean: bool,
    pub should_flag: bool,
    pub should_auto_delete: bool,
    pub severity: Severity,
    pub reasons: Vec<String>,
    pub matched_words: Vec<String>,
}

/// Structural check of an option pair. Errors keep the order they were found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl QuestionValidation {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// What should happen to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModerationDecision {
    pub should_allow: bool,
    pub should_flag: bool,
    pub should_auto_delete: bool,
    pub severity: Severity,
    pub reasons: Vec<String>,
}

impl ModerationDecision {
    pub fn summary(&self) -> String {
        format_reasons(&self.reasons)
    }
}

/// Joins reasons for display in the admin queue.
pub fn format_reasons(reasons: &[String]) -> String {
    if reasons.is_empty() {
        return NO_ISSUES.to_string();
    }
    reasons.join(REASON_SEPARATOR)
}
