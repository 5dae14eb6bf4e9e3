use crate::domain::creator::Credits;
use crate::domain::errors::DomainError;
use crate::domain::moderation::{ModerationDecision, ModerationFlag};
use crate::domain::question::Question;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct SubmitQuestionRequest {
    pub creator_id: Uuid,
    pub text_a: String,
    pub text_b: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub is_paid: bool,
    pub credits: Credits,
}

impl SubmitQuestionRequest {
    /// Derived field checks, plus a finiteness check since `range` lets NaN
    /// and infinity through.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        if !self.price.is_finite() {
            return Err(DomainError::InvalidArgument(format!(
                "price must be a finite amount, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

/// Raw moderation input as it arrives from outside the crate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ModerateQuestionRequest {
    pub text_a: String,
    pub text_b: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    #[ts(type = "number")]
    pub flagged_count: i64,
}

impl ModerateQuestionRequest {
    /// Validated flag count.
    pub fn checked_flagged_count(&self) -> Result<u32, DomainError> {
        self.validate()?;
        u32::try_from(self.flagged_count).map_err(|_| {
            DomainError::InvalidArgument(format!(
                "flagged_count out of range: {}",
                self.flagged_count
            ))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Published {
        question: Question,
        decision: ModerationDecision,
        flag: Option<ModerationFlag>,
        remaining_credits: Credits,
    },
    Rejected {
        decision: ModerationDecision,
    },
}

impl SubmissionOutcome {
    pub fn decision(&self) -> &ModerationDecision {
        match self {
            Self::Published { decision, .. } | Self::Rejected { decision } => decision,
        }
    }
}
