use crate::domain::moderation::{ModerationDecision, PriorityLevel};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ReportQuestionRequest {
    pub question_id: Uuid,
    pub reporter_id: Uuid,
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportOutcome {
    pub question_id: Uuid,
    pub flagged_count: u32,
    pub priority: PriorityLevel,
    pub decision: ModerationDecision,
    pub deleted: bool,
}
