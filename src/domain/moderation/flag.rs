use super::severity::Severity;
use super::verdict::ModerationDecision;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Actor recorded when the pipeline acts without a human.
pub const AUTO_MODERATOR: &str = "AUTO_MODERATOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ModerationType {
    Auto,
    UserReport,
    AdminReview,
}

/// Entry pushed to the admin review queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModerationFlag {
    pub question_id: Uuid,
    #[serde(rename = "type")]
    pub kind: ModerationType,
    pub severity: Severity,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl ModerationFlag {
    pub fn new(
        question_id: Uuid,
        kind: ModerationType,
        severity: Severity,
        reason: String,
    ) -> Self {
        Self {
            question_id,
            kind,
            severity,
            reason,
            created_at: Utc::now(),
        }
    }

    pub fn from_decision(
        question_id: Uuid,
        kind: ModerationType,
        decision: &ModerationDecision,
    ) -> Self {
        Self::new(question_id, kind, decision.severity, decision.summary())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AdminAction {
    Deleted,
    Flagged,
    Paused,
}

/// Audit record of a moderation action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminLog {
    pub id: Uuid,
    pub admin_id: String,
    pub action: AdminAction,
    pub question_id: Uuid,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl AdminLog {
    pub fn new(
        admin_id: impl Into<String>,
        action: AdminAction,
        question_id: Uuid,
        reason: String,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            admin_id: admin_id.into(),
            action,
            question_id,
            reason,
            created_at: Utc::now(),
        }
    }

    pub fn automatic(action: AdminAction, question_id: Uuid, reason: String) -> Self {
        Self::new(AUTO_MODERATOR, action, question_id, reason)
    }
}
