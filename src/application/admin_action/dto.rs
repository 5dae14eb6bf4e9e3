use crate::domain::moderation::AdminAction;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// Logged when an admin acts without giving a reason.
pub const NO_REASON: &str = "No reason provided";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct AdminActionRequest {
    #[validate(length(min = 1, max = 100))]
    pub admin_id: String,
    pub question_id: Uuid,
    pub action: AdminAction,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

impl AdminActionRequest {
    pub fn reason_or_default(&self) -> String {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .unwrap_or(NO_REASON)
            .to_string()
    }
}
