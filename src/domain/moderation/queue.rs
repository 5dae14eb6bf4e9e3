use super::flag::{AdminLog, ModerationFlag};
use crate::domain::errors::DomainError;

/// Alerting channel that feeds the admin review screens.
#[cfg_attr(test, mockall::automock)]
pub trait ModerationQueue: Send + Sync {
    fn push_flag(&self, flag: ModerationFlag) -> Result<(), DomainError>;
    fn record_action(&self, log: AdminLog) -> Result<(), DomainError>;
}
