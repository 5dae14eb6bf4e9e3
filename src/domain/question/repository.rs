use super::entity::{Question, QuestionStatus};
use crate::domain::errors::DomainError;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait QuestionRepository: Send + Sync {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, DomainError>;
    fn create(&self, question: &Question) -> Result<Question, DomainError>;
    fn update_status(&self, id: Uuid, status: QuestionStatus) -> Result<(), DomainError>;
    /// Atomically adds one flag and returns the new count.
    fn increment_flag_count(&self, id: Uuid) -> Result<u32, DomainError>;
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
