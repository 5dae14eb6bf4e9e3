use super::entity::Vote;
use crate::domain::errors::DomainError;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait VoteRepository: Send + Sync {
    fn find_by_question(&self, question_id: Uuid) -> Result<Vec<Vote>, DomainError>;
    fn save_accuracy(&self, vote_id: Uuid, accuracy: u8) -> Result<(), DomainError>;
}
