use super::dto::AdminActionRequest;
use crate::domain::errors::DomainError;
use crate::domain::moderation::{
    AdminAction, AdminLog, ModerationFlag, ModerationQueue, ModerationType, Severity,
};
use crate::domain::question::QuestionRepository;
use tracing::{info, instrument};
use validator::Validate;

pub struct AdminActionUseCase {
    repository: Box<dyn QuestionRepository>,
    queue: Box<dyn ModerationQueue>,
}

impl AdminActionUseCase {
    pub fn new(repository: Box<dyn QuestionRepository>, queue: Box<dyn ModerationQueue>) -> Self {
        Self { repository, queue }
    }

    /// Applies a manual moderation action and writes it to the audit log.
    #[instrument(
        skip(self, request),
        fields(question_id = %request.question_id, action = ?request.action)
    )]
    pub fn execute(&self, request: AdminActionRequest) -> Result<AdminLog, DomainError> {
        request.validate()?;
        let mut question = self
            .repository
            .find_by_id(request.question_id)?
            .ok_or_else(|| DomainError::NotFound(format!("question {}", request.question_id)))?;
        let reason = request.reason_or_default();

        match request.action {
            AdminAction::Deleted => self.repository.delete(question.id)?,
            AdminAction::Paused => {
                question.pause()?;
                self.repository.update_status(question.id, question.status)?;
            }
            AdminAction::Flagged => self.queue.push_flag(ModerationFlag::new(
                question.id,
                ModerationType::AdminReview,
                Severity::Medium,
                reason.clone(),
            ))?,
        }

        let log = AdminLog::new(request.admin_id, request.action, question.id, reason);
        self.queue.record_action(log.clone())?;
        info!(admin_id = %log.admin_id, "admin action recorded");
        Ok(log)
    }
}
