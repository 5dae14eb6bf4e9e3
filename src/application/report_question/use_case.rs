use super::dto::{ReportOutcome, ReportQuestionRequest};
use crate::domain::errors::DomainError;
use crate::domain::moderation::{
    AdminAction, AdminLog, ModerationFlag, ModerationQueue, ModerationType,
};
use crate::domain::question::QuestionRepository;
use crate::infrastructure::moderation::{ModerationEngine, PriorityRanker};
use tracing::{info, instrument, warn};
use validator::Validate;

pub struct ReportQuestionUseCase {
    repository: Box<dyn QuestionRepository>,
    queue: Box<dyn ModerationQueue>,
    engine: ModerationEngine,
    ranker: PriorityRanker,
}

impl ReportQuestionUseCase {
    pub fn new(
        repository: Box<dyn QuestionRepository>,
        queue: Box<dyn ModerationQueue>,
        engine: ModerationEngine,
        ranker: PriorityRanker,
    ) -> Self {
        Self {
            repository,
            queue,
            engine,
            ranker,
        }
    }

    /// Records a user report and re-moderates the question with the new count.
    ///
    /// The count is incremented by the repository so concurrent reports are
    /// never lost; the decision is always taken on the returned value.
    #[instrument(skip(self, request), fields(question_id = %request.question_id))]
    pub fn execute(&self, request: ReportQuestionRequest) -> Result<ReportOutcome, DomainError> {
        request.validate()?;
        let question = self
            .repository
            .find_by_id(request.question_id)?
            .ok_or_else(|| DomainError::NotFound(format!("question {}", request.question_id)))?;
        if question.is_closed() {
            return Err(DomainError::InvalidState(format!(
                "question {} is closed",
                question.id
            )));
        }

        let flagged_count = self.repository.increment_flag_count(question.id)?;
        let decision = self
            .engine
            .moderate(&question.text_a, &question.text_b, flagged_count);
        let priority = self.ranker.priority(flagged_count);

        if decision.should_auto_delete {
            self.repository.delete(question.id)?;
            self.queue.record_action(AdminLog::automatic(
                AdminAction::Deleted,
                question.id,
                decision.summary(),
            ))?;
            warn!(flagged_count, "question auto-deleted after report");
        } else if self.ranker.enters_review(flagged_count) {
            let flag = ModerationFlag {
                reason: request.reason,
                ..ModerationFlag::from_decision(question.id, ModerationType::UserReport, &decision)
            };
            self.queue.push_flag(flag)?;
            info!(flagged_count, %priority, "question queued for review");
        }

        Ok(ReportOutcome {
            question_id: question.id,
            flagged_count,
            priority,
            deleted: decision.should_auto_delete,
            decision,
        })
    }
}
