use super::dto::{SubmissionOutcome, SubmitQuestionRequest};
use crate::domain::errors::DomainError;
use crate::domain::moderation::{ModerationFlag, ModerationQueue, ModerationType};
use crate::domain::question::{Question, QuestionRepository};
use crate::infrastructure::moderation::ModerationEngine;
use tracing::{info, instrument};

pub struct SubmitQuestionUseCase {
    repository: Box<dyn QuestionRepository>,
    queue: Box<dyn ModerationQueue>,
    engine: ModerationEngine,
}

impl SubmitQuestionUseCase {
    pub fn new(
        repository: Box<dyn QuestionRepository>,
        queue: Box<dyn ModerationQueue>,
        engine: ModerationEngine,
    ) -> Self {
        Self {
            repository,
            queue,
            engine,
        }
    }

    /// Moderates a new question and stores it when allowed.
    ///
    /// A credit is only spent once the question is stored; rejected
    /// submissions keep the creator's balance untouched.
    #[instrument(skip(self, request), fields(creator_id = %request.creator_id))]
    pub fn execute(
        &self,
        request: SubmitQuestionRequest,
    ) -> Result<SubmissionOutcome, DomainError> {
        request.check()?;
        if !request.credits.has_credit() {
            return Err(DomainError::InsufficientCredits);
        }

        let decision = self.engine.moderate(&request.text_a, &request.text_b, 0);
        if !decision.should_allow {
            info!(severity = %decision.severity, "submission rejected: {}", decision.summary());
            return Ok(SubmissionOutcome::Rejected { decision });
        }

        let remaining_credits = request.credits.spend()?;
        let question = Question::new(
            request.creator_id,
            request.text_a,
            request.text_b,
            request.price,
            request.is_paid,
        );
        let question = self.repository.create(&question)?;

        let flag = if decision.should_flag {
            let flag = ModerationFlag::from_decision(question.id, ModerationType::Auto, &decision);
            self.queue.push_flag(flag.clone())?;
            info!(question_id = %question.id, "published with review flag");
            Some(flag)
        } else {
            None
        };

        Ok(SubmissionOutcome::Published {
            question,
            decision,
            flag,
            remaining_credits,
        })
    }
}
