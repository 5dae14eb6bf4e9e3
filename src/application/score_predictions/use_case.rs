use super::dto::ScoringSummary;
use crate::domain::errors::DomainError;
use crate::domain::question::QuestionRepository;
use crate::domain::vote::VoteRepository;
use crate::infrastructure::scoring::score_vote;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Binds accuracy scores to the votes of a closed question.
pub struct ScorePredictionsUseCase {
    questions: Box<dyn QuestionRepository>,
    votes: Box<dyn VoteRepository>,
}

impl ScorePredictionsUseCase {
    pub fn new(questions: Box<dyn QuestionRepository>, votes: Box<dyn VoteRepository>) -> Self {
        Self { questions, votes }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, question_id: Uuid) -> Result<ScoringSummary, DomainError> {
        let question = self
            .questions
            .find_by_id(question_id)?
            .ok_or_else(|| DomainError::NotFound(format!("question {}", question_id)))?;
        if !question.is_closed() {
            return Err(DomainError::InvalidState(format!(
                "question {} must be closed before scoring",
                question_id
            )));
        }

        let mut scored = 0;
        let mut already_scored = 0;
        for mut vote in self.votes.find_by_question(question_id)? {
            if vote.is_scored() {
                already_scored += 1;
                continue;
            }
            let score = score_vote(&vote, &question);
            vote.bind_accuracy(score.accuracy)?;
            self.votes.save_accuracy(vote.id, score.accuracy)?;
            debug!(vote_id = %vote.id, accuracy = score.accuracy, "vote scored");
            scored += 1;
        }

        info!(scored, already_scored, "predictions scored");
        Ok(ScoringSummary {
            question_id,
            actual_percentage_a: question.percentage_a(),
            scored,
            already_scored,
        })
    }
}
