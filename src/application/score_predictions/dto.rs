use crate::domain::errors::DomainError;
use crate::infrastructure::scoring::{PredictionScore, score_prediction};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// Unchecked scoring input as received from a client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ScorePredictionRequest {
    #[validate(range(min = 0, max = 100))]
    #[ts(type = "number")]
    pub predicted_a: i64,
    #[validate(range(min = 0))]
    #[ts(type = "number")]
    pub votes_a: i64,
    #[validate(range(min = 0))]
    #[ts(type = "number")]
    pub total_votes: i64,
}

impl ScorePredictionRequest {
    /// Range-checks the request and scores it.
    pub fn score(&self) -> Result<PredictionScore, DomainError> {
        self.validate()?;
        if self.votes_a > self.total_votes {
            return Err(DomainError::InvalidArgument(format!(
                "votes_a ({}) exceeds total_votes ({})",
                self.votes_a, self.total_votes
            )));
        }
        let predicted_a = u8::try_from(self.predicted_a)
            .map_err(|_| DomainError::InvalidArgument("predicted_a out of range".into()))?;
        let votes_a = u32::try_from(self.votes_a)
            .map_err(|_| DomainError::InvalidArgument("votes_a out of range".into()))?;
        let total_votes = u32::try_from(self.total_votes)
            .map_err(|_| DomainError::InvalidArgument("total_votes out of range".into()))?;
        Ok(score_prediction(predicted_a, votes_a, total_votes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringSummary {
    pub question_id: Uuid,
    pub actual_percentage_a: u32,
    pub scored: u32,
    pub already_scored: u32,
}
