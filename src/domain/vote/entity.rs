use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub const MAX_PERCENTAGE: u8 = 100;

/// One user's choice plus their guess of how many will pick option A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vote {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub chose_a: bool,
    pub predicted_a: u8,
    /// Set once the question's final tally is known.
    pub accuracy_score: Option<u8>,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(
        question_id: Uuid,
        user_id: Uuid,
        chose_a: bool,
        predicted_a: u8,
    ) -> Result<Self, DomainError> {
        if predicted_a > MAX_PERCENTAGE {
            return Err(DomainError::InvalidArgument(format!(
                "predicted_a must be within 0..=100, got {}",
                predicted_a
            )));
        }
        Ok(Self {
            id: Uuid::now_v7(),
            question_id,
            user_id,
            chose_a,
            predicted_a,
            accuracy_score: None,
            created_at: Utc::now(),
        })
    }

    pub fn is_scored(&self) -> bool {
        self.accuracy_score.is_some()
    }

    pub fn bind_accuracy(&mut self, accuracy: u8) -> Result<(), DomainError> {
        if let Some(existing) = self.accuracy_score {
            return Err(DomainError::InvalidState(format!(
                "vote {} already scored ({})",
                self.id, existing
            )));
        }
        self.accuracy_score = Some(accuracy.min(MAX_PERCENTAGE));
        Ok(())
    }
}
