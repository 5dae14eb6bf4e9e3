use crate::config::{LifecycleRules, VisibilityRules};
use crate::domain::errors::DomainError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Share of option A reported when nobody has voted yet.
pub const NO_DATA_PERCENTAGE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum QuestionStatus {
    Active,
    Paused,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    pub text_a: String,
    pub text_b: String,
    pub creator_id: Uuid,
    pub price: f64,
    pub status: QuestionStatus,
    pub is_paid: bool,
    pub flagged_count: u32,
    pub votes_a: u32,
    pub votes_b: u32,
    pub total_votes: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    pub fn new(
        creator_id: Uuid,
        text_a: String,
        text_b: String,
        price: f64,
        is_paid: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            text_a,
            text_b,
            creator_id,
            price,
            status: QuestionStatus::Active,
            is_paid,
            flagged_count: 0,
            votes_a: 0,
            votes_b: 0,
            total_votes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds one vote to the tally. Only active questions take votes.
    pub fn record_vote(&mut self, chose_a: bool) -> Result<(), DomainError> {
        if self.status != QuestionStatus::Active {
            return Err(DomainError::InvalidState(format!(
                "question {} is not accepting votes",
                self.id
            )));
        }
        if chose_a {
            self.votes_a += 1;
        } else {
            self.votes_b += 1;
        }
        self.total_votes = self.votes_a + self.votes_b;
        self.touch();
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), DomainError> {
        match self.status {
            QuestionStatus::Active => {
                self.status = QuestionStatus::Paused;
                self.touch();
                Ok(())
            }
            other => Err(self.transition_error(other, QuestionStatus::Paused)),
        }
    }

    pub fn resume(&mut self) -> Result<(), DomainError> {
        match self.status {
            QuestionStatus::Paused => {
                self.status = QuestionStatus::Active;
                self.touch();
                Ok(())
            }
            other => Err(self.transition_error(other, QuestionStatus::Active)),
        }
    }

    /// Closing is terminal.
    pub fn close(&mut self) -> Result<(), DomainError> {
        if self.status == QuestionStatus::Closed {
            return Err(self.transition_error(QuestionStatus::Closed, QuestionStatus::Closed));
        }
        self.status = QuestionStatus::Closed;
        self.touch();
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.status == QuestionStatus::Closed
    }

    pub fn percentage_a(&self) -> u32 {
        percentage_a(self.votes_a, self.total_votes)
    }

    /// Voters only see percentages once enough votes are in.
    pub fn results_visible(&self, rules: &VisibilityRules) -> bool {
        self.total_votes >= rules.min_votes_before_showing_stats
    }

    pub fn should_auto_close(&self, rules: &LifecycleRules, now: DateTime<Utc>) -> bool {
        if self.status != QuestionStatus::Active {
            return false;
        }
        self.total_votes >= rules.min_votes_to_close
            || now - self.created_at >= Duration::days(rules.max_days_active)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn transition_error(&self, from: QuestionStatus, to: QuestionStatus) -> DomainError {
        DomainError::InvalidState(format!(
            "question {} cannot move from {:?} to {:?}",
            self.id, from, to
        ))
    }
}

/// Rounded share of votes for option A, or 50 with no votes.
pub fn percentage_a(votes_a: u32, total_votes: u32) -> u32 {
    if total_votes == 0 {
        return NO_DATA_PERCENTAGE;
    }
    ((votes_a as f64 / total_votes as f64) * 100.0).round() as u32
}
