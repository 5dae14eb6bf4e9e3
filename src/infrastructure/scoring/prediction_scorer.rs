use crate::domain::question::{Question, percentage_a};
use crate::domain::vote::Vote;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

const PERFECT_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionScore {
    pub accuracy: u8,
    pub actual_percentage_a: u32,
    pub difference: u32,
}

/// Scores a predicted share of option A against the realised tally.
///
/// Accuracy decays linearly with the distance from the real percentage and
/// bottoms out at zero. With no votes the real percentage is taken as 50.
pub fn score_prediction(predicted_a: u8, votes_a: u32, total_votes: u32) -> PredictionScore {
    let actual_percentage_a = percentage_a(votes_a, total_votes);
    let difference = actual_percentage_a.abs_diff(u32::from(predicted_a));
    let accuracy = PERFECT_SCORE.saturating_sub(difference) as u8;

    PredictionScore {
        accuracy,
        actual_percentage_a,
        difference,
    }
}

pub fn score_vote(vote: &Vote, question: &Question) -> PredictionScore {
    score_prediction(vote.predicted_a, question.votes_a, question.total_votes)
}
