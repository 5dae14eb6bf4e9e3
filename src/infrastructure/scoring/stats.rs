use crate::domain::vote::Vote;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Display band for an accuracy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AccuracyTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl AccuracyTier {
    pub fn from_accuracy(accuracy: u8) -> Self {
        match accuracy {
            90.. => Self::Excellent,
            70..=89 => Self::Good,
            50..=69 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

/// A user's prediction record across scored votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionStats {
    pub user_id: Uuid,
    pub total_predictions: u32,
    pub average_accuracy: u8,
    pub best_accuracy: u8,
    pub worst_accuracy: u8,
}

impl PredictionStats {
    /// Aggregates the user's scored votes; unscored votes are ignored.
    pub fn from_votes(user_id: Uuid, votes: &[Vote]) -> Self {
        let scores: Vec<u8> = votes
            .iter()
            .filter(|v| v.user_id == user_id)
            .filter_map(|v| v.accuracy_score)
            .collect();

        if scores.is_empty() {
            return Self {
                user_id,
                total_predictions: 0,
                average_accuracy: 0,
                best_accuracy: 0,
                worst_accuracy: 0,
            };
        }

        let sum: u32 = scores.iter().map(|s| u32::from(*s)).sum();
        let average = (sum as f64 / scores.len() as f64).round() as u8;

        Self {
            user_id,
            total_predictions: scores.len() as u32,
            average_accuracy: average,
            best_accuracy: scores.iter().copied().max().unwrap_or(0),
            worst_accuracy: scores.iter().copied().min().unwrap_or(0),
        }
    }

    pub fn tier(&self) -> AccuracyTier {
        AccuracyTier::from_accuracy(self.average_accuracy)
    }
}
