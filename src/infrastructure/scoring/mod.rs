pub mod prediction_scorer;
pub mod stats;

pub use prediction_scorer::{PredictionScore, score_prediction, score_vote};
pub use stats::{AccuracyTier, PredictionStats};
