use crate::config::RevenueConfig;
use crate::domain::question::Question;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatorEarnings {
    pub gross_revenue: f64,
    pub creator_earnings: f64,
    pub can_payout: bool,
}

impl CreatorEarnings {
    pub fn compute(price: f64, total_votes: u32, config: &RevenueConfig) -> Self {
        Self::from_gross(price * total_votes as f64, config)
    }

    pub fn for_questions(questions: &[Question], config: &RevenueConfig) -> Self {
        let gross = questions
            .iter()
            .map(|q| q.price * q.total_votes as f64)
            .sum();
        Self::from_gross(gross, config)
    }

    fn from_gross(gross_revenue: f64, config: &RevenueConfig) -> Self {
        let creator_earnings = gross_revenue * config.creator_share;
        Self {
            gross_revenue,
            creator_earnings,
            can_payout: creator_earnings >= config.minimum_payout,
        }
    }
}
