use crate::config::ModerationThresholds;
use crate::domain::moderation::PriorityLevel;
use crate::domain::question::Question;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Maps flag counts onto admin queue tiers.
#[derive(Debug, Clone)]
pub struct PriorityRanker {
    auto_flag_reports: u32,
    high_priority: u32,
}

/// Per-tier counters shown above the admin queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QueueSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityRanker {
    pub fn new(thresholds: &ModerationThresholds) -> Self {
        Self {
            auto_flag_reports: thresholds.auto_flag_reports,
            high_priority: thresholds.high_priority,
        }
    }

    pub fn priority(&self, flagged_count: u32) -> PriorityLevel {
        if flagged_count >= self.high_priority {
            PriorityLevel::High
        } else if flagged_count >= self.auto_flag_reports {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    /// Whether a question has enough reports to appear in the review queue.
    pub fn needs_review(&self, flagged_count: u32) -> bool {
        flagged_count >= self.auto_flag_reports
    }

    /// Whether this count is the one that first puts a question in the review
    /// queue. Counts come from an atomic increment, so exactly one report sees it.
    pub fn enters_review(&self, flagged_count: u32) -> bool {
        flagged_count == self.auto_flag_reports.max(1)
    }

    pub fn summarize(&self, questions: &[Question]) -> QueueSummary {
        questions
            .iter()
            .fold(QueueSummary::default(), |mut summary, question| {
                match self.priority(question.flagged_count) {
                    PriorityLevel::High => summary.high += 1,
                    PriorityLevel::Medium => summary.medium += 1,
                    PriorityLevel::Low => summary.low += 1,
                }
                summary
            })
    }

    pub fn filter<'a>(&self, questions: &'a [Question], level: PriorityLevel) -> Vec<&'a Question> {
        questions
            .iter()
            .filter(|q| self.priority(q.flagged_count) == level)
            .collect()
    }
}
