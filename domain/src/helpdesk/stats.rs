//! Dashboard aggregates

use super::entities::{ChatRecord, FeedbackRecord};
use crate::sentiment::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Feedback counts per sentiment label; every label is always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl FeedbackStats {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl<'a> FromIterator<&'a FeedbackRecord> for FeedbackStats {
    fn from_iter<I: IntoIterator<Item = &'a FeedbackRecord>>(iter: I) -> Self {
        let mut stats = FeedbackStats::default();
        for feedback in iter {
            stats.record(feedback.sentiment);
        }
        stats
    }
}

/// A feedback entry shown next to the exchange it rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFeedback {
    pub feedback: FeedbackRecord,
    pub chat: ChatRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default_has_all_labels_zeroed() {
        let stats = FeedbackStats::default();
        for label in SentimentLabel::ALL {
            assert_eq!(stats.count(label), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = FeedbackStats::default();
        stats.record(SentimentLabel::Positive);
        stats.record(SentimentLabel::Positive);
        stats.record(SentimentLabel::Negative);
        assert_eq!(stats.positive, 2);
        assert_eq!(stats.negative, 1);
        assert_eq!(stats.neutral, 0);
        assert_eq!(stats.total(), 3);
    }
}
