//! Sentiment of user feedback.
//!
//! A [`PolarityEstimator`] scores text on a continuous `[-1.0, 1.0]` scale and
//! [`SentimentLabel::from_polarity`] buckets the score into three labels.

mod lexicon;

pub use lexicon::LexiconPolarity;

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Scores above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Three-way sentiment label stored with feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels, in dashboard display order
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Bucket a polarity score. Both thresholds are exclusive.
    pub fn from_polarity(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    /// Capitalized form for user-facing messages
    pub fn title(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            other => Err(format!("unknown sentiment label: {other}")),
        }
    }
}

/// Estimates the polarity of a piece of text.
pub trait PolarityEstimator: Send + Sync {
    /// Score in `[-1.0, 1.0]`; negative is unfavourable.
    fn polarity(&self, text: &str) -> Result<f64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_polarity_buckets() {
        assert_eq!(SentimentLabel::from_polarity(0.5), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.5), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_parse_and_title() {
        assert_eq!(
            "Negative".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Negative
        );
        assert!("meh".parse::<SentimentLabel>().is_err());
        assert_eq!(SentimentLabel::Positive.title(), "Positive");
    }
}
