//! Classify Feedback use case.
//!
//! Scores feedback text with a [`PolarityEstimator`] and buckets the score.
//! Estimator failures are logged and reported as neutral.

use helpdesk_domain::{LexiconPolarity, PolarityEstimator, SentimentLabel};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct ClassifyFeedbackUseCase {
    estimator: Arc<dyn PolarityEstimator>,
}

impl ClassifyFeedbackUseCase {
    pub fn new(estimator: Arc<dyn PolarityEstimator>) -> Self {
        Self { estimator }
    }

    /// Sentiment label for `text`. Never fails.
    pub fn classify(&self, text: &str) -> SentimentLabel {
        match self.estimator.polarity(text) {
            Ok(score) => {
                let label = SentimentLabel::from_polarity(score);
                debug!("Feedback polarity {:.3} -> {}", score, label);
                label
            }
            Err(e) => {
                error!("Error analyzing sentiment: {}", e);
                SentimentLabel::Neutral
            }
        }
    }
}

impl Default for ClassifyFeedbackUseCase {
    /// Uses the bundled lexicon estimator
    fn default() -> Self {
        Self::new(Arc::new(LexiconPolarity::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_domain::DomainError;

    struct FixedPolarity(f64);

    impl PolarityEstimator for FixedPolarity {
        fn polarity(&self, _text: &str) -> Result<f64, DomainError> {
            Ok(self.0)
        }
    }

    struct FailingPolarity;

    impl PolarityEstimator for FailingPolarity {
        fn polarity(&self, _text: &str) -> Result<f64, DomainError> {
            Err(DomainError::SentimentEstimation("boom".to_string()))
        }
    }

    fn classify_with(score: f64) -> SentimentLabel {
        ClassifyFeedbackUseCase::new(Arc::new(FixedPolarity(score))).classify("any text")
    }

    #[test]
    fn test_score_thresholds() {
        assert_eq!(classify_with(0.5), SentimentLabel::Positive);
        assert_eq!(classify_with(-0.5), SentimentLabel::Negative);
        assert_eq!(classify_with(0.05), SentimentLabel::Neutral);
        assert_eq!(classify_with(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_estimator_failure_is_neutral() {
        let use_case = ClassifyFeedbackUseCase::new(Arc::new(FailingPolarity));
        assert_eq!(use_case.classify("great"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_default_uses_lexicon() {
        let use_case = ClassifyFeedbackUseCase::default();
        assert_eq!(
            use_case.classify("Excellent, very clear answer"),
            SentimentLabel::Positive
        );
        assert_eq!(use_case.classify("awful and confusing"), SentimentLabel::Negative);
    }
}
