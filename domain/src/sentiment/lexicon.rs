//! Lexicon-based polarity estimator.

use super::PolarityEstimator;
use crate::core::error::DomainError;
use std::collections::HashMap;

/// Negations flip the next scored word and dampen it
const NEGATION_FACTOR: f64 = -0.5;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "cannot", "nothing", "neither", "nor", "hardly",
];

/// (word, multiplier)
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("too", 1.3),
    ("super", 1.3),
    ("quite", 1.1),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.4),
    ("completely", 1.4),
    ("somewhat", 0.7),
    ("slightly", 0.6),
];

/// (word, polarity)
const LEXICON: &[(&str, f64)] = &[
    // favourable
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("clear", 0.1),
    ("easy", 0.43),
    ("fast", 0.2),
    ("quick", 0.33),
    ("accurate", 0.4),
    ("thorough", 0.3),
    ("friendly", 0.38),
    ("happy", 0.8),
    ("glad", 0.5),
    ("pleased", 0.5),
    ("satisfied", 0.5),
    ("love", 0.5),
    ("like", 0.2),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("appreciate", 0.4),
    ("informative", 0.5),
    ("detailed", 0.4),
    ("relevant", 0.4),
    ("correct", 0.3),
    ("simple", 0.1),
    ("brilliant", 0.9),
    // unfavourable
    ("bad", -0.7),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("useless", -0.5),
    ("unhelpful", -0.5),
    ("wrong", -0.5),
    ("incorrect", -0.5),
    ("confusing", -0.3),
    ("confused", -0.4),
    ("unclear", -0.3),
    ("slow", -0.3),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("annoying", -0.8),
    ("frustrating", -0.4),
    ("frustrated", -0.7),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("hate", -0.8),
    ("angry", -0.5),
    ("sad", -0.5),
    ("vague", -0.3),
    ("irrelevant", -0.4),
    ("broken", -0.4),
    ("stupid", -0.8),
    ("waste", -0.2),
];

/// Polarity from a fixed word lexicon.
///
/// Each lexicon word contributes its score, scaled by intensifiers directly
/// in front of it and flipped (times [`NEGATION_FACTOR`]) by a negation in
/// front of those. The text scores the mean of all contributions; text with
/// no lexicon words scores `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconPolarity {
    words: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconPolarity {
    pub fn new() -> Self {
        Self {
            words: LEXICON.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token)
            || token.ends_with("n't")
            || matches!(
                token,
                "dont" | "didnt" | "doesnt" | "isnt" | "wasnt" | "cant" | "wont" | "couldnt"
            )
    }

    fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let tokens = lower
            .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
            .map(|t| t.trim_matches(|c: char| c == '\'' || c == '’'))
            .filter(|t| !t.is_empty())
            .map(|t| t.replace('’', "'"));

        let mut contributions = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0;

        for token in tokens {
            let token = token.as_str();
            if Self::is_negation(token) {
                negated = true;
                intensity = 1.0;
                continue;
            }
            if let Some(multiplier) = self.intensifiers.get(token) {
                intensity *= multiplier;
                continue;
            }
            if let Some(polarity) = self.words.get(token) {
                let mut value = polarity * intensity;
                if negated {
                    value *= NEGATION_FACTOR;
                }
                contributions.push(value.clamp(-1.0, 1.0));
            }
            negated = false;
            intensity = 1.0;
        }

        if contributions.is_empty() {
            return 0.0;
        }
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl Default for LexiconPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityEstimator for LexiconPolarity {
    fn polarity(&self, text: &str) -> Result<f64, DomainError> {
        let score = self.score(text);
        if score.is_finite() {
            Ok(score)
        } else {
            Err(DomainError::SentimentEstimation(format!(
                "non-finite polarity for {} bytes of text",
                text.len()
            )))
        }
    }
}
