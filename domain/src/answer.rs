//! Answer value objects returned by the response pipeline

use serde::{Deserialize, Serialize};

/// Generated text must be strictly longer than this (in characters) to be used
pub const MIN_GENERATED_CHARS: usize = 10;

/// Where an answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    /// Generated by the hosted text-generation service
    External,
    /// Taken from the built-in knowledge base
    Fallback,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::External => "external",
            AnswerSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The answer handed back to a caller. The text is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    text: String,
    source: AnswerSource,
}

impl AnswerResult {
    /// Answer accepted from the external service.
    pub fn external(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "external answer cannot be empty");
        Self {
            text,
            source: AnswerSource::External,
        }
    }

    /// Canned answer from the knowledge base.
    pub fn fallback(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "fallback answer cannot be empty");
        Self {
            text,
            source: AnswerSource::Fallback,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> AnswerSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == AnswerSource::Fallback
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for AnswerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Clean text returned by the external service and decide whether it is usable.
///
/// The text is trimmed; if the model echoed `prompt` back, every occurrence is
/// removed and the rest trimmed again. Returns `None` unless more than
/// [`MIN_GENERATED_CHARS`] characters remain.
pub fn accept_generated(raw: &str, prompt: &str) -> Option<String> {
    let mut text = raw.trim().to_string();
    if !prompt.is_empty() && text.contains(prompt) {
        text = text.replace(prompt, "").trim().to_string();
    }
    if text.chars().count() > MIN_GENERATED_CHARS {
        Some(text)
    } else {
        None
    }
}
