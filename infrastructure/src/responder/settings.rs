//! Runtime settings for the hosted text-generation call

use crate::config::{DEFAULT_ENDPOINT, FileResponderConfig};
use serde::Serialize;
use std::time::Duration;

/// Settings for [`HuggingFaceResponder`](super::HuggingFaceResponder)
#[derive(Debug, Clone, PartialEq)]
pub struct ResponderSettings {
    pub endpoint: String,
    pub timeout: Duration,
    pub parameters: GenerationParameters,
}

/// Generation parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f64,
    pub do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 200,
            temperature: 0.7,
            do_sample: true,
        }
    }
}

impl Default for ResponderSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(15),
            parameters: GenerationParameters::default(),
        }
    }
}

impl ResponderSettings {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&FileResponderConfig> for ResponderSettings {
    fn from(config: &FileResponderConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            parameters: GenerationParameters {
                max_length: config.max_length,
                temperature: config.temperature,
                do_sample: config.do_sample,
            },
        }
    }
}
