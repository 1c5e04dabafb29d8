//! External responder configuration from TOML (`[responder]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/ibm-granite/granite-3.3-8b-instruct";

/// Hosted text-generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResponderConfig {
    /// Model endpoint URL
    pub endpoint: String,
    /// Environment variable name for the API token (default: "HF_API_KEY").
    pub api_key_env: String,
    /// Direct API token (prefer the env var).
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum generated length
    pub max_length: u32,
    /// Sampling temperature
    pub temperature: f64,
    /// Enable sampling
    pub do_sample: bool,
}

impl Default for FileResponderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: "HF_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 15,
            max_length: 200,
            temperature: 0.7,
            do_sample: true,
        }
    }
}

impl FileResponderConfig {
    /// The API token: `api_key` if set, otherwise the `api_key_env` variable.
    pub fn resolve_token(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
    }
}
