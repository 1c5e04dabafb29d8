//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod output;
mod responder;
mod storage;

pub use output::FileOutputConfig;
pub use responder::{DEFAULT_ENDPOINT, FileResponderConfig};
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// External text-generation service
    pub responder: FileResponderConfig,
    /// Record storage
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// A problem found in the configuration. Issues are reported, not fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.responder.endpoint.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "responder.endpoint",
                message: "endpoint is empty; answers will come from the knowledge base".to_string(),
            });
        }
        if self.responder.timeout_secs == 0 {
            issues.push(ConfigIssue {
                field: "responder.timeout_secs",
                message: "timeout of 0 seconds; every request will time out".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.responder.temperature) {
            issues.push(ConfigIssue {
                field: "responder.temperature",
                message: format!(
                    "temperature {} is outside 0.0..=2.0",
                    self.responder.temperature
                ),
            });
        }
        if self.responder.api_key_env.trim().is_empty() && self.responder.api_key.is_none() {
            issues.push(ConfigIssue {
                field: "responder.api_key_env",
                message: "no token source configured; answers come from the knowledge base only"
                    .to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[responder]
endpoint = "https://example.test/models/tiny"
api_key_env = "MY_TOKEN"
timeout_secs = 5
max_length = 120
temperature = 0.2
do_sample = false

[storage]
path = "/var/lib/helpdesk/records.jsonl"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.responder.endpoint, "https://example.test/models/tiny");
        assert_eq!(config.responder.api_key_env, "MY_TOKEN");
        assert_eq!(config.responder.timeout_secs, 5);
        assert_eq!(config.responder.max_length, 120);
        assert!(!config.responder.do_sample);
        assert_eq!(
            config.storage.path.as_deref(),
            Some("/var/lib/helpdesk/records.jsonl")
        );
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[responder]
timeout_secs = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.responder.timeout_secs, 30);
        // Defaults should apply
        assert_eq!(config.responder.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.responder.max_length, 200);
        assert_eq!(config.responder.temperature, 0.7);
        assert!(config.responder.do_sample);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let mut config = FileConfig::default();
        config.responder.endpoint = String::new();
        config.responder.timeout_secs = 0;
        config.responder.temperature = 3.5;

        let fields: Vec<_> = config.validate().iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "responder.endpoint",
                "responder.timeout_secs",
                "responder.temperature"
            ]
        );
    }

    #[test]
    fn test_direct_api_key_takes_precedence() {
        let mut config = FileResponderConfig::default();
        config.api_key = Some("hf_direct".to_string());
        config.api_key_env = "CIVIC_HELPDESK_TEST_UNSET_VARIABLE".to_string();
        assert_eq!(config.resolve_token().as_deref(), Some("hf_direct"));

        config.api_key = None;
        assert_eq!(config.resolve_token(), None);
    }
}
