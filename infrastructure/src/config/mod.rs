//! Configuration file loading for civic-helpdesk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HELPDESK_*` environment variables (`HELPDESK_RESPONDER__TIMEOUT_SECS=30`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./helpdesk.toml` or `./.helpdesk.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/civic-helpdesk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_ENDPOINT, FileConfig, FileOutputConfig, FileResponderConfig,
    FileStorageConfig,
};
pub use loader::ConfigLoader;
