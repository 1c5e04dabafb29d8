//! Builds the answer resolver from `[responder]` configuration

use super::huggingface::HuggingFaceResponder;
use super::settings::ResponderSettings;
use crate::config::FileResponderConfig;
use helpdesk_application::{ResolveAnswerUseCase, ResponderMode};
use std::sync::Arc;
use tracing::{info, warn};

/// Resolver for the given configuration.
///
/// Falls back to knowledge-base-only answers when `offline` is set, when no
/// token is available, or when the responder cannot be created.
pub fn resolver_from_config(config: &FileResponderConfig, offline: bool) -> ResolveAnswerUseCase {
    if offline {
        info!("Offline mode; answers come from the knowledge base");
        return ResolveAnswerUseCase::offline();
    }

    let mode = ResponderMode::from_token(config.resolve_token());
    if !mode.is_configured() {
        info!(
            "No API token found in ${}; answers come from the knowledge base",
            config.api_key_env
        );
        return ResolveAnswerUseCase::offline();
    }

    match HuggingFaceResponder::new(ResponderSettings::from(config)) {
        Ok(responder) => ResolveAnswerUseCase::new(Arc::new(responder), mode),
        Err(e) => {
            warn!("Responder unavailable ({}); answers come from the knowledge base", e);
            ResolveAnswerUseCase::offline()
        }
    }
}
