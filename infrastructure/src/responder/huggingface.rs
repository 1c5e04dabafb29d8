//! HTTP adapter for the hosted inference endpoint.

use super::error::ResponderError;
use super::settings::{GenerationParameters, ResponderSettings};
use async_trait::async_trait;
use helpdesk_application::{Credential, GenerationOutcome, TextGenerator};
use helpdesk_domain::{PromptTemplate, accept_generated, preview};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

const HTTP_OK: u16 = 200;
const HTTP_MODEL_LOADING: u16 = 503;

#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Deserialize)]
struct GeneratedItem {
    #[serde(default)]
    generated_text: String,
}

/// Text generator backed by a Hugging Face style inference endpoint.
///
/// One POST per question, no retries. The client carries the configured
/// timeout, so a slow endpoint costs at most that long before the caller
/// falls back.
pub struct HuggingFaceResponder {
    client: reqwest::Client,
    settings: ResponderSettings,
}

impl HuggingFaceResponder {
    pub fn new(settings: ResponderSettings) -> Result<Self, ResponderError> {
        reqwest::Url::parse(&settings.endpoint)
            .map_err(|e| ResponderError::InvalidEndpoint(format!("{}: {}", settings.endpoint, e)))?;

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("civic-helpdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, settings })
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceResponder {
    async fn generate(&self, question: &str, credential: &Credential) -> GenerationOutcome {
        let prompt = PromptTemplate::government_services(question);
        let request = GenerationRequest {
            inputs: &prompt,
            parameters: self.settings.parameters,
        };

        debug!("POST {} ({} byte prompt)", self.settings.endpoint, prompt.len());

        let response = match self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                error!("Error calling text-generation service: {}", e);
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    format!("transport error: {}", e)
                };
                return GenerationOutcome::TransientUpstreamFailure { reason };
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                error!("Error reading text-generation response: {}", e);
                return GenerationOutcome::TransientUpstreamFailure {
                    reason: format!("failed to read body: {}", e),
                };
            }
        };

        interpret_response(status, &body, &prompt)
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

/// Map a status code and body to a [`GenerationOutcome`].
///
/// `prompt` is the exact text that was sent, used to strip echoes.
pub fn interpret_response(status: u16, body: &str, prompt: &str) -> GenerationOutcome {
    match status {
        HTTP_OK => {
            // Only the first element matters; the rest of the array is not inspected
            let items: Vec<serde_json::Value> = match serde_json::from_str(body) {
                Ok(items) => items,
                Err(e) => {
                    error!("Error parsing text-generation response: {}", e);
                    return GenerationOutcome::MalformedResponse {
                        reason: format!("unexpected response shape: {}", e),
                    };
                }
            };
            let Some(first) = items.into_iter().next() else {
                return GenerationOutcome::MalformedResponse {
                    reason: "empty result list".to_string(),
                };
            };
            let first: GeneratedItem = match serde_json::from_value(first) {
                Ok(item) => item,
                Err(e) => {
                    error!("Error parsing first generated item: {}", e);
                    return GenerationOutcome::MalformedResponse {
                        reason: format!("unexpected item shape: {}", e),
                    };
                }
            };
            match accept_generated(&first.generated_text, prompt) {
                Some(text) => GenerationOutcome::Accepted(text),
                None => GenerationOutcome::MalformedResponse {
                    reason: "generated text too short".to_string(),
                },
            }
        }
        HTTP_MODEL_LOADING => {
            info!("Text-generation model is loading, using fallback response");
            GenerationOutcome::TransientUpstreamFailure {
                reason: "model loading (503)".to_string(),
            }
        }
        other => {
            warn!(
                "Text-generation service returned status {}: {}",
                other,
                preview(body, 200)
            );
            GenerationOutcome::UnexpectedStatus { status: other }
        }
    }
}
