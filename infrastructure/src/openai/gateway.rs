//! OpenAI LLM Gateway implementation

use super::error::OpenAiError;
use super::session::OpenAiSession;
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use pasalacabra_application::{GatewayError, LlmGateway, LlmSession};
use pasalacabra_domain::Model;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// LLM Gateway implementation for the OpenAI Responses API
pub struct OpenAiLlmGateway {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiLlmGateway {
    /// Build a gateway from provider config and an optional request timeout
    pub fn new(config: &FileOpenAiConfig, timeout: Option<Duration>) -> Result<Self, OpenAiError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| OpenAiError::MissingApiKey(config.api_key_env.clone()))?;
        Self::with_api_key(&config.base_url, api_key, timeout)
    }

    /// Build a gateway with an explicit key (also used by tests)
    pub fn with_api_key(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, OpenAiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let endpoint = responses_endpoint(base_url);

        info!("OpenAiLlmGateway initialized ({})", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self, model: &Model, instructions: Option<String>) -> OpenAiSession {
        OpenAiSession::new(
            self.client.clone(),
            self.endpoint.clone(),
            self.api_key.clone(),
            model.clone(),
            instructions,
        )
    }
}

fn responses_endpoint(base_url: &str) -> String {
    format!("{}/v1/responses", base_url.trim_end_matches('/'))
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(self.session(model, None)))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(
            self.session(model, Some(system_prompt.to_string())),
        ))
    }
}
