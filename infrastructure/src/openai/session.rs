//! Single-exchange session over the Responses API

use super::error::OpenAiError;
use super::protocol::{ResponsesRequest, ResponsesResponse};
use async_trait::async_trait;
use pasalacabra_application::{GatewayError, LlmSession};
use pasalacabra_domain::Model;
use reqwest::Client;
use tracing::debug;

/// A session bound to one model and an optional system prompt.
///
/// Each `send` is an independent request; no server-side conversation
/// state is kept.
pub struct OpenAiSession {
    client: Client,
    endpoint: String,
    api_key: String,
    model: Model,
    instructions: Option<String>,
}

impl OpenAiSession {
    pub(crate) fn new(
        client: Client,
        endpoint: String,
        api_key: String,
        model: Model,
        instructions: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
            instructions,
        }
    }

    async fn request(&self, content: &str) -> Result<String, OpenAiError> {
        let body = ResponsesRequest {
            model: self.model.as_str(),
            input: content,
            instructions: self.instructions.as_deref(),
        };

        debug!("POST {} (model {})", self.endpoint, self.model);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ResponsesResponse = serde_json::from_str(&text)?;
        Ok(parsed.text())
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        Ok(self.request(content).await?)
    }
}
