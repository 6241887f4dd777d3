//! Error types for the OpenAI adapter

use pasalacabra_application::GatewayError;
use thiserror::Error;

/// Errors that can occur when talking to the OpenAI API
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("No API key: set {0} or providers.openai.api_key")]
    MissingApiKey(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::MissingApiKey(_) => GatewayError::AuthenticationFailed(err.to_string()),
            OpenAiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            OpenAiError::Api { status: 401 | 403, body } => {
                GatewayError::AuthenticationFailed(body)
            }
            OpenAiError::Api { status: 404, body } => GatewayError::ModelNotAvailable(body),
            OpenAiError::Api { .. } => GatewayError::RequestFailed(err.to_string()),
            OpenAiError::InvalidResponse(e) => GatewayError::Other(e.to_string()),
        }
    }
}
