//! Generator and fixer capabilities.
//!
//! Both collaborators sit on the far side of the trust boundary: whatever
//! they return is raw JSON that the repair loop validates again before use.

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use pasalacabra_domain::{FixerVerdict, GameContext, ResponseParseError};
use serde_json::Value;
use thiserror::Error;

/// A collaborator call failed before producing usable content.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Model returned invalid JSON: {error}")]
    InvalidJson { error: String, raw: String },
}

impl From<ResponseParseError> for CollaboratorError {
    fn from(err: ResponseParseError) -> Self {
        match err {
            ResponseParseError::Empty => CollaboratorError::EmptyResponse,
            ResponseParseError::InvalidJson { error, raw } => {
                CollaboratorError::InvalidJson { error, raw }
            }
        }
    }
}

/// Produces a fresh candidate set for a round.
#[async_trait]
pub trait SetGenerator: Send + Sync {
    async fn generate(&self, ctx: &GameContext) -> Result<Value, CollaboratorError>;
}

/// Reviews a candidate and either accepts it or returns a full replacement.
#[async_trait]
pub trait SetFixer: Send + Sync {
    async fn review_or_fix(
        &self,
        ctx: &GameContext,
        candidate: &Value,
    ) -> Result<FixerVerdict, CollaboratorError>;
}
