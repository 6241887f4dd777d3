//! LLM-backed generator and fixer.
//!
//! Both talk to the model through the [`LlmGateway`] port with a fresh
//! session per call, so no conversation state leaks between passes.

use crate::ports::collaborators::{CollaboratorError, SetFixer, SetGenerator};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::transcript::{NoTranscript, TranscriptEvent, TranscriptLogger};
use async_trait::async_trait;
use pasalacabra_domain::{
    FixerVerdict, GameContext, GameRules, Model, PromptTemplate, parse_candidate,
    parse_fixer_response, truncate,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Shared plumbing: one system prompt, one user prompt, raw text back.
struct LlmCaller<G: LlmGateway> {
    gateway: Arc<G>,
    model: Model,
    transcript: Arc<dyn TranscriptLogger>,
}

impl<G: LlmGateway> LlmCaller<G> {
    async fn call(
        &self,
        role: &'static str,
        system: &str,
        prompt: &str,
    ) -> Result<String, CollaboratorError> {
        self.transcript.log(TranscriptEvent::new(
            "prompt",
            json!({ "role": role, "model": self.model.as_str(), "prompt": prompt }),
        ));

        let session = self
            .gateway
            .create_session_with_system_prompt(&self.model, system)
            .await?;
        let response = session.send(prompt).await?;

        debug!(
            "{} response from {}: {}",
            role,
            session.model(),
            truncate(&response, 120)
        );
        self.transcript.log(TranscriptEvent::new(
            "response",
            json!({ "role": role, "model": self.model.as_str(), "response": response }),
        ));
        Ok(response)
    }
}

/// Generator that asks the model for a complete set.
pub struct LlmSetGenerator<G: LlmGateway> {
    caller: LlmCaller<G>,
    rules: GameRules,
}

impl<G: LlmGateway> LlmSetGenerator<G> {
    pub fn new(gateway: Arc<G>, model: Model, rules: GameRules) -> Self {
        Self {
            caller: LlmCaller {
                gateway,
                model,
                transcript: Arc::new(NoTranscript),
            },
            rules,
        }
    }

    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.caller.transcript = transcript;
        self
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> SetGenerator for LlmSetGenerator<G> {
    async fn generate(&self, ctx: &GameContext) -> Result<Value, CollaboratorError> {
        info!("Requesting candidate set from {}", self.caller.model);
        let prompt = PromptTemplate::generation_prompt(ctx, &self.rules);
        let response = self
            .caller
            .call("generator", PromptTemplate::generation_system(), &prompt)
            .await?;
        Ok(parse_candidate(&response)?)
    }
}

/// Fixer that asks the model to review a candidate.
pub struct LlmSetFixer<G: LlmGateway> {
    caller: LlmCaller<G>,
    rules: GameRules,
}

impl<G: LlmGateway> LlmSetFixer<G> {
    pub fn new(gateway: Arc<G>, model: Model, rules: GameRules) -> Self {
        Self {
            caller: LlmCaller {
                gateway,
                model,
                transcript: Arc::new(NoTranscript),
            },
            rules,
        }
    }

    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.caller.transcript = transcript;
        self
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> SetFixer for LlmSetFixer<G> {
    async fn review_or_fix(
        &self,
        ctx: &GameContext,
        candidate: &Value,
    ) -> Result<FixerVerdict, CollaboratorError> {
        info!("Requesting review from {}", self.caller.model);
        let prompt = PromptTemplate::review_prompt(ctx, &self.rules, candidate);
        let response = self
            .caller
            .call("fixer", PromptTemplate::review_system(), &prompt)
            .await?;
        Ok(parse_fixer_response(&response)?)
    }
}
