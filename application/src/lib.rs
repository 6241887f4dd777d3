//! Application layer for pasalacabra
//!
//! This crate contains the repair loop, use cases, port definitions and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RepairPolicy;
pub use ports::{
    collaborators::{CollaboratorError, SetFixer, SetGenerator},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, PassStep, RepairProgressNotifier},
    set_store::{SetStore, StoreError},
    transcript::{NoTranscript, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::llm_collaborators::{LlmSetFixer, LlmSetGenerator};
pub use use_cases::publish_daily_set::{
    PublishDailySetUseCase, PublishError, PublishInput, PublishOutput,
};
pub use use_cases::repair_loop::{PassError, RepairError, RepairLoop, RepairOutcome, RepairState};
