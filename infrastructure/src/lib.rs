//! Infrastructure layer for pasalacabra
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the OpenAI gateway, the JSON set store, the JSONL
//! transcript logger, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileGenerationConfig,
    FileLanguage, FileOpenAiConfig, FileOutputConfig,
};
pub use logging::JsonlTranscriptLogger;
pub use openai::{error::OpenAiError, gateway::OpenAiLlmGateway, session::OpenAiSession};
pub use storage::JsonSetStore;
