//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod collaborators;
pub mod llm_gateway;
pub mod progress;
pub mod set_store;
pub mod transcript;
