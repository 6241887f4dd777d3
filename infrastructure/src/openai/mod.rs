//! OpenAI Responses API adapter
//!
//! Implements the [`LlmGateway`](pasalacabra_application::LlmGateway) port
//! over `POST {base_url}/v1/responses`.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
