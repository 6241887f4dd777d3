//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the language model name used for generation
//! - [`error::DomainError`]: errors raised while building game rules

pub mod error;
pub mod model;
pub mod string;
