//! Prompt domain
//!
//! Templates for the generator and reviewer prompts.

mod template;

pub use template::{MAX_HARD_QUESTIONS, PromptTemplate};
