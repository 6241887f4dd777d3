//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and port interactions.

pub mod llm_collaborators;
pub mod publish_daily_set;
pub mod repair_loop;
