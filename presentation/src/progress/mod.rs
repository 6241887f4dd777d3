//! Progress reporters for the repair loop

pub mod reporter;
