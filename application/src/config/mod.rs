//! Application-level configuration.
//!
//! - [`RepairPolicy`]: repair loop control (pass budget, model, timeout)

pub mod repair_policy;

pub use repair_policy::RepairPolicy;
