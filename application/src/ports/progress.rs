//! Progress notification port
//!
//! Defines the interface for reporting progress while the repair loop runs.

use pasalacabra_domain::GameContext;

/// Which collaborator a pass is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassStep {
    Generating,
    Reviewing,
}

impl PassStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassStep::Generating => "generating",
            PassStep::Reviewing => "reviewing",
        }
    }
}

/// Callback for progress updates during the repair loop
///
/// Implementations live in the presentation layer.
pub trait RepairProgressNotifier: Send + Sync {
    /// Called once before the first pass
    fn on_start(&self, _ctx: &GameContext, _max_passes: u32) {}

    /// Called when a pass starts
    fn on_pass_start(&self, attempt: u32, max_passes: u32);

    /// Called before each external call within a pass
    fn on_step(&self, _attempt: u32, _step: PassStep) {}

    /// Called when a pass ends without an accepted set
    fn on_pass_failed(&self, attempt: u32, error: &str);

    /// Called when a set has been accepted
    fn on_accepted(&self, attempt: u32);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RepairProgressNotifier for NoProgress {
    fn on_pass_start(&self, _attempt: u32, _max_passes: u32) {}
    fn on_pass_failed(&self, _attempt: u32, _error: &str) {}
    fn on_accepted(&self, _attempt: u32) {}
}
