//! Progress reporting for the repair loop

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pasalacabra_application::{PassStep, RepairProgressNotifier};
use pasalacabra_domain::GameContext;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per pass
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn step_message(step: PassStep) -> &'static str {
        match step {
            PassStep::Generating => "Generating candidate...",
            PassStep::Reviewing => "Reviewing candidate...",
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn take_bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RepairProgressNotifier for ProgressReporter {
    fn on_start(&self, ctx: &GameContext, _max_passes: u32) {
        println!("{} {}", "->".cyan(), ctx.title().bold());
        println!("   {} {}", "Topics:".dimmed(), ctx.topics_joined());
    }

    fn on_pass_start(&self, attempt: u32, max_passes: u32) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Pass {}/{}", attempt, max_passes));
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_step(&self, _attempt: u32, step: PassStep) {
        self.with_bar(|pb| pb.set_message(Self::step_message(step)));
    }

    fn on_pass_failed(&self, _attempt: u32, error: &str) {
        if let Some(pb) = self.take_bar() {
            pb.finish_with_message(format!("{} {}", "x".red(), error));
        }
    }

    fn on_accepted(&self, _attempt: u32) {
        if let Some(pb) = self.take_bar() {
            pb.finish_with_message(format!("{} Set accepted", "v".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RepairProgressNotifier for SimpleProgress {
    fn on_start(&self, ctx: &GameContext, max_passes: u32) {
        println!(
            "{} {} (up to {} passes)",
            "->".cyan(),
            ctx.title().bold(),
            max_passes
        );
    }

    fn on_pass_start(&self, attempt: u32, max_passes: u32) {
        println!("{} Pass {}/{}", "->".cyan(), attempt, max_passes);
    }

    fn on_step(&self, _attempt: u32, step: PassStep) {
        println!("  {}", ProgressReporter::step_message(step));
    }

    fn on_pass_failed(&self, _attempt: u32, error: &str) {
        println!("  {} {}", "x".red(), error);
    }

    fn on_accepted(&self, attempt: u32) {
        println!("  {} Accepted on pass {}", "v".green(), attempt);
    }
}
