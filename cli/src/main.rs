//! CLI entrypoint for Pasalacabra
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use pasalacabra_application::{
    LlmSetFixer, LlmSetGenerator, NoTranscript, PublishDailySetUseCase, PublishInput, RepairLoop,
    TranscriptLogger,
};
use pasalacabra_domain::{GameContext, SetValidator, pick_topics};
use pasalacabra_infrastructure::{
    ConfigLoader, FileConfig, JsonSetStore, JsonlTranscriptLogger, OpenAiLlmGateway,
};
use pasalacabra_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting Pasalacabra");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let rules = config.game.to_rules()?;
    let validator = SetValidator::new(rules.clone())?;

    // Offline check mode
    if let Some(path) = &cli.check {
        let value = JsonSetStore::read_value(path)?;
        let result = validator.validate_set(&value);
        print!("{}", ConsoleFormatter::format_check(path, &result));
        match result {
            Ok(set) => println!("{}", ConsoleFormatter::format_board(&set)),
            Err(e) => bail!("{} failed validation: {}", path.display(), e),
        }
        return Ok(());
    }

    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let topics = select_topics(&cli, &config)?;
    let context = GameContext::new(date, config.game.start_date, topics);
    let policy = config.generation.to_policy();
    info!(
        "Using {} with up to {} passes ({} model calls at most)",
        policy.model,
        policy.max_passes,
        policy.max_external_calls()
    );

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiLlmGateway::new(
        &config.providers.openai,
        policy.request_timeout,
    )?);

    let transcript: Arc<dyn TranscriptLogger> = match &cli.transcript {
        Some(path) => match JsonlTranscriptLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => {
                warn!("Transcript disabled: cannot open {}", path.display());
                Arc::new(NoTranscript)
            }
        },
        None => Arc::new(NoTranscript),
    };

    let generator = Arc::new(
        LlmSetGenerator::new(Arc::clone(&gateway), policy.model.clone(), rules.clone())
            .with_transcript(Arc::clone(&transcript)),
    );
    let fixer = Arc::new(
        LlmSetFixer::new(gateway, policy.model.clone(), rules)
            .with_transcript(Arc::clone(&transcript)),
    );
    let repair =
        RepairLoop::new(generator, fixer, validator, policy.max_passes).with_transcript(transcript);
    let store = Arc::new(JsonSetStore::new(&config.output.set_path));
    let use_case = PublishDailySetUseCase::new(repair, store);

    let mut input = PublishInput::new(context);
    if cli.dry_run {
        input = input.dry_run();
    }

    // Execute with or without progress reporting
    let output = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    if cli.dry_run {
        print!("{}", ConsoleFormatter::format_json(&output.set));
    }
    print!("{}", ConsoleFormatter::format_published(&output));

    Ok(())
}

/// Initialize logging based on verbosity level, optionally teeing to a
/// daily-rotated file.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "pasalacabra.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// CLI flags win over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.generation.model = model.clone();
    }
    if let Some(max_passes) = cli.max_passes {
        config.generation.max_passes = max_passes;
    }
    if let Some(output) = &cli.output {
        config.output.set_path = output.clone();
    }
}

/// Topics from `--topics` verbatim, otherwise a (seedable) sample of the pool.
fn select_topics(cli: &Cli, config: &FileConfig) -> Result<Vec<String>> {
    let explicit: Vec<String> = cli
        .topics
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if !explicit.is_empty() {
        return Ok(explicit);
    }

    let pool = &config.game.topics;
    let count = config.game.topics_per_game;
    let topics = match cli.seed {
        Some(seed) => pick_topics(pool, count, &mut StdRng::seed_from_u64(seed))?,
        None => pick_topics(pool, count, &mut rand::rng())?,
    };
    Ok(topics)
}
