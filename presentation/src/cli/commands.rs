//! CLI command definitions

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for pasalacabra
#[derive(Parser, Debug)]
#[command(name = "pasalacabra")]
#[command(author, version, about = "Generate and validate the daily Pasalacabra question set")]
#[command(long_about = r#"
Pasalacabra asks a language model for today's board (one clue per letter),
has a second pass review it, and only writes the set once every rule holds:

1. Letters are exactly the configured board, in order
2. Each clue starts with "Empieza por X:" or "Contiene la X:" and the answer obeys it
3. No answer appears inside its own question
4. No answer is repeated

Configuration files are loaded from (in priority order):
1. PASALACABRA_* environment variables (and SET_PATH, OPENAI_MODEL, OPENAI_KEY)
2. --config <path>           Explicit config file
3. ./pasalacabra.toml        Project-level config
4. ~/.config/pasalacabra/config.toml   Global config

Example:
  pasalacabra
  pasalacabra --date 2026-10-19 --seed 42 --dry-run
  pasalacabra --topics Cine --topics Historia -o public/set_01.json
  pasalacabra --check src/data/sets/set_01.json
"#)]
pub struct Cli {
    /// Game date (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Topics to use instead of sampling (can be specified multiple times)
    #[arg(long = "topics", value_name = "TOPIC")]
    pub topics: Vec<String>,

    /// Seed for topic sampling, for reproducible runs
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Model for both the generator and the fixer
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum generate/fix passes before giving up
    #[arg(long, value_name = "N")]
    pub max_passes: Option<u32>,

    /// Where to write the validated set
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the accepted set instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Validate an existing set file and exit (no network)
    #[arg(long, value_name = "PATH", conflicts_with = "dry_run")]
    pub check: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of prompts, responses and verdicts
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Also write daily-rotated logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generation_flags() {
        let cli = Cli::try_parse_from([
            "pasalacabra",
            "--date",
            "2026-10-19",
            "--topics",
            "Cine",
            "--topics",
            "Arte",
            "--seed",
            "7",
            "--max-passes",
            "5",
            "-o",
            "out/set.json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2026, 10, 19));
        assert_eq!(cli.topics, vec!["Cine", "Arte"]);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.max_passes, Some(5));
        assert_eq!(cli.output, Some(PathBuf::from("out/set.json")));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_check_conflicts_with_dry_run() {
        let result = Cli::try_parse_from(["pasalacabra", "--check", "a.json", "--dry-run"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Cli::try_parse_from(["pasalacabra", "--date", "19/10/2026"]);
        assert!(result.is_err());
    }
}
