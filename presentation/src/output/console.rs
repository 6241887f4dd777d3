//! Console output formatter for published sets and offline checks

use colored::Colorize;
use pasalacabra_application::PublishOutput;
use pasalacabra_domain::{QuestionSet, ValidationError};
use std::path::Path;

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Summary printed after a successful run
    pub fn format_published(output: &PublishOutput) -> String {
        let mut text = String::new();

        text.push_str(&Self::header("Pasalacabra"));
        text.push('\n');

        let location = output.location.as_deref().unwrap_or("(dry run, not written)");
        text.push_str(&format!("{} {}\n", "Wrote:".cyan().bold(), location));
        text.push_str(&format!("{} {}\n", "Title:".cyan().bold(), output.set.title));
        text.push_str(&format!(
            "{} {}\n",
            "Topics:".cyan().bold(),
            output.topics.join(", ")
        ));
        text.push_str(&format!(
            "{} {}\n",
            "Passes:".dimmed(),
            output.attempts
        ));

        text.push_str(&Self::footer());
        text
    }

    /// The set as it would be written to disk
    pub fn format_json(set: &QuestionSet) -> String {
        set.to_pretty_json().unwrap_or_else(|_| "{}\n".to_string())
    }

    /// Result of `--check`
    pub fn format_check(path: &Path, result: &Result<QuestionSet, ValidationError>) -> String {
        match result {
            Ok(set) => format!(
                "{} {} ({} questions, \"{}\")\n",
                "v".green(),
                path.display(),
                set.questions.len(),
                set.title
            ),
            Err(e) => format!(
                "{} {}\n  {} {}\n",
                "x".red(),
                path.display(),
                format!("[{}]", e.kind()).yellow().bold(),
                e
            ),
        }
    }

    /// Board overview: one line per letter
    pub fn format_board(set: &QuestionSet) -> String {
        set.questions
            .iter()
            .map(|q| format!("{:>3}  {}  {}", q.letter.bold(), q.answer.green(), q.question.dimmed()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasalacabra_domain::QuestionEntry;
    use std::path::PathBuf;

    fn sample_set() -> QuestionSet {
        QuestionSet {
            id: "set_01".to_string(),
            title: "Pasalacabra 2026-10-19 · No. 292".to_string(),
            questions: vec![QuestionEntry::new(
                "A",
                "Empieza por A: Ave rapaz de gran tamaño",
                "Águila",
            )],
        }
    }

    #[test]
    fn test_published_summary_lists_path_title_and_topics() {
        colored::control::set_override(false);
        let output = PublishOutput {
            set: sample_set(),
            location: Some("src/data/sets/set_01.json".to_string()),
            topics: vec!["Arte".to_string(), "Cine".to_string()],
            attempts: 2,
        };

        let text = ConsoleFormatter::format_published(&output);
        assert!(text.contains("Wrote: src/data/sets/set_01.json"));
        assert!(text.contains("Title: Pasalacabra 2026-10-19 · No. 292"));
        assert!(text.contains("Topics: Arte, Cine"));
    }

    #[test]
    fn test_dry_run_summary() {
        colored::control::set_override(false);
        let output = PublishOutput {
            set: sample_set(),
            location: None,
            topics: vec![],
            attempts: 1,
        };
        assert!(ConsoleFormatter::format_published(&output).contains("dry run"));
    }

    #[test]
    fn test_check_failure_shows_kind() {
        colored::control::set_override(false);
        let err = ValidationError::DuplicateAnswer {
            answer: "Roma".to_string(),
        };
        let text = ConsoleFormatter::format_check(&PathBuf::from("set.json"), &Err(err));
        assert!(text.contains("set.json"));
        assert!(text.contains("Roma"));
        assert!(text.contains("[duplicate"));
    }

    #[test]
    fn test_board_lists_one_line_per_letter() {
        colored::control::set_override(false);
        let mut set = sample_set();
        set.questions.push(QuestionEntry::new(
            "Ñ",
            "Contiene la Ñ: Ave corredora sudamericana",
            "Ñandú",
        ));

        let board = ConsoleFormatter::format_board(&set);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Águila"));
        assert!(lines[1].contains("Ñandú"));
        assert!(lines[1].contains("Contiene la Ñ"));
    }

    #[test]
    fn test_json_matches_store_format() {
        let json = ConsoleFormatter::format_json(&sample_set());
        assert!(json.starts_with("{\n  \"id\": \"set_01\""));
        assert!(json.ends_with("}\n"));
    }
}
