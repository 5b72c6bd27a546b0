//! The `quizdraft submit` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdraft_core::config::load_config_from;
use quizdraft_core::error::DraftError;
use quizdraft_core::parser::parse_quiz;
use quizdraft_core::sink::QuizSubmission;
use quizdraft_core::store::QuizDraftStore;
use quizdraft_core::traits::{QuizSink, UuidGenerator};

/// Writes the submitted quiz as pretty JSON to a file or stdout.
struct JsonOutputSink {
    output: Option<PathBuf>,
}

impl QuizSink for JsonOutputSink {
    fn name(&self) -> &str {
        "json-output"
    }

    fn submit(&self, submission: &QuizSubmission) -> Result<(), DraftError> {
        let json = serde_json::to_string_pretty(&submission.quiz)?;
        match &self.output {
            Some(path) => std::fs::write(path, json)
                .map_err(|e| DraftError::Sink(format!("{}: {e}", path.display()))),
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }
}

pub fn execute(
    quiz_path: PathBuf,
    output: Option<PathBuf>,
    force: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let quiz = parse_quiz(&quiz_path)?;

    let sink = JsonOutputSink {
        output: output.clone(),
    };
    let mut store =
        QuizDraftStore::from_quiz(quiz, Box::new(UuidGenerator), Box::new(sink), config)?;

    if !store.enabled_submit_button() && !force {
        let items: Vec<String> = store
            .incomplete_items()
            .iter()
            .map(|i| (i + 1).to_string())
            .collect();
        anyhow::bail!(
            "quiz has incomplete item(s): {} (use --force to submit anyway)",
            items.join(", ")
        );
    }

    let submission = store.submit_quiz()?;

    if let Some(path) = output {
        println!(
            "Submitted {} ({} items) to {}",
            submission.quiz.name,
            submission.quiz.items.len(),
            path.display()
        );
    }

    Ok(())
}
