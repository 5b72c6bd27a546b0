//! JSON quiz loader.
//!
//! Reads quizzes saved in their canonical wire form and checks them for
//! problems the editing store would otherwise only gate in the UI.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::DraftConfig;
use crate::model::{Quiz, QuizType};

/// Parse a single JSON file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a JSON string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse quiz JSON: {}", source_path.display()))
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The item index (if applicable).
    pub item_index: Option<usize>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn item(index: usize, message: impl Into<String>) -> Self {
        Self {
            item_index: Some(index),
            message: message.into(),
        }
    }
}

/// Validate a quiz for structural issues.
///
/// Completion (missing questions, answers, titles) is not reported here;
/// see [`crate::completion`].
pub fn validate_quiz(quiz: &Quiz, config: &DraftConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.items.is_empty() {
        warnings.push(ValidationWarning {
            item_index: None,
            message: "quiz has no items".into(),
        });
    }

    // Duplicate identifiers across items and options
    let mut seen = HashSet::new();
    for (index, item) in quiz.items.iter().enumerate() {
        if !seen.insert(item.uuid.as_str()) {
            warnings.push(ValidationWarning::item(
                index,
                format!("duplicate item uuid: {}", item.uuid),
            ));
        }
        for option in &item.options {
            if !seen.insert(option.uuid.as_str()) {
                warnings.push(ValidationWarning::item(
                    index,
                    format!("duplicate option uuid: {}", option.uuid),
                ));
            }
        }
    }

    for (index, item) in quiz.items.iter().enumerate() {
        match item.item_type {
            QuizType::Choice => {
                let count = item.options.len();
                if count < config.min_options || count > config.max_options {
                    warnings.push(ValidationWarning::item(
                        index,
                        format!(
                            "choice item has {count} options, expected {}..={}",
                            config.min_options, config.max_options
                        ),
                    ));
                }
                if item.essay_answer.is_some() {
                    warnings.push(ValidationWarning::item(
                        index,
                        "choice item carries a leftover essay answer",
                    ));
                }
            }
            QuizType::Essay => {
                if !item.options.is_empty() {
                    warnings.push(ValidationWarning::item(
                        index,
                        "essay item carries options; they are dropped on submit",
                    ));
                }
            }
        }
    }

    warnings
}
