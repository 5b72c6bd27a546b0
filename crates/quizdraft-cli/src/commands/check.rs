//! The `quizdraft check` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizdraft_core::completion::ItemCompletion;
use quizdraft_core::config::load_config_from;
use quizdraft_core::parser::{parse_quiz, validate_quiz};

const QUESTION_PREVIEW_CHARS: usize = 40;

pub fn execute(quiz_path: PathBuf, strict: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let quiz = parse_quiz(&quiz_path)?;

    println!("Quiz: {} ({} items)", quiz.name, quiz.items.len());

    for w in validate_quiz(&quiz, &config) {
        let prefix = w
            .item_index
            .map(|i| format!("  [item {}]", i + 1))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "Type",
        "Question",
        "Has question",
        "Has answer",
        "Option titles",
        "Complete",
    ]);

    let mut incomplete = 0;
    for (index, item) in quiz.items.iter().enumerate() {
        let report = ItemCompletion::of(item);
        if !report.is_completed() {
            incomplete += 1;
        }
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(item.item_type),
            Cell::new(preview(&item.question)),
            Cell::new(mark(report.has_question)),
            Cell::new(mark(report.has_answer)),
            Cell::new(mark(report.has_title_of_all_options)),
            Cell::new(mark(report.is_completed())),
        ]);
    }
    println!("{table}");

    let ready = if quiz.items.is_empty() {
        println!("Nothing to submit: quiz has no items.");
        false
    } else if incomplete > 0 {
        println!("{incomplete} incomplete item(s).");
        false
    } else {
        println!("Ready to submit.");
        true
    };

    if strict && !ready {
        std::process::exit(1);
    }

    Ok(())
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "yes"
    } else {
        "no"
    }
}

fn preview(question: &str) -> String {
    if question.chars().count() <= QUESTION_PREVIEW_CHARS {
        return question.to_string();
    }
    let cut: String = question.chars().take(QUESTION_PREVIEW_CHARS).collect();
    format!("{cut}…")
}
