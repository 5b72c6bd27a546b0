//! The `quizdraft new` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizdraft_core::config::load_config_from;
use quizdraft_core::sink::LogSink;
use quizdraft_core::store::QuizDraftStore;
use quizdraft_core::traits::{StaticUser, UuidGenerator};

pub fn execute(name: String, output: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let users = StaticUser(config.owner_or_anonymous());

    let store = QuizDraftStore::with_parts(
        name,
        &users,
        Box::new(UuidGenerator),
        Box::new(LogSink),
        config,
    )?;
    let json = serde_json::to_string_pretty(store.quiz())?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write draft: {}", path.display()))?;
            println!("Created {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
