//! quizdraft CLI — create, check, and submit quiz drafts stored as JSON.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizdraft", version, about = "Quiz draft authoring tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new quiz draft with one default item
    New {
        /// Quiz name
        #[arg(long)]
        name: String,

        /// Write the draft here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Report which items of a draft are incomplete
    Check {
        /// Path to the quiz JSON file
        #[arg(long)]
        quiz: PathBuf,

        /// Exit code 1 if any item is incomplete
        #[arg(long)]
        strict: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Normalize a draft and emit the submitted quiz
    Submit {
        /// Path to the quiz JSON file
        #[arg(long)]
        quiz: PathBuf,

        /// Write the submitted quiz here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Submit even if some items are incomplete
        #[arg(long)]
        force: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdraft=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            name,
            output,
            config,
        } => commands::new::execute(name, output, config),
        Commands::Check {
            quiz,
            strict,
            config,
        } => commands::check::execute(quiz, strict, config),
        Commands::Submit {
            quiz,
            output,
            force,
            config,
        } => commands::submit::execute(quiz, output, force, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
