//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quizbot - chat-driven trivia sessions
#[derive(Parser, Debug)]
#[command(name = "quizbot")]
#[command(about = "Chat-driven trivia game session manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a quiz over stdin/stdout (`user: message` per line)
    ///
    /// At end of input the session waits for an already scheduled question
    /// to be posted, then stops.
    Run {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Channel name (overrides config and QUIZBOT_CHANNEL)
        #[arg(long)]
        channel: Option<String>,

        /// Question bank JSON (overrides config and QUIZBOT_QUESTIONS)
        #[arg(long)]
        questions: Option<PathBuf>,
    },

    /// Load a question bank and report its size
    Validate {
        /// Question bank JSON file
        questions: PathBuf,
    },
}
