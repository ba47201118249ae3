//! Quizbot CLI binary.
//!
//! - `run` plays a quiz over the console chat gateway
//! - `validate` checks a question bank file

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_quiz, validate_bank};

    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    quizbot::init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Run {
            config,
            channel,
            questions,
        } => {
            run_quiz(config.as_deref(), channel, questions).await?;
        }

        Commands::Validate { questions } => {
            validate_bank(&questions)?;
        }
    }

    Ok(())
}
