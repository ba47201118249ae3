//! Command handlers.

use quizbot::{
    ConsoleGateway, GameEngine, QuestionBank, QuizConfig, QuizResult, QuizSession,
    spawn_console_reader,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

/// Default config file picked up when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "quizbot.toml";

/// Resolve configuration: file, then environment, then CLI flags.
fn resolve_config(
    path: Option<&Path>,
    channel: Option<String>,
    questions: Option<PathBuf>,
) -> QuizResult<QuizConfig> {
    let mut config = match path {
        Some(path) => QuizConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            QuizConfig::from_file(DEFAULT_CONFIG_FILE)?
        }
        None => QuizConfig::default(),
    };

    config.apply_env();
    if let Some(channel) = channel {
        config.set_channel(channel);
    }
    if let Some(questions) = questions {
        config.set_questions(questions);
    }

    config.validate()?;
    Ok(config)
}

/// Run a quiz session on the console gateway until stdin closes and any
/// scheduled question has been posted.
#[instrument(skip_all)]
pub async fn run_quiz(
    config_path: Option<&Path>,
    channel: Option<String>,
    questions: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(config_path, channel, questions)?;
    let bank = Arc::new(QuestionBank::from_file(config.questions())?);
    info!(
        channel = %config.channel(),
        owner = %config.owner_name(),
        questions = bank.len(),
        "Starting quiz"
    );

    let engine = GameEngine::new(config.engine_config(), bank);
    let gateway = Arc::new(ConsoleGateway::new(config.channel().clone()));
    let (session, tx) = QuizSession::with_tokio_scheduler(engine, gateway);

    // `tx` stays alive until the session returns so a drain at end of input
    // can still receive its scheduled question.
    let reader = spawn_console_reader(tx.clone());
    let state = tokio::spawn(session.run()).await?;
    drop(tx);
    reader.abort();

    info!(phase = %state.phase(), "Quiz stopped");
    Ok(())
}

/// Load a question bank and print how many questions it holds.
pub fn validate_bank(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let bank = QuestionBank::from_file(path)?;
    println!(
        "{}: {} questions ({} distinct prompts)",
        path.display(),
        bank.len(),
        bank.rotation_len()
    );
    Ok(())
}
