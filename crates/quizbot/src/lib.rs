//! Quizbot - chat-driven trivia sessions.
//!
//! Users join from chat, the channel owner starts a round, questions are
//! posed, answers are checked, scores accumulate, and a winner (or the
//! owner) ends the round.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use quizbot::{EngineConfig, GameEngine, QuestionBank, QuizSession};
//! use std::sync::Arc;
//!
//! let bank = Arc::new(QuestionBank::from_file("questions.json")?);
//! let engine = GameEngine::new(EngineConfig::new("streamer"), bank);
//! let (session, tx) = QuizSession::with_tokio_scheduler(engine, gateway);
//! tokio::spawn(session.run());
//! ```
//!
//! # Architecture
//!
//! - `quizbot_error` - Error types
//! - `quizbot_core` - Questions, draw policy, session state
//! - `quizbot_engine` - State machine, scheduler, session actor
//!
//! This crate re-exports everything and adds configuration loading, the
//! console chat gateway and tracing setup used by the `quizbot` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod console;
mod telemetry;

pub use config::{QuizConfig, QuizConfigBuilder};
pub use console::{ConsoleGateway, parse_console_line, spawn_console_reader};
pub use telemetry::init_tracing;

pub use quizbot_core::{
    GameMode, Phase, PlayerScore, Question, QuestionBank, QuestionSource, SessionState,
};
pub use quizbot_engine::{
    ChatEvent, ChatGateway, Command, DEFAULT_NEXT_QUESTION_DELAY, DEFAULT_WINNING_SCORE,
    EngineConfig, FollowUp, GameEngine, Outcome, QuizSession, SESSION_CHANNEL_CAPACITY,
    Scheduler, SessionMessage, TokioScheduler,
};
pub use quizbot_error::{
    ConfigError, ConfigErrorKind, GatewayError, QuestionBankError, QuestionBankErrorKind,
    QuizError, QuizErrorKind, QuizResult, Rejection, SessionError, SessionErrorKind,
};
