//! Trivia game engine for quizbot.
//!
//! # Architecture
//!
//! - [`Command`] - chat keyword parsing
//! - [`GameEngine`] - the state machine; one call per inbound command
//! - [`Scheduler`] - delayed re-entry for "ask next question"
//! - [`ChatGateway`] - outbound text sink implemented by a chat transport
//! - [`QuizSession`] - actor draining chat events and follow-ups one at a time

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod engine;
mod gateway;
mod scheduler;
mod session;

pub use command::{ChatEvent, Command};
pub use config::{DEFAULT_NEXT_QUESTION_DELAY, DEFAULT_WINNING_SCORE, EngineConfig};
pub use engine::{FollowUp, GameEngine, Outcome};
pub use gateway::ChatGateway;
pub use scheduler::{Scheduler, TokioScheduler};
pub use session::{QuizSession, SESSION_CHANNEL_CAPACITY, SessionMessage};
