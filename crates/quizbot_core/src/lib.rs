//! Core data model for quizbot.
//!
//! - [`Question`] / [`QuestionBank`] hold the immutable prompt/answer pairs
//! - [`QuestionSource`] draws questions without repeats inside a rotation
//! - [`SessionState`] is the single mutable state of one channel's game

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bank;
mod question;
mod source;
mod state;

pub use bank::QuestionBank;
pub use question::Question;
pub use source::QuestionSource;
pub use state::{GameMode, Phase, PlayerScore, SessionState};
