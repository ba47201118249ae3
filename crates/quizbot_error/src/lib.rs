//! Error types for quizbot.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Session errors are special: their kind's `Display` is the sentence posted
//! back to chat, so the engine can report a rejection by formatting the kind.
//!
//! # Examples
//!
//! ```
//! use quizbot_error::{ConfigError, QuizResult};
//!
//! fn load() -> QuizResult<String> {
//!     Err(ConfigError::invalid("channel", "must not be empty"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bank;
mod config;
mod error;
mod gateway;
mod session;

pub use bank::{QuestionBankError, QuestionBankErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{QuizError, QuizErrorKind, QuizResult};
pub use gateway::GatewayError;
pub use session::{Rejection, SessionError, SessionErrorKind, SessionResult};
