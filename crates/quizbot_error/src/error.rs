//! Top-level error wrapper types.

use crate::{ConfigError, GatewayError, QuestionBankError, SessionError};

/// Every error condition quizbot can surface.
///
/// # Examples
///
/// ```
/// use quizbot_error::{ConfigError, QuizError};
///
/// let err: QuizError = ConfigError::invalid("next_question_delay_ms", "bad delay").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum QuizErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Question bank error
    #[from(QuestionBankError)]
    QuestionBank(QuestionBankError),
    /// Game engine error
    #[from(SessionError)]
    Session(SessionError),
    /// Chat gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
}

/// Quizbot error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Quizbot Error: {}", _0)]
pub struct QuizError(Box<QuizErrorKind>);

impl QuizError {
    /// Create a new error from a kind.
    pub fn new(kind: QuizErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QuizErrorKind {
        &self.0
    }
}

impl<T> From<T> for QuizError
where
    T: Into<QuizErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for quizbot operations.
pub type QuizResult<T> = std::result::Result<T, QuizError>;
