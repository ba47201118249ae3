//! Question bank loading errors.

use std::path::PathBuf;

/// Specific question bank error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum QuestionBankErrorKind {
    /// The bank holds no questions.
    #[display("Question bank is empty")]
    EmptyBank,

    /// The bank file could not be read.
    #[display("Failed to read question bank {}: {}", path.display(), message)]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The bank file is not a valid list of question records.
    #[display("Failed to parse question bank {}: {}", path.display(), message)]
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

/// Question bank error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Question Bank Error: {} at line {} in {}", kind, line, file)]
pub struct QuestionBankError {
    kind: QuestionBankErrorKind,
    line: u32,
    file: &'static str,
}

impl QuestionBankError {
    /// Create a new question bank error with caller location tracking.
    #[track_caller]
    pub fn new(kind: QuestionBankErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QuestionBankErrorKind {
        &self.kind
    }
}
