//! Question bank loading.

use crate::Question;
use quizbot_error::{QuestionBankError, QuestionBankErrorKind};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, instrument};

/// Ordered, non-empty collection of questions loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    distinct_prompts: usize,
}

impl QuestionBank {
    /// Build a bank from a list of questions.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionBankErrorKind::EmptyBank`] when `questions` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use quizbot_core::{Question, QuestionBank};
    ///
    /// let bank = QuestionBank::new(vec![Question::new("2+2?", "4")]).unwrap();
    /// assert_eq!(bank.len(), 1);
    /// assert!(QuestionBank::new(vec![]).is_err());
    /// ```
    #[track_caller]
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::new(QuestionBankErrorKind::EmptyBank));
        }

        let distinct_prompts = questions
            .iter()
            .map(Question::prompt)
            .collect::<HashSet<_>>()
            .len();

        Ok(Self {
            questions,
            distinct_prompts,
        })
    }

    /// Parse a bank from a JSON array of `{"question", "answer"}` records.
    pub fn from_json(content: &str) -> Result<Self, QuestionBankError> {
        Self::parse(content, Path::new("<inline>"))
    }

    /// Load a bank from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not a list of question records,
    /// or holds no questions.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, QuestionBankError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            QuestionBankError::new(QuestionBankErrorKind::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;

        let bank = Self::parse(&content, path)?;
        debug!(questions = bank.len(), "Loaded question bank");
        Ok(bank)
    }

    fn parse(content: &str, origin: &Path) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_json::from_str(content).map_err(|e| {
            QuestionBankError::new(QuestionBankErrorKind::Parse {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })
        })?;
        Self::new(questions)
    }

    /// All questions in load order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions, duplicates included.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of distinct prompts, i.e. the length of one rotation.
    ///
    /// Banks with duplicate prompts rotate over the distinct set.
    pub fn rotation_len(&self) -> usize {
        self.distinct_prompts
    }
}
