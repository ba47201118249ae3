//! Question type.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An immutable prompt/answer pair.
///
/// Serialized as `{"question": ..., "answer": ...}`. Two questions are the
/// "same" for repeat tracking when their prompts are equal.
///
/// # Examples
///
/// ```
/// use quizbot_core::Question;
///
/// let q = Question::new("Capital of France?", "Paris");
/// assert!(q.matches("paris"));
/// assert!(q.matches("  PARIS "));
/// assert!(!q.matches("Lyon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Question {
    /// Text posed to chat.
    #[serde(rename = "question")]
    prompt: String,
    /// Expected answer.
    answer: String,
}

impl Question {
    /// Create a new question.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Case-insensitive exact comparison of an attempt against the answer.
    pub fn matches(&self, attempt: &str) -> bool {
        attempt.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}
