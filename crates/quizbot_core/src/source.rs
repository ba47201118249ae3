//! Non-repeating random question draws.

use crate::{Question, QuestionBank};
use quizbot_error::{QuestionBankError, QuestionBankErrorKind};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// Draws questions from a bank so that every prompt is asked once per
/// rotation before any prompt repeats.
///
/// The prompts used so far live in the caller's asked-set (part of the
/// session state), which lets a session reset start a fresh rotation.
///
/// Sampling is uniform with rejection: the expected number of samples per
/// draw grows as the rotation nears exhaustion, which is fine for chat-sized
/// banks.
pub struct QuestionSource<R = StdRng> {
    bank: Arc<QuestionBank>,
    rng: R,
}

impl QuestionSource<StdRng> {
    /// Create a source seeded from OS entropy.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::with_rng(bank, StdRng::from_entropy())
    }
}

impl<R: Rng> QuestionSource<R> {
    /// Create a source with an explicit random number generator.
    pub fn with_rng(bank: Arc<QuestionBank>, rng: R) -> Self {
        Self { bank, rng }
    }

    /// The bank questions are drawn from.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Draw the next question and record its prompt in `asked`.
    ///
    /// When `asked` already covers every prompt in the bank it is cleared
    /// first, starting a new rotation.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionBankErrorKind::EmptyBank`] if the bank has no questions.
    pub fn draw(&mut self, asked: &mut HashSet<String>) -> Result<Question, QuestionBankError> {
        if self.bank.is_empty() {
            return Err(QuestionBankError::new(QuestionBankErrorKind::EmptyBank));
        }

        if asked.len() >= self.bank.rotation_len() {
            debug!(rotation = self.bank.rotation_len(), "Rotation exhausted, starting over");
            asked.clear();
        }

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let Some(candidate) = self.bank.questions().choose(&mut self.rng) else {
                return Err(QuestionBankError::new(QuestionBankErrorKind::EmptyBank));
            };
            if asked.insert(candidate.prompt().clone()) {
                trace!(attempts, asked = asked.len(), "Drew question");
                return Ok(candidate.clone());
            }
        }
    }
}
