//! Engine tuning.

use derive_getters::Getters;
use derive_setters::Setters;
use std::time::Duration;

/// Score that ends a multiplayer round.
pub const DEFAULT_WINNING_SCORE: u32 = 5;

/// Pause between a solved or skipped question and the next one.
pub const DEFAULT_NEXT_QUESTION_DELAY: Duration = Duration::from_secs(3);

/// Settings the engine reads once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Channel owner allowed to start and end multiplayer rounds.
    owner: String,
    /// Multiplayer win threshold.
    winning_score: u32,
    /// Scheduler delay before the next question.
    next_question_delay: Duration,
}

impl EngineConfig {
    /// Default settings for the given owner.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            winning_score: DEFAULT_WINNING_SCORE,
            next_question_delay: DEFAULT_NEXT_QUESTION_DELAY,
        }
    }

    /// Case-insensitive comparison of a display name against the owner.
    pub fn is_owner(&self, user: &str) -> bool {
        user.to_lowercase() == self.owner.to_lowercase()
    }
}
