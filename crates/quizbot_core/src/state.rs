//! Mutable state of one channel's game session.

use crate::Question;
use derive_getters::Getters;
use std::collections::HashSet;

/// Which kind of round is (or was last) set up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameMode {
    /// No round configured.
    #[default]
    #[display("none")]
    None,
    /// Joined players race to the winning score.
    #[display("multiplayer")]
    Multiplayer,
    /// One player answers until the owner ends the round.
    #[display("single-player")]
    SinglePlayer,
}

/// Where the session sits in the round lifecycle.
///
/// Derived from the state fields rather than stored. The transient moment
/// between a start command and its first question never escapes a command
/// turn, so it has no variant of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Phase {
    /// No round and nobody joined.
    #[display("idle")]
    Idle,
    /// Players joined, waiting for the owner to start.
    #[display("awaiting start")]
    AwaitingStart,
    /// A question is open.
    #[display("awaiting answer")]
    AwaitingAnswer,
    /// Round running, next question scheduled.
    #[display("between questions")]
    BetweenQuestions,
}

/// A player and their score.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerScore {
    /// Display name as it arrived from chat.
    name: String,
    /// Points earned this round.
    score: u32,
}

/// Authoritative state of one game.
///
/// Invariants:
/// - `current` is absent whenever the session is inactive
/// - scores keep join order
/// - `epoch` only ever grows; it changes on every round start and reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    active: bool,
    mode: GameMode,
    scores: Vec<PlayerScore>,
    current: Option<Question>,
    asked: HashSet<String>,
    epoch: u64,
}

impl SessionState {
    /// Create an empty, idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a round is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Scores in join order.
    pub fn scores(&self) -> &[PlayerScore] {
        &self.scores
    }

    /// Open question, if any.
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Prompts used in the current rotation.
    pub fn asked(&self) -> &HashSet<String> {
        &self.asked
    }

    /// Mutable access to the rotation record for drawing.
    pub fn asked_mut(&mut self) -> &mut HashSet<String> {
        &mut self.asked
    }

    /// Generation counter for scheduled follow-ups.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Lifecycle phase derived from the fields.
    pub fn phase(&self) -> Phase {
        match (self.active, self.current.is_some()) {
            (true, true) => Phase::AwaitingAnswer,
            (true, false) => Phase::BetweenQuestions,
            (false, _) if self.scores.is_empty() => Phase::Idle,
            (false, _) => Phase::AwaitingStart,
        }
    }

    /// Whether `user` has a score entry.
    pub fn has_player(&self, user: &str) -> bool {
        self.scores.iter().any(|p| p.name == user)
    }

    /// Score of `user`, if they joined.
    pub fn score_of(&self, user: &str) -> Option<u32> {
        self.scores.iter().find(|p| p.name == user).map(|p| p.score)
    }

    /// Add `user` at zero points. Returns false if they were already present.
    pub fn join(&mut self, user: &str) -> bool {
        if self.has_player(user) {
            return false;
        }
        self.scores.push(PlayerScore {
            name: user.to_string(),
            score: 0,
        });
        true
    }

    /// Add one point to `user`, returning the new score.
    pub fn award(&mut self, user: &str) -> Option<u32> {
        let player = self.scores.iter_mut().find(|p| p.name == user)?;
        player.score = player.score.saturating_add(1);
        Some(player.score)
    }

    /// First player in join order whose score reached `threshold`.
    ///
    /// Join order is the tie-break; with one increment per command only one
    /// player can cross the threshold per check.
    pub fn leader_at(&self, threshold: u32) -> Option<&PlayerScore> {
        self.scores.iter().find(|p| p.score >= threshold)
    }

    /// Scores sorted by descending score; ties keep join order.
    pub fn ranked(&self) -> Vec<&PlayerScore> {
        let mut ranked: Vec<&PlayerScore> = self.scores.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Mark a round as running in `mode` and open a new epoch.
    pub fn begin_round(&mut self, mode: GameMode) {
        self.active = true;
        self.mode = mode;
        self.epoch += 1;
    }

    /// Pose `question`. Ignored while inactive.
    pub fn set_current(&mut self, question: Question) {
        if self.active {
            self.current = Some(question);
        }
    }

    /// Close the open question, returning it.
    pub fn take_current(&mut self) -> Option<Question> {
        self.current.take()
    }

    /// Return to an empty, idle session in a new epoch.
    pub fn reset(&mut self) {
        *self = Self {
            epoch: self.epoch + 1,
            ..Self::default()
        };
    }
}
