//! The game session state machine.

use crate::{ChatEvent, Command, EngineConfig};
use derive_getters::Getters;
use quizbot_core::{GameMode, Question, QuestionBank, QuestionSource, SessionState};
use quizbot_error::{Rejection, SessionError, SessionErrorKind, SessionResult};
use rand::Rng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// A deferred "ask next question" request.
///
/// Carries the session epoch it was issued in so a round that ended (or was
/// replaced) in the meantime can recognise and drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct FollowUp {
    /// How long to wait before asking.
    delay: Duration,
    /// Session epoch at scheduling time.
    epoch: u64,
}

/// Effects of one engine turn: chat replies in order plus an optional follow-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Outcome {
    /// Messages to post, in order.
    replies: Vec<String>,
    /// Next-question request for the scheduler.
    follow_up: Option<FollowUp>,
}

impl Outcome {
    /// Outcome with a single reply.
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            replies: vec![text.into()],
            follow_up: None,
        }
    }

    fn and(mut self, text: impl Into<String>) -> Self {
        self.replies.push(text.into());
        self
    }

    fn then_ask(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }

    /// Whether the turn produced nothing at all.
    pub fn is_empty(&self) -> bool {
        self.replies.is_empty() && self.follow_up.is_none()
    }
}

/// Trivia game state machine for one channel.
///
/// Each call to [`GameEngine::handle`] or [`GameEngine::ask_next`] is one
/// atomic transition. The engine never performs I/O; callers deliver the
/// returned [`Outcome`].
///
/// # Scheduled questions after a reset
///
/// A scheduled "ask next question" that fires after `!end`, after a win, or
/// after a new round started is dropped: [`GameEngine::ask_next`] compares the
/// follow-up's epoch against the session's. The chat bot this engine replaces
/// let such timers re-open a question on an ended round; that is no longer
/// the case.
pub struct GameEngine<R = StdRng> {
    config: EngineConfig,
    source: QuestionSource<R>,
    state: SessionState,
}

impl GameEngine<StdRng> {
    /// Create an engine drawing from `bank` with an entropy-seeded RNG.
    pub fn new(config: EngineConfig, bank: Arc<QuestionBank>) -> Self {
        Self::with_source(config, QuestionSource::new(bank))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine around an existing question source.
    pub fn with_source(config: EngineConfig, source: QuestionSource<R>) -> Self {
        Self {
            config,
            source,
            state: SessionState::new(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Engine settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle one chat line. Text that is not a command produces an empty outcome.
    pub fn handle_event(&mut self, event: &ChatEvent) -> Outcome {
        match Command::parse(event.text()) {
            Some(command) => self.handle(event.user(), command),
            None => Outcome::default(),
        }
    }

    /// Apply one command from `user`.
    ///
    /// Rejections become a single chat reply; silent errors (empty answers)
    /// become an empty outcome.
    #[instrument(skip(self, command), fields(command = %command, epoch = self.state.epoch()))]
    pub fn handle(&mut self, user: &str, command: Command) -> Outcome {
        let result = match command {
            Command::Join => self.join(user),
            Command::StartMultiplayer => self.start_multiplayer(user),
            Command::StartSingle => self.start_single(user),
            Command::ShowScoreboard => self.scoreboard(),
            Command::RepeatQuestion => self.repeat_question(),
            Command::Answer(text) => self.answer(user, &text),
            Command::Pass => self.pass(),
            Command::End => self.end(user),
        };

        match result {
            Ok(outcome) => {
                debug!(phase = %self.state.phase(), "Command applied");
                outcome
            }
            Err(e) if e.kind().is_silent() => {
                debug!(error = %e, "Command dropped");
                Outcome::default()
            }
            Err(e) => {
                debug!(error = %e, "Command rejected");
                Outcome::reply(e.kind().to_string())
            }
        }
    }

    /// Pose the next question for a follow-up issued in `epoch`.
    ///
    /// Does nothing unless the same round is still running and waiting
    /// between questions.
    #[instrument(skip(self), fields(current_epoch = self.state.epoch()))]
    pub fn ask_next(&mut self, epoch: u64) -> Outcome {
        if epoch != self.state.epoch() || !self.state.is_active() || self.state.current().is_some()
        {
            warn!(phase = %self.state.phase(), "Dropping stale follow-up");
            return Outcome::default();
        }

        match self.pose_question() {
            Ok(text) => Outcome::reply(text),
            Err(e) => {
                error!(error = %e, "Failed to draw next question");
                Outcome::reply(e.kind().to_string())
            }
        }
    }

    fn join(&mut self, user: &str) -> SessionResult<Outcome> {
        if self.state.is_active() {
            return Err(Rejection::AlreadyInProgress {
                user: user.to_string(),
            }
            .into());
        }

        if self.state.join(user) {
            info!(user, players = self.state.scores().len(), "Player joined");
            Ok(Outcome::reply(format!("{} joined the game! 🎉", user)))
        } else {
            Ok(Outcome::reply(format!("{}, you're already in!", user)))
        }
    }

    fn start_multiplayer(&mut self, user: &str) -> SessionResult<Outcome> {
        if !self.config.is_owner(user) {
            return Err(SessionError::new(SessionErrorKind::Unauthorized {
                action: "start".to_string(),
            }));
        }
        if self.state.is_active() {
            return Err(Rejection::AlreadyRunning.into());
        }
        if self.state.scores().is_empty() {
            return Err(Rejection::NoPlayers.into());
        }

        let question = self.open_round(GameMode::Multiplayer)?;
        info!(players = self.state.scores().len(), "Multiplayer round started");
        Ok(Outcome::reply(format!(
            "🎮 The quiz begins! First to {} points wins!",
            self.config.winning_score()
        ))
        .and(question))
    }

    fn start_single(&mut self, user: &str) -> SessionResult<Outcome> {
        if self.state.is_active() {
            return Err(Rejection::AlreadyRunning.into());
        }

        let question = self.open_round(GameMode::SinglePlayer)?;
        self.state.join(user);
        info!(user, "Single-player round started");
        Ok(Outcome::reply(format!("🎯 {} started a single-player quiz!", user)).and(question))
    }

    fn scoreboard(&self) -> SessionResult<Outcome> {
        if self.state.scores().is_empty() {
            return Err(Rejection::NoPlayersYet.into());
        }

        let mut board = String::from("🏆 Current Scores:");
        for (rank, player) in self.state.ranked().into_iter().enumerate() {
            board.push_str(&format!(
                "\n{}. {} - {} points",
                rank + 1,
                player.name(),
                player.score()
            ));
        }
        Ok(Outcome::reply(board))
    }

    fn repeat_question(&self) -> SessionResult<Outcome> {
        match self.state.current() {
            Some(question) if self.state.is_active() => {
                Ok(Outcome::reply(question_text(question.prompt())))
            }
            _ => Err(Rejection::NoActiveQuestion.into()),
        }
    }

    fn answer(&mut self, user: &str, text: &str) -> SessionResult<Outcome> {
        if !self.state.is_active() {
            return Err(Rejection::NoActiveGame {
                user: user.to_string(),
            }
            .into());
        }
        let Some(question) = self.state.current() else {
            return Err(Rejection::QuestionPending.into());
        };

        let attempt = text.trim();
        if attempt.is_empty() {
            return Err(SessionError::new(SessionErrorKind::EmptyAnswerIgnored));
        }
        let multiplayer = self.state.mode() == GameMode::Multiplayer;
        if multiplayer && !self.state.has_player(user) {
            return Err(Rejection::NotAPlayer {
                user: user.to_string(),
            }
            .into());
        }

        if !question.matches(attempt) {
            debug!(user, "Wrong answer");
            return Ok(Outcome::reply(format!(
                "❌ Sorry, {}, that's not correct!",
                user
            )));
        }

        let answer = question.answer().clone();
        self.state.take_current();
        let outcome = Outcome::reply(format!(
            "✅ Correct, {}! The answer was \"{}\".",
            user, answer
        ));

        if multiplayer {
            let score = self.state.award(user);
            info!(user, ?score, "Point awarded");

            if let Some(winner) = self.state.leader_at(*self.config.winning_score()) {
                let announcement = format!(
                    "🏆 {} wins the game with {} points!",
                    winner.name(),
                    winner.score()
                );
                info!(winner = %winner.name(), score = winner.score(), "Round won");
                self.state.reset();
                return Ok(outcome.and(announcement));
            }
        }

        Ok(outcome.then_ask(self.next_follow_up()))
    }

    fn pass(&mut self) -> SessionResult<Outcome> {
        if !self.state.is_active() {
            return Err(Rejection::NothingToSkip.into());
        }
        let Some(question) = self.state.take_current() else {
            return Err(Rejection::NothingToSkip.into());
        };

        debug!(prompt = %question.prompt(), "Question skipped");
        Ok(Outcome::reply(format!(
            "⏭️ Skipped! The answer was \"{}\".",
            question.answer()
        ))
        .then_ask(self.next_follow_up()))
    }

    fn end(&mut self, user: &str) -> SessionResult<Outcome> {
        if !self.config.is_owner(user) {
            return Err(SessionError::new(SessionErrorKind::Unauthorized {
                action: "end".to_string(),
            }));
        }

        let was_active = self.state.is_active();
        self.state.reset();
        info!(was_active, "Round ended by owner");
        Ok(Outcome::reply(
            "🛑 Game ended by streamer. Type !playquiz to join next round!",
        ))
    }

    /// Start a round in `mode` with its first question.
    ///
    /// The question is drawn before the round is marked active, so a failed
    /// draw leaves the session exactly as it was.
    fn open_round(&mut self, mode: GameMode) -> SessionResult<String> {
        let question = self.draw()?;
        self.state.begin_round(mode);
        Ok(self.open(question))
    }

    /// Draw a question, open it, and return its chat text.
    fn pose_question(&mut self) -> SessionResult<String> {
        let question = self.draw()?;
        Ok(self.open(question))
    }

    fn draw(&mut self) -> SessionResult<Question> {
        self.source.draw(self.state.asked_mut()).map_err(|e| {
            error!(error = %e, "Question draw failed");
            SessionError::new(SessionErrorKind::EmptyBank)
        })
    }

    fn open(&mut self, question: Question) -> String {
        let text = question_text(question.prompt());
        debug!(prompt = %question.prompt(), "Question posed");
        self.state.set_current(question);
        text
    }

    fn next_follow_up(&self) -> FollowUp {
        FollowUp {
            delay: *self.config.next_question_delay(),
            epoch: self.state.epoch(),
        }
    }
}

fn question_text(prompt: &str) -> String {
    format!("🧠 Quiz Question: {}", prompt)
}
