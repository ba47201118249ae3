//! Session (game engine) errors.
//!
//! Every kind here is recoverable and user-facing. The `Display` of
//! [`SessionErrorKind`] is the exact sentence posted back to chat.

/// Result type for game engine operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// A command whose precondition does not hold in the current session state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// Join attempted while a round is running.
    #[display("{}, game is already in progress!", user)]
    AlreadyInProgress {
        /// User who tried to join.
        user: String,
    },

    /// Start attempted while a round is running.
    #[display("Game is already running!")]
    AlreadyRunning,

    /// Multiplayer start with nobody joined.
    #[display("No players joined yet! Type !playquiz to join the game.")]
    NoPlayers,

    /// Scoreboard requested with nobody joined.
    #[display("📊 No players yet! Use !playquiz to join.")]
    NoPlayersYet,

    /// Repeat requested with no open question.
    #[display("No active question right now.")]
    NoActiveQuestion,

    /// Answer submitted outside a round.
    #[display("{}, no active game right now. Type !playquiz to join and !start to begin.", user)]
    NoActiveGame {
        /// User who answered.
        user: String,
    },

    /// Answer submitted while the next question is still scheduled.
    #[display("No active question yet. Wait for the next one!")]
    QuestionPending,

    /// Pass requested with no open question.
    #[display("No active question to skip.")]
    NothingToSkip,

    /// Multiplayer answer from someone who never joined.
    #[display("{}, you're not in this round. Wait for the next one!", user)]
    NotAPlayer {
        /// User who answered.
        user: String,
    },
}

/// Specific session error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum SessionErrorKind {
    /// Precondition not met; reported to chat.
    #[display("{}", _0)]
    #[from]
    InvalidCommandForState(Rejection),

    /// Owner-only command from someone else; reported to chat.
    #[display("Only the streamer can {} the game!", action)]
    Unauthorized {
        /// Verb of the refused action ("start", "end").
        action: String,
    },

    /// Whitespace-only answer; dropped without a reply.
    #[display("Empty answer ignored")]
    EmptyAnswerIgnored,

    /// No question could be drawn.
    #[display("No questions are available right now.")]
    EmptyBank,
}

impl SessionErrorKind {
    /// Whether this error should be dropped without telling chat.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::EmptyAnswerIgnored)
    }
}

/// Session error with location tracking.
///
/// # Examples
///
/// ```
/// use quizbot_error::{Rejection, SessionError, SessionErrorKind};
///
/// let err = SessionError::new(Rejection::NothingToSkip.into());
/// assert_eq!(err.kind().to_string(), "No active question to skip.");
/// assert!(!err.kind().is_silent());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    kind: SessionErrorKind,
    line: u32,
    file: &'static str,
}

impl SessionError {
    /// Create a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SessionErrorKind {
        &self.kind
    }
}

impl From<Rejection> for SessionError {
    #[track_caller]
    fn from(rejection: Rejection) -> Self {
        Self::new(SessionErrorKind::InvalidCommandForState(rejection))
    }
}
