//! Chat command parsing.

use derive_getters::Getters;

/// A chat line as delivered by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ChatEvent {
    /// Sender display name.
    user: String,
    /// Raw message text.
    text: String,
}

impl ChatEvent {
    /// Create a new chat event.
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
        }
    }
}

/// Commands recognised by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Command {
    /// Join the next multiplayer round.
    #[display("join")]
    Join,
    /// Owner starts a multiplayer round.
    #[display("start")]
    StartMultiplayer,
    /// Start a single-player round.
    #[display("single")]
    StartSingle,
    /// Show the ranked scores.
    #[display("scoreboard")]
    ShowScoreboard,
    /// Repeat the open question.
    #[display("question")]
    RepeatQuestion,
    /// Attempt an answer.
    #[display("answer")]
    Answer(String),
    /// Skip the open question.
    #[display("pass")]
    Pass,
    /// Owner ends the round.
    #[display("end")]
    End,
}

impl Command {
    /// Parse a chat line. Keywords are case-sensitive; unknown text yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quizbot_engine::Command;
    ///
    /// assert_eq!(Command::parse("  !playquiz "), Some(Command::Join));
    /// assert_eq!(Command::parse("!answer Paris"), Some(Command::Answer("Paris".into())));
    /// assert_eq!(Command::parse("!Start"), None);
    /// assert_eq!(Command::parse("hello chat"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (keyword, rest) = match text.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (text, ""),
        };

        let command = match keyword {
            "!answer" => Self::Answer(rest.to_string()),
            _ if !rest.is_empty() => return None,
            "!playquiz" | "!play" => Self::Join,
            "!start" => Self::StartMultiplayer,
            "!single" => Self::StartSingle,
            "!scoreboard" => Self::ShowScoreboard,
            "!question" => Self::RepeatQuestion,
            "!pass" => Self::Pass,
            "!end" => Self::End,
            _ => return None,
        };
        Some(command)
    }
}
