//! Process configuration, read once at startup.

use derive_getters::Getters;
use quizbot_engine::{DEFAULT_NEXT_QUESTION_DELAY, DEFAULT_WINNING_SCORE, EngineConfig};
use quizbot_error::{ConfigError, ConfigErrorKind, QuizResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Environment variable overriding `channel`.
const ENV_CHANNEL: &str = "QUIZBOT_CHANNEL";
/// Environment variable overriding `owner`.
const ENV_OWNER: &str = "QUIZBOT_OWNER";
/// Environment variable overriding `questions`.
const ENV_QUESTIONS: &str = "QUIZBOT_QUESTIONS";

/// Configuration for one quiz channel.
///
/// # Examples
///
/// ```
/// use quizbot::QuizConfigBuilder;
///
/// let config = QuizConfigBuilder::default()
///     .channel("#Streamer")
///     .build()
///     .unwrap();
/// assert_eq!(config.owner_name(), "Streamer");
/// assert_eq!(*config.winning_score(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct QuizConfig {
    /// Channel the bot plays in.
    #[serde(default)]
    #[builder(default)]
    channel: String,

    /// Owner allowed to start and end rounds; defaults to the channel name.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    owner: Option<String>,

    /// Question bank JSON file.
    #[serde(default = "default_questions")]
    #[builder(default = "default_questions()")]
    questions: PathBuf,

    /// Pause before the next question, in milliseconds.
    #[serde(default = "default_next_question_delay_ms")]
    #[builder(default = "default_next_question_delay_ms()")]
    next_question_delay_ms: u64,

    /// Multiplayer win threshold.
    #[serde(default = "default_winning_score")]
    #[builder(default = "default_winning_score()")]
    winning_score: u32,
}

fn default_questions() -> PathBuf {
    PathBuf::from("questions.json")
}

fn default_next_question_delay_ms() -> u64 {
    DEFAULT_NEXT_QUESTION_DELAY.as_millis() as u64
}

fn default_winning_score() -> u32 {
    DEFAULT_WINNING_SCORE
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            channel: String::new(),
            owner: None,
            questions: default_questions(),
            next_question_delay_ms: default_next_question_delay_ms(),
            winning_score: default_winning_score(),
        }
    }
}

impl QuizConfig {
    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> QuizResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;

        let config = Self::from_toml(&content)?;
        debug!(channel = %config.channel, "Loaded config file");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> QuizResult<Self> {
        Ok(toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Toml(e.to_string())))?)
    }

    /// Apply `QUIZBOT_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup (environment-shaped keys).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(channel) = lookup(ENV_CHANNEL) {
            self.channel = channel;
        }
        if let Some(owner) = lookup(ENV_OWNER) {
            self.owner = Some(owner);
        }
        if let Some(questions) = lookup(ENV_QUESTIONS) {
            self.questions = PathBuf::from(questions);
        }
    }

    /// Replace the channel.
    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.channel = channel.into();
    }

    /// Replace the question bank path.
    pub fn set_questions(&mut self, questions: impl Into<PathBuf>) {
        self.questions = questions.into();
    }

    /// Check the settings the engine depends on.
    ///
    /// # Errors
    ///
    /// Fails when no channel is set or the winning score is zero.
    pub fn validate(&self) -> QuizResult<()> {
        if self.channel.trim_start_matches('#').trim().is_empty() {
            return Err(ConfigError::invalid(
                "channel",
                format!("must be set (config file or {})", ENV_CHANNEL),
            )
            .into());
        }
        if self.winning_score == 0 {
            return Err(ConfigError::invalid("winning_score", "must be at least 1").into());
        }
        Ok(())
    }

    /// Owner display name: the explicit owner, or the channel without `#`.
    pub fn owner_name(&self) -> String {
        match &self.owner {
            Some(owner) => owner.clone(),
            None => self.channel.trim_start_matches('#').to_string(),
        }
    }

    /// Engine settings derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.owner_name())
            .with_winning_score(self.winning_score)
            .with_next_question_delay(Duration::from_millis(self.next_question_delay_ms))
    }
}
