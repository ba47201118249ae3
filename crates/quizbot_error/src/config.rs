//! Quiz configuration errors.

use std::path::PathBuf;

/// Why a quiz configuration could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The config file could not be read.
    #[display("Failed to read config file {}: {}", path.display(), message)]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The TOML text does not describe a quiz configuration.
    #[display("Failed to parse config: {}", _0)]
    Toml(String),

    /// A setting parsed but is unusable.
    #[display("Invalid `{}`: {}", field, reason)]
    Invalid {
        /// Offending setting.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use quizbot_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::invalid("winning_score", "must be at least 1");
    /// assert!(matches!(
    ///     err.kind(),
    ///     ConfigErrorKind::Invalid { field: "winning_score", .. }
    /// ));
    /// assert!(err.to_string().contains("Invalid `winning_score`"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`ConfigErrorKind::Invalid`].
    #[track_caller]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            field,
            reason: reason.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
