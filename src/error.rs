use std::path::PathBuf;

use crate::games::hangman::{Letter, Status};

/// Errors raised while building a vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("vocabulary is empty")]
    Empty,

    #[error("invalid word {0:?}: only ASCII letters are allowed")]
    InvalidWord(String),

    #[error("failed to read vocabulary file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Why a guess left the round untouched.
///
/// These never surface to the player as failures; the round reports them
/// as `GuessOutcome::Ignored` and the controller only logs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("'{0}' is not a letter A-Z")]
    InvalidLetter(char),

    #[error("letter '{0}' already guessed")]
    AlreadyGuessed(Letter),

    #[error("round is over ({0:?})")]
    NoRoundActive(Status),
}

/// A round snapshot whose fields contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("inconsistent round snapshot: {0}")]
pub struct SnapshotError(pub String);
