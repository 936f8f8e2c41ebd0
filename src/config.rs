use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ConfigError;
use crate::games::hangman::{Policy, Vocabulary};

/// Speech synthesis settings for the pronunciation helper.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Tried in order; the word is appended as the last argument.
    pub commands: Vec<String>,
    pub timeout_ms: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        SpeechConfig {
            enabled: true,
            commands: vec![
                "espeak-ng -v en-gb -s 130".to_string(),
                "espeak -v en-gb -s 130".to_string(),
                "say -v Daniel -r 150".to_string(),
            ],
            timeout_ms: 5_000,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Used when no game mode is picked on the command line.
    pub policy: Option<Policy>,
    /// Word list file; the built-in list when unset.
    pub vocabulary: Option<PathBuf>,
    pub log_file: PathBuf,
    pub seed: Option<u64>,
    pub speech: SpeechConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            policy: None,
            vocabulary: None,
            log_file: PathBuf::from("hangterm.log"),
            seed: None,
            speech: SpeechConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speech.enabled && self.speech.commands.iter().all(|c| c.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "speech.commands must name at least one program".to_string(),
            ));
        }
        if self.speech.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "speech.timeout_ms must be > 0".to_string(),
            ));
        }
        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation("log_file must not be empty".to_string()));
        }
        Ok(())
    }

    /// The configured word list, or the built-in one.
    pub fn vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        match &self.vocabulary {
            Some(path) => Ok(Vocabulary::load(path)?),
            None => Ok(Vocabulary::default()),
        }
    }
}
