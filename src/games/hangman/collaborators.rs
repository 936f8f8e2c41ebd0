//! Hint and pronunciation helpers. Both only read the target word and
//! report back display text; they never touch the round.

use std::process::Stdio;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::SpeechConfig;
use crate::core::game::{BoxFuture, EffectHandler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Speak the (lowercase) word aloud.
    Pronounce(String),
    /// Look up a hint for the (lowercase) word.
    Hint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Hint { word: String, text: String },
    Notice(String),
}

pub const SPEECH_UNAVAILABLE: &str = "Speech synthesis is not available on this system.";
pub const NO_HINT: &str = "No hint available for this word.";

const CATEGORIES: &[(&str, &[&str])] = &[
    ("a fruit", &["apple", "banana", "orange", "grape", "lemon", "peach", "cherry", "melon"]),
    ("a building or an object", &["house", "school", "computer", "window"]),
    ("a job or a role", &["doctor", "teacher", "student"]),
    ("an animal", &["elephant", "giraffe", "tiger", "lion", "zebra", "monkey", "bear"]),
    ("a place in nature", &["ocean", "mountain", "forest", "desert", "river", "lake", "beach"]),
    ("something to eat", &["pizza", "burger", "pasta", "salad", "soup", "cake", "cookie"]),
];

/// Hint text for `word`, falling back to a generic sentence.
pub fn hint_for(word: &str) -> String {
    let word = word.to_ascii_lowercase();
    CATEGORIES
        .iter()
        .find(|(_, words)| words.contains(&word.as_str()))
        .map(|(category, _)| format!("Hint: it's {category} ({} letters).", word.len()))
        .unwrap_or_else(|| NO_HINT.to_string())
}

#[derive(Debug, Clone)]
pub struct Collaborators {
    speech: SpeechConfig,
}

impl Collaborators {
    pub fn new(speech: SpeechConfig) -> Self {
        Self { speech }
    }

    async fn pronounce(speech: SpeechConfig, word: String) -> Option<Event> {
        if !speech.enabled {
            return Some(Event::Notice(SPEECH_UNAVAILABLE.to_string()));
        }
        let limit = Duration::from_millis(speech.timeout_ms);

        for command in &speech.commands {
            let mut parts = command.split_whitespace();
            let Some(program) = parts.next() else { continue };

            let mut cmd = tokio::process::Command::new(program);
            cmd.args(parts)
                .arg(&word)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true);

            match tokio::time::timeout(limit, cmd.status()).await {
                Ok(Ok(status)) if status.success() => {
                    info!(program, "pronounced word");
                    return None;
                }
                Ok(Ok(status)) => debug!(program, %status, "speech command failed"),
                Ok(Err(e)) => debug!(program, error = %e, "speech command unavailable"),
                Err(_) => warn!(program, "speech command timed out"),
            }
        }

        warn!("no speech command succeeded");
        Some(Event::Notice(SPEECH_UNAVAILABLE.to_string()))
    }
}

impl EffectHandler<Effect, Event> for Collaborators {
    fn handle(&self, effect: Effect) -> BoxFuture<Option<Event>> {
        match effect {
            Effect::Pronounce(word) => Box::pin(Self::pronounce(self.speech.clone(), word)),
            Effect::Hint(word) => Box::pin(async move {
                let text = hint_for(&word);
                Some(Event::Hint { word, text })
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speech(commands: &[&str]) -> SpeechConfig {
        SpeechConfig {
            enabled: true,
            commands: commands.iter().map(|c| c.to_string()).collect(),
            timeout_ms: 2_000,
        }
    }

    #[test]
    fn test_hint_known_word() {
        assert_eq!(hint_for("tiger"), "Hint: it's an animal (5 letters).");
        assert_eq!(hint_for("COOKIE"), "Hint: it's something to eat (6 letters).");
    }

    #[test]
    fn test_hint_unknown_word_falls_back() {
        assert_eq!(hint_for("quasar"), NO_HINT);
    }

    #[tokio::test]
    async fn test_hint_effect_returns_event() {
        let c = Collaborators::new(speech(&[]));
        let event = c.handle(Effect::Hint("lake".into())).await;
        assert_eq!(
            event,
            Some(Event::Hint {
                word: "lake".into(),
                text: "Hint: it's a place in nature (4 letters).".into(),
            })
        );
    }

    #[tokio::test]
    async fn test_missing_speech_commands_fall_back_to_notice() {
        let c = Collaborators::new(speech(&["definitely-not-a-speech-tool-xyz", ""]));
        let event = c.handle(Effect::Pronounce("lake".into())).await;
        assert_eq!(event, Some(Event::Notice(SPEECH_UNAVAILABLE.into())));
    }

    #[tokio::test]
    async fn test_disabled_speech_reports_notice() {
        let mut config = speech(&["true"]);
        config.enabled = false;
        let c = Collaborators::new(config);
        let event = c.handle(Effect::Pronounce("lake".into())).await;
        assert_eq!(event, Some(Event::Notice(SPEECH_UNAVAILABLE.into())));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_first_working_command_wins() {
        let c = Collaborators::new(speech(&["definitely-not-a-speech-tool-xyz", "true"]));
        assert_eq!(c.handle(Effect::Pronounce("lake".into())).await, None);
    }
}
