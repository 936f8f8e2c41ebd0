pub mod hangman;
pub mod macros;

use std::pin::Pin;
use anyhow::Result;
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;
use crate::config::SpeechConfig;
use crate::games::hangman::{Policy, Vocabulary};
use crate::register_games;

/// Metadata about a game mode
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub policy: Policy,
}

/// Everything a game needs from the session that launches it
pub struct Session {
    pub vocabulary: Vocabulary,
    pub speech: SpeechConfig,
    pub rng: StdRng,
}

/// Game initializer function - creates and runs the game, then hands the terminal back
pub type GameInitializer = fn(Session, DefaultTerminal)
    -> Pin<Box<dyn std::future::Future<Output = Result<DefaultTerminal>> + Send>>;

/// Registry entry containing metadata and initializer
pub struct GameRegistry {
    pub info: GameInfo,
    pub initializer: GameInitializer,
}

// One entry per guess-resolution policy
register_games! {
    classic => {
        policy: Policy::SetMembership,
        name: "Classic",
        description: "Each letter reveals every place it appears, and can be tried once"
    },
    sequence => {
        policy: Policy::PositionalSequence,
        name: "Left to right",
        description: "Uncover the word in order, one letter at a time, retries allowed"
    }
}
