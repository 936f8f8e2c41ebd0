pub mod core {
	pub mod engine;
	pub mod game;
	pub mod menu;
}

pub mod cli;
pub mod config;
pub mod error;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{Context, EffectHandler, Game};
pub use crate::games::hangman::{GuessOutcome, HangmanGame, Policy, Round, Status, Vocabulary, Word};
