//! Hangman game module
pub mod collaborators;
pub mod gallows;
pub mod game;
pub mod presenter;
pub mod renderer;
pub mod round;
pub mod word;

pub use collaborators::{Collaborators, Effect, Event};
pub use gallows::{Gallows, Illustration};
pub use game::HangmanGame;
pub use presenter::{KeyState, LetterControl, Presenter};
pub use round::{Guess, GuessOutcome, Policy, Round, Status, FAILURE_LIMIT, MASK_CHAR};
pub use word::{Letter, Vocabulary, Word};
