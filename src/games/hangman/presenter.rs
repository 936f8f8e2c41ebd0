//! Projects round state onto the letter controls and the gallows drawing.
//! Nothing here decides a rule; it only reads what the round exposes.

use std::collections::BTreeMap;

use tracing::debug;

use super::gallows::Illustration;
use super::round::Round;
use super::word::Letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Available,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterControl {
    pub state: KeyState,
    pub disabled: bool,
}

impl Default for LetterControl {
    fn default() -> Self {
        Self {
            state: KeyState::Available,
            disabled: false,
        }
    }
}

pub struct Presenter<I: Illustration> {
    controls: BTreeMap<Letter, LetterControl>,
    illustration: I,
    drawn_failures: u8,
}

impl<I: Illustration> Presenter<I> {
    pub fn new(illustration: I) -> Self {
        Self {
            controls: Letter::ALPHABET
                .iter()
                .map(|&l| (l, LetterControl::default()))
                .collect(),
            illustration,
            drawn_failures: 0,
        }
    }

    /// Called when a round starts: fresh controls, blank drawing.
    pub fn reset(&mut self, round: &Round) {
        self.illustration.clear();
        self.drawn_failures = 0;
        for control in self.controls.values_mut() {
            *control = LetterControl::default();
        }
        self.sync(round);
    }

    pub fn sync(&mut self, round: &Round) {
        for (letter, control) in self.controls.iter_mut() {
            // Latest outcome wins; the positional policy allows retries.
            control.state = match round.guesses().iter().rev().find(|g| g.letter == *letter) {
                Some(g) if g.hit => KeyState::Correct,
                Some(_) => KeyState::Incorrect,
                None => KeyState::Available,
            };
            control.disabled = !round.can_guess(*letter);
        }

        while self.drawn_failures < round.failures() {
            self.illustration.add_part();
            self.drawn_failures += 1;
            debug!(parts = self.illustration.parts(), "illustration advanced");
        }
    }

    pub fn control(&self, letter: Letter) -> LetterControl {
        self.controls.get(&letter).copied().unwrap_or_default()
    }

    pub fn controls(&self) -> impl Iterator<Item = (Letter, LetterControl)> + '_ {
        self.controls.iter().map(|(&l, &c)| (l, c))
    }

    pub fn illustration(&self) -> &I {
        &self.illustration
    }
}
