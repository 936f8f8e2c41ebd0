use serde::{Deserialize, Serialize};

use super::word::{Letter, Word};
use crate::error::{Rejection, SnapshotError};

/// Wrong guesses tolerated before the round is lost.
pub const FAILURE_LIMIT: u8 = 6;

/// Placeholder shown for undisclosed positions.
pub const MASK_CHAR: char = '_';

/// How a guess is resolved against the target word.
///
/// The two rule sets are not interchangeable: a controller picks one and
/// every round it starts uses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// A letter reveals every position holding it and can be tried once.
    #[default]
    #[value(name = "set")]
    #[serde(alias = "set")]
    SetMembership,
    /// The word is uncovered left to right, one position per correct guess.
    /// Letters may be retried freely.
    #[value(name = "sequence")]
    #[serde(alias = "sequence")]
    PositionalSequence,
}

impl Policy {
    pub fn label(self) -> &'static str {
        match self {
            Policy::SetMembership => "Classic",
            Policy::PositionalSequence => "Left to right",
        }
    }

    /// How guesses resolve, one line per rule.
    pub fn rules(self) -> &'static [&'static str] {
        match self {
            Policy::SetMembership => &[
                "A correct letter shows up everywhere it appears.",
                "Each letter can be tried once, right or wrong.",
                "Win by finding every distinct letter.",
            ],
            Policy::PositionalSequence => &[
                "Guess the word from left to right.",
                "Only the next hidden letter counts as correct.",
                "Letters may be tried again after a miss.",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub letter: Letter,
    pub hit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// `revealed` positions were disclosed by this guess.
    Correct { revealed: usize },
    /// `failures` is the count after this guess.
    Incorrect { failures: u8 },
    Ignored(Rejection),
}

/// One play-through from word selection to win or loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundSnapshot")]
pub struct Round {
    word: Word,
    policy: Policy,
    revealed: Vec<bool>,
    guesses: Vec<Guess>,
    cursor: usize,
    failures: u8,
    status: Status,
}

#[derive(Deserialize)]
struct RoundSnapshot {
    word: Word,
    policy: Policy,
    revealed: Vec<bool>,
    guesses: Vec<Guess>,
    cursor: usize,
    failures: u8,
    status: Status,
}

impl TryFrom<RoundSnapshot> for Round {
    type Error = SnapshotError;

    fn try_from(snap: RoundSnapshot) -> Result<Self, Self::Error> {
        let invalid = |msg: &str| Err(SnapshotError(msg.to_string()));
        let len = snap.word.len();

        if snap.revealed.len() != len {
            return invalid("revealed does not match word length");
        }
        let misses = snap.guesses.iter().filter(|g| !g.hit).count();
        if usize::from(snap.failures) != misses || snap.failures > FAILURE_LIMIT {
            return invalid("failures do not match missed guesses");
        }

        match snap.policy {
            Policy::SetMembership => {
                if snap.cursor != 0 {
                    return invalid("cursor is only used left to right");
                }
                for (i, g) in snap.guesses.iter().enumerate() {
                    if g.hit != snap.word.contains(g.letter) {
                        return invalid("guess result disagrees with the word");
                    }
                    if snap.guesses[..i].iter().any(|p| p.letter == g.letter) {
                        return invalid("letter guessed twice");
                    }
                }
                let shown = snap.word.letters().map(|l| {
                    snap.guesses.iter().any(|g| g.hit && g.letter == l)
                });
                if !shown.eq(snap.revealed.iter().copied()) {
                    return invalid("revealed positions disagree with guesses");
                }
            }
            Policy::PositionalSequence => {
                if snap.cursor > len {
                    return invalid("cursor past the end of the word");
                }
                let hits = snap.guesses.iter().filter(|g| g.hit).map(|g| g.letter);
                if !hits.eq(snap.word.letters().take(snap.cursor)) {
                    return invalid("hits do not spell the uncovered prefix");
                }
                if !(0..len).map(|i| i < snap.cursor).eq(snap.revealed.iter().copied()) {
                    return invalid("revealed positions disagree with cursor");
                }
            }
        }

        let round = Round {
            word: snap.word,
            policy: snap.policy,
            revealed: snap.revealed,
            guesses: snap.guesses,
            cursor: snap.cursor,
            failures: snap.failures,
            status: Status::InProgress,
        };
        let expected = if round.failures >= FAILURE_LIMIT {
            Status::Lost
        } else if round.is_complete() {
            Status::Won
        } else {
            Status::InProgress
        };
        if expected != snap.status {
            return invalid("status disagrees with progress");
        }
        Ok(Round { status: expected, ..round })
    }
}

impl Round {
    pub fn new(word: Word, policy: Policy) -> Self {
        Self {
            revealed: vec![false; word.len()],
            word,
            policy,
            guesses: Vec::new(),
            cursor: 0,
            failures: 0,
            status: Status::InProgress,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn failures(&self) -> u8 {
        self.failures
    }

    pub fn failure_limit(&self) -> u8 {
        FAILURE_LIMIT
    }

    pub fn remaining_failures(&self) -> u8 {
        FAILURE_LIMIT.saturating_sub(self.failures)
    }

    /// Index of the next undisclosed position under the positional policy.
    /// Always 0 under set membership.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Whether a guess of `letter` would be accepted right now.
    pub fn can_guess(&self, letter: Letter) -> bool {
        self.check(letter).is_ok()
    }

    fn check(&self, letter: Letter) -> Result<(), Rejection> {
        if self.status.is_terminal() {
            return Err(Rejection::NoRoundActive(self.status));
        }
        match self.policy {
            Policy::SetMembership if self.guesses.iter().any(|g| g.letter == letter) => {
                Err(Rejection::AlreadyGuessed(letter))
            }
            _ => Ok(()),
        }
    }

    pub fn submit_guess(&mut self, input: char) -> GuessOutcome {
        if self.status.is_terminal() {
            return GuessOutcome::Ignored(Rejection::NoRoundActive(self.status));
        }
        let letter = match Letter::try_from(input) {
            Ok(letter) => letter,
            Err(c) => return GuessOutcome::Ignored(Rejection::InvalidLetter(c)),
        };
        if let Err(rejection) = self.check(letter) {
            return GuessOutcome::Ignored(rejection);
        }

        let revealed = match self.policy {
            Policy::SetMembership => self.reveal_all(letter),
            Policy::PositionalSequence => self.reveal_next(letter),
        };
        self.guesses.push(Guess {
            letter,
            hit: revealed > 0,
        });

        if revealed == 0 {
            self.failures += 1;
            if self.failures >= FAILURE_LIMIT {
                self.status = Status::Lost;
            }
            return GuessOutcome::Incorrect {
                failures: self.failures,
            };
        }

        if self.is_complete() {
            self.status = Status::Won;
        }
        GuessOutcome::Correct { revealed }
    }

    fn reveal_all(&mut self, letter: Letter) -> usize {
        let mut count = 0;
        for (i, l) in self.word.letters().enumerate() {
            if l == letter && !self.revealed[i] {
                self.revealed[i] = true;
                count += 1;
            }
        }
        count
    }

    fn reveal_next(&mut self, letter: Letter) -> usize {
        match self.word.letter_at(self.cursor) {
            Some(next) if next == letter => {
                self.revealed[self.cursor] = true;
                self.cursor += 1;
                1
            }
            _ => 0,
        }
    }

    fn is_complete(&self) -> bool {
        match self.policy {
            Policy::SetMembership => self.word.letters().all(|l| {
                self.guesses.iter().any(|g| g.hit && g.letter == l)
            }),
            Policy::PositionalSequence => self.cursor == self.word.len(),
        }
    }

    pub fn display_mask(&self) -> String {
        self.word
            .letters()
            .zip(&self.revealed)
            .map(|(l, &shown)| if shown { l.as_char() } else { MASK_CHAR })
            .collect()
    }

    pub fn status_text(&self) -> String {
        match self.status {
            Status::InProgress => format!("Wrong guesses: {}/{}", self.failures, FAILURE_LIMIT),
            Status::Won => "Congratulations! You won!".to_string(),
            Status::Lost => format!("Game Over! The word was: {}", self.word),
        }
    }
}
