use std::fmt;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// A single uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// A..=Z in order.
    pub const ALPHABET: [Letter; 26] = {
        let mut letters = [Letter(b'A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Letter(b'A' + i as u8);
            i += 1;
        }
        letters
    };

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_uppercase() {
            Ok(Letter(c as u8))
        } else {
            Err(c)
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A target word: non-empty, uppercase ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Trims and upper-cases `raw`, rejecting anything that isn't a plain word.
    pub fn parse(raw: &str) -> Result<Self, VocabularyError> {
        let word = raw.trim().to_ascii_uppercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(VocabularyError::InvalidWord(raw.to_string()));
        }
        Ok(Word(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letter_at(&self, index: usize) -> Option<Letter> {
        self.0.as_bytes().get(index).map(|&b| Letter(b))
    }

    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.bytes().map(Letter)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.as_bytes().contains(&letter.0)
    }
}

impl TryFrom<String> for Word {
    type Error = VocabularyError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Word::parse(&raw)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const DEFAULT_WORDS: [&str; 36] = [
    "APPLE", "BANANA", "ORANGE", "GRAPE", "LEMON", "PEACH", "CHERRY", "MELON",
    "HOUSE", "SCHOOL", "COMPUTER", "WINDOW", "DOCTOR", "TEACHER", "STUDENT",
    "ELEPHANT", "GIRAFFE", "TIGER", "LION", "ZEBRA", "MONKEY", "BEAR",
    "OCEAN", "MOUNTAIN", "FOREST", "DESERT", "RIVER", "LAKE", "BEACH",
    "PIZZA", "BURGER", "PASTA", "SALAD", "SOUP", "CAKE", "COOKIE",
];

/// The fixed, non-empty word list rounds draw from.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS
                .iter()
                .map(|w| Word(w.to_string()))
                .collect(),
        }
    }
}

impl Vocabulary {
    pub fn new(words: Vec<Word>) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { words })
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn from_text(text: &str) -> Result<Self, VocabularyError> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Word::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let text = std::fs::read_to_string(path).map_err(|e| VocabularyError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_text(&text)
    }

    /// Uniform random draw.
    pub fn select_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
