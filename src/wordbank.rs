use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

#[derive(Debug, thiserror::Error)]
pub enum WordbankError {
    #[error("word bank contains no usable words")]
    Empty,

    #[error("'{0}' is not a word of lowercase letters")]
    InvalidWord(String),

    #[error("failed to read word bank: {0}")]
    Io(#[from] io::Error),
}

/// Source of target words for new games.
pub trait WordProvider {
    /// Returns a non-empty word of lowercase ASCII letters.
    fn pick_word(&mut self) -> String;
}

fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim().to_ascii_lowercase();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Result<Vec<String>, WordbankError> {
    let words: Vec<String> = data.lines().filter_map(normalize_word).collect();
    if words.is_empty() {
        return Err(WordbankError::Empty);
    }
    Ok(words)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordbankError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_word(&line?) {
            words.push(word);
        }
    }
    if words.is_empty() {
        return Err(WordbankError::Empty);
    }
    Ok(words)
}

/// Picks uniformly at random from a fixed list of words.
#[derive(Debug)]
pub struct RandomWordProvider<R: Rng> {
    words: Vec<String>,
    rng: R,
}

impl<R: Rng> RandomWordProvider<R> {
    pub fn with_rng(words: Vec<String>, rng: R) -> Result<Self, WordbankError> {
        if words.is_empty() {
            return Err(WordbankError::Empty);
        }
        Ok(Self { words, rng })
    }
}

impl RandomWordProvider<ThreadRng> {
    pub fn from_entropy(words: Vec<String>) -> Result<Self, WordbankError> {
        Self::with_rng(words, rand::rng())
    }
}

impl RandomWordProvider<StdRng> {
    /// Reproducible sequence of words for a given seed.
    pub fn seeded(words: Vec<String>, seed: u64) -> Result<Self, WordbankError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WordProvider for RandomWordProvider<R> {
    fn pick_word(&mut self) -> String {
        // `with_rng` refuses empty lists, so `choose` always yields a word.
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }
}

/// Always hands out the same word.
#[derive(Debug, Clone)]
pub struct FixedWordProvider {
    word: String,
}

impl FixedWordProvider {
    pub fn new(word: &str) -> Result<Self, WordbankError> {
        normalize_word(word)
            .map(|word| Self { word })
            .ok_or_else(|| WordbankError::InvalidWord(word.to_string()))
    }
}

impl WordProvider for FixedWordProvider {
    fn pick_word(&mut self) -> String {
        self.word.clone()
    }
}
