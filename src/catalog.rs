//! Language catalog: the "lives" of the game.
//!
//! Each entry is one chip on screen. Losing a guess loses the leftmost
//! surviving language, and the number of entries fixes how many wrong
//! guesses a player may make (`len - 1`, Assembly is always the last one
//! standing).

use rand::Rng;

const MIN_ENTRIES: usize = 2;

const FAREWELL_PHRASE_COUNT: usize = FAREWELL_PHRASES.len();

const FAREWELL_PHRASES: [&str; 12] = [
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog needs at least two entries, got {0}")]
    TooFewEntries(usize),

    #[error("invalid colour '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// 24-bit colour used for a chip's background and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, CatalogError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CatalogError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| CatalogError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub background_color: Color,
    pub color: Color,
}

impl CatalogEntry {
    pub fn new(name: &str, background_hex: &str, color_hex: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            name: name.to_string(),
            background_color: Color::from_hex(background_hex)?,
            color: Color::from_hex(color_hex)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.len() < MIN_ENTRIES {
            return Err(CatalogError::TooFewEntries(entries.len()));
        }
        Ok(Self { entries })
    }

    /// The built-in catalog of nine programming languages.
    #[must_use]
    pub fn languages() -> Self {
        const LIGHT: Color = Color::new(0xF9, 0xF4, 0xDA);
        const DARK: Color = Color::new(0x1E, 0x1E, 0x1E);

        let entry = |name: &str, background_color: Color, color: Color| CatalogEntry {
            name: name.to_string(),
            background_color,
            color,
        };

        Self {
            entries: vec![
                entry("HTML", Color::new(0xE2, 0x68, 0x0F), LIGHT),
                entry("CSS", Color::new(0x32, 0x8A, 0xF1), LIGHT),
                entry("JavaScript", Color::new(0xF4, 0xEB, 0x13), DARK),
                entry("React", Color::new(0x2E, 0xD3, 0xE9), DARK),
                entry("TypeScript", Color::new(0x29, 0x8E, 0xC6), LIGHT),
                entry("Node.js", Color::new(0x59, 0x91, 0x37), LIGHT),
                entry("Python", Color::new(0xFF, 0xD7, 0x42), DARK),
                entry("Ruby", Color::new(0xD0, 0x2B, 0x2B), LIGHT),
                entry("Assembly", Color::new(0x2D, 0x51, 0x9F), LIGHT),
            ],
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of wrong guesses tolerated before the game is lost.
    #[must_use]
    pub fn attempt_budget(&self) -> usize {
        self.entries.len() - 1
    }

    /// `true` for every chip that has been lost after `wrong_guess_count` misses.
    #[must_use]
    pub fn chip_states(&self, wrong_guess_count: usize) -> Vec<bool> {
        (0..self.entries.len())
            .map(|i| i < wrong_guess_count)
            .collect()
    }

    /// The entry lost by the most recent wrong guess, if any.
    #[must_use]
    pub fn lost_entry(&self, wrong_guess_count: usize) -> Option<&CatalogEntry> {
        wrong_guess_count
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
    }
}

/// Farewell phrase number `index` (wrapping) for the language `name`.
#[must_use]
pub fn farewell_text(name: &str, index: usize) -> String {
    FAREWELL_PHRASES[index % FAREWELL_PHRASES.len()].replace("{}", name)
}

#[must_use]
pub fn random_farewell<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    farewell_text(name, rng.random_range(0..FAREWELL_PHRASE_COUNT))
}
