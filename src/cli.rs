use crate::catalog::Catalog;
use crate::debug_log;
use crate::game_state::{
    Banner, GameError, GameInterface, GameView, LetterStatus, SessionStats, UserAction,
};
use clap::Parser;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Assembly: Endgame - guess the word before every language is lost
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Always play this word instead of a random one
    #[arg(short = 'w', long = "word")]
    pub word: Option<String>,

    /// Seed for reproducible games (word choice and farewell messages)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Line-based interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Line input

pub enum ActionInput {
    Action(UserAction),
    Invalid,
}

pub fn parse_action(line: &str) -> ActionInput {
    let input = line.trim().to_lowercase();
    let mut chars = input.chars();

    match input.as_str() {
        "exit" | "quit" => ActionInput::Action(UserAction::Exit),
        "new" | "next" => ActionInput::Action(UserAction::NewGame),
        _ => match (chars.next(), chars.next()) {
            (Some(c), None) => ActionInput::Action(UserAction::Guess(c)),
            _ => ActionInput::Invalid,
        },
    }
}

pub fn read_action<R: BufRead>(reader: &mut R) -> Option<ActionInput> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(parse_action(&input)),
        Err(e) => {
            debug_log!("read_action() - read failed: {}", e);
            None
        }
    }
}

// Rendering helpers

#[must_use]
pub fn format_word(view: &GameView) -> String {
    view.state
        .revealed_word()
        .iter()
        .map(|l| {
            if l.revealed {
                l.letter.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn format_chips(catalog: &Catalog, wrong_guess_count: usize) -> String {
    catalog
        .entries()
        .iter()
        .zip(catalog.chip_states(wrong_guess_count))
        .map(|(entry, lost)| {
            if lost {
                format!("[x {}]", entry.name)
            } else {
                format!("[{}]", entry.name)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unguessed letters in lowercase, hits in uppercase, misses as `.`.
#[must_use]
pub fn format_keyboard(view: &GameView) -> String {
    ALPHABET
        .chars()
        .map(|c| match view.state.letter_status(c) {
            LetterStatus::Unguessed => c,
            LetterStatus::Correct => c.to_ascii_uppercase(),
            LetterStatus::Incorrect => '.',
        })
        .collect()
}

#[must_use]
pub fn banner_text(banner: &Banner) -> Option<String> {
    match banner {
        Banner::Idle => None,
        Banner::Won => Some("You win! Well done!".to_string()),
        Banner::Lost => Some("Game over! You lose! Better start learning Assembly.".to_string()),
        Banner::Farewell(text) => Some(format!("{text} 🫡")),
    }
}

#[must_use]
pub fn session_summary(stats: &SessionStats) -> String {
    format!(
        "Played {}, won {}, lost {}.",
        stats.played, stats.won, stats.lost
    )
}

/// Line-based `GameInterface` over any reader and writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    catalog: Catalog,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W, catalog: Catalog) -> Self {
        Self {
            reader,
            writer,
            catalog,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn emit(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug_log!("CliInterface::emit() - write failed: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_game(&mut self, view: &GameView) {
        let status = view.state.status();
        self.emit("");
        if let Some(text) = banner_text(&view.banner) {
            self.emit(text);
        }
        let chips = format_chips(&self.catalog, status.wrong_guess_count);
        self.emit(chips);
        self.emit(format!("Word: {}", format_word(view)));
        self.emit(format!("Keys: {}", format_keyboard(view)));

        if status.is_over {
            self.emit("Type 'new' for a new game or 'exit' to quit:");
        } else {
            self.emit(format!(
                "{} wrong guesses left. Guess a letter (or 'exit' to quit):",
                status.remaining_guesses
            ));
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_action(&mut self.reader) {
            None => Some(UserAction::Exit),
            Some(ActionInput::Action(action)) => Some(action),
            Some(ActionInput::Invalid) => {
                self.emit("Invalid input. Enter a single letter, 'new' or 'exit'.");
                None
            }
        }
    }

    fn display_error(&mut self, error: &GameError) {
        self.emit(format!("Error: {error}"));
    }

    fn display_duplicate_guess(&mut self, letter: char) {
        self.emit(format!("You already guessed '{letter}'."));
    }

    fn display_exit_message(&mut self, stats: &SessionStats) {
        self.emit(format!("Exiting. {}", session_summary(stats)));
    }
}
