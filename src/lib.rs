// Library interface for assembly-endgame
// Integration tests drive the game loop through these modules

pub mod catalog;
pub mod cli;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use catalog::{Catalog, CatalogEntry, Color};
pub use game_state::{
    Banner, DerivedStatus, GameError, GameInterface, GameState, GameView, GuessOutcome,
    LetterStatus, Phase, RevealedLetter, SessionStats, UserAction, game_loop, game_loop_with_rng,
    reset_game,
};
pub use wordbank::{
    EMBEDDED_WORDBANK, FixedWordProvider, RandomWordProvider, WordProvider, WordbankError,
    load_wordbank_from_file, load_wordbank_from_str,
};
