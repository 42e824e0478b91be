//! Game state engine and the host loop that drives it.
//!
//! `GameState` only stores the target word and the guessed letters. Every
//! other piece of status (wins, losses, remaining attempts, what to reveal)
//! is derived on demand, so there is nothing to keep in sync.

use crate::catalog::{self, Catalog};
use crate::wordbank::WordProvider;
use crate::{debug_log, info_log};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("'{0}' is not a single lowercase letter")]
    InvalidLetter(char),

    #[error("invalid target word '{0}': expected lowercase letters only")]
    InvalidWord(String),

    #[error("attempt budget must allow at least one wrong guess")]
    NoAttempts,

    #[error("the game is already over, start a new one")]
    GameOver,

    #[error("finish the current game before starting a new one")]
    GameInProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Unguessed,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    None,
    Correct,
    Incorrect,
}

/// One position of the target word as the player should see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedLetter {
    pub letter: char,
    pub revealed: bool,
    /// Whether the player actually guessed it. A revealed letter that was
    /// never guessed was uncovered by losing.
    pub guessed: bool,
}

impl RevealedLetter {
    #[must_use]
    pub fn is_missed(&self) -> bool {
        self.revealed && !self.guessed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStatus {
    pub wrong_guess_count: usize,
    pub remaining_guesses: usize,
    pub is_won: bool,
    pub is_lost: bool,
    pub is_over: bool,
    pub last_guessed_letter: Option<char>,
    pub is_last_guess_incorrect: bool,
}

fn is_valid_letter(letter: char) -> bool {
    letter.is_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: String,
    guessed: Vec<char>,
    attempt_budget: usize,
}

impl GameState {
    /// Start a game for `target`, allowing `attempt_budget` wrong guesses.
    pub fn new(target: &str, attempt_budget: usize) -> Result<Self, GameError> {
        if target.is_empty() || !target.chars().all(is_valid_letter) {
            return Err(GameError::InvalidWord(target.to_string()));
        }
        if attempt_budget == 0 {
            return Err(GameError::NoAttempts);
        }
        Ok(Self {
            target: target.to_string(),
            guessed: Vec::new(),
            attempt_budget,
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Guessed letters in the order they were entered.
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    #[must_use]
    pub fn attempt_budget(&self) -> usize {
        self.attempt_budget
    }

    /// Returns the state after guessing `letter`.
    ///
    /// Guessing a letter twice returns an identical state. Invalid letters
    /// and new guesses after the game has ended are rejected and leave
    /// `self` untouched.
    pub fn add_guess(&self, letter: char) -> Result<Self, GameError> {
        if !is_valid_letter(letter) {
            return Err(GameError::InvalidLetter(letter));
        }
        if self.guessed.contains(&letter) {
            return Ok(self.clone());
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let mut next = self.clone();
        next.guessed.push(letter);
        Ok(next)
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|&&c| !self.target.contains(c))
            .count()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.attempt_budget.saturating_sub(self.wrong_guess_count())
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.target.chars().all(|c| self.guessed.contains(&c))
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.wrong_guess_count() >= self.attempt_budget
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_won() {
            Phase::Won
        } else if self.is_lost() {
            Phase::Lost
        } else {
            Phase::InProgress
        }
    }

    /// Every position of the target; all of them are revealed once the game is lost.
    #[must_use]
    pub fn revealed_word(&self) -> Vec<RevealedLetter> {
        let lost = self.is_lost();
        self.target
            .chars()
            .map(|letter| {
                let guessed = self.guessed.contains(&letter);
                RevealedLetter {
                    letter,
                    revealed: guessed || lost,
                    guessed,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn letter_status(&self, letter: char) -> LetterStatus {
        if !self.guessed.contains(&letter) {
            LetterStatus::Unguessed
        } else if self.target.contains(letter) {
            LetterStatus::Correct
        } else {
            LetterStatus::Incorrect
        }
    }

    #[must_use]
    pub fn last_guessed_letter(&self) -> Option<char> {
        self.guessed.last().copied()
    }

    #[must_use]
    pub fn last_guess_outcome(&self) -> GuessOutcome {
        match self.last_guessed_letter() {
            None => GuessOutcome::None,
            Some(c) if self.target.contains(c) => GuessOutcome::Correct,
            Some(_) => GuessOutcome::Incorrect,
        }
    }

    #[must_use]
    pub fn status(&self) -> DerivedStatus {
        let is_won = self.is_won();
        let is_lost = self.is_lost();
        DerivedStatus {
            wrong_guess_count: self.wrong_guess_count(),
            remaining_guesses: self.remaining_guesses(),
            is_won,
            is_lost,
            is_over: is_won || is_lost,
            last_guessed_letter: self.last_guessed_letter(),
            is_last_guess_incorrect: self.last_guess_outcome() == GuessOutcome::Incorrect,
        }
    }
}

/// A fresh game with a word drawn from `provider`.
pub fn reset_game<P: WordProvider + ?Sized>(
    provider: &mut P,
    attempt_budget: usize,
) -> Result<GameState, GameError> {
    let word = provider.pick_word();
    info_log!("reset_game() - new game, {} letters", word.len());
    GameState::new(&word, attempt_budget)
}

// Host side

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// Content of the status region above the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Idle,
    Won,
    Lost,
    Farewell(String),
}

impl Banner {
    /// Banner for `state`, picking the farewell phrase with `phrase_index`.
    #[must_use]
    pub fn for_state(state: &GameState, catalog: &Catalog, phrase_index: usize) -> Self {
        Self::build(state, catalog, |name| catalog::farewell_text(name, phrase_index))
    }

    /// Banner for `state` with a farewell phrase drawn from `rng`.
    #[must_use]
    pub fn random_for_state<R: Rng + ?Sized>(
        state: &GameState,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Self {
        Self::build(state, catalog, |name| catalog::random_farewell(name, rng))
    }

    fn build(state: &GameState, catalog: &Catalog, farewell: impl FnOnce(&str) -> String) -> Self {
        let status = state.status();
        match state.phase() {
            Phase::Won => Self::Won,
            Phase::Lost => Self::Lost,
            Phase::InProgress if status.is_last_guess_incorrect => catalog
                .lost_entry(status.wrong_guess_count)
                .map_or(Self::Idle, |entry| Self::Farewell(farewell(&entry.name))),
            Phase::InProgress => Self::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
}

impl SessionStats {
    fn record(&mut self, phase: Phase) {
        match phase {
            Phase::Won => self.won += 1,
            Phase::Lost => self.lost += 1,
            Phase::InProgress => return,
        }
        self.played += 1;
    }
}

/// Snapshot handed to an interface whenever something changes.
#[derive(Debug, Clone)]
pub struct GameView {
    pub state: GameState,
    pub banner: Banner,
    pub stats: SessionStats,
}

pub trait GameInterface {
    fn display_game(&mut self, view: &GameView);
    /// Next user action. `None` means the input was not usable; the loop asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_error(&mut self, error: &GameError);
    fn display_duplicate_guess(&mut self, letter: char);
    fn display_exit_message(&mut self, stats: &SessionStats);
}

/// Play games until the interface asks to exit.
pub fn game_loop<P, I>(
    catalog: &Catalog,
    provider: &mut P,
    interface: &mut I,
) -> Result<SessionStats, GameError>
where
    P: WordProvider + ?Sized,
    I: GameInterface + ?Sized,
{
    game_loop_with_rng(catalog, provider, interface, &mut rand::rng())
}

/// Like [`game_loop`], with farewell phrases drawn from `rng`.
pub fn game_loop_with_rng<P, I, R>(
    catalog: &Catalog,
    provider: &mut P,
    interface: &mut I,
    rng: &mut R,
) -> Result<SessionStats, GameError>
where
    P: WordProvider + ?Sized,
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut state = reset_game(provider, catalog.attempt_budget())?;
    let mut banner = Banner::Idle;
    let mut stats = SessionStats::default();

    loop {
        interface.display_game(&GameView {
            state: state.clone(),
            banner: banner.clone(),
            stats,
        });

        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                info_log!("game_loop() - exiting after {} games", stats.played);
                interface.display_exit_message(&stats);
                return Ok(stats);
            }
            UserAction::NewGame => {
                if !state.is_over() {
                    interface.display_error(&GameError::GameInProgress);
                    continue;
                }
                state = reset_game(provider, catalog.attempt_budget())?;
                banner = Banner::Idle;
            }
            UserAction::Guess(letter) => match state.add_guess(letter) {
                Ok(next) if next == state => interface.display_duplicate_guess(letter),
                Ok(next) => {
                    state = next;
                    banner = Banner::random_for_state(&state, catalog, rng);
                    info_log!(
                        "game_loop() - guessed '{}', {} wrong, phase {:?}",
                        letter,
                        state.wrong_guess_count(),
                        state.phase()
                    );
                    if state.is_over() {
                        stats.record(state.phase());
                    }
                }
                Err(e) => {
                    debug_log!("game_loop() - rejected guess '{}': {}", letter, e);
                    interface.display_error(&e);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::FixedWordProvider;
    use rand::{SeedableRng, rngs::StdRng};

    fn play(target: &str, budget: usize, letters: &str) -> GameState {
        letters
            .chars()
            .fold(GameState::new(target, budget).unwrap(), |state, c| {
                state.add_guess(c).unwrap()
            })
    }

    /// Hands out words from a list in order, cycling.
    struct SequenceProvider {
        words: Vec<&'static str>,
        next: usize,
    }

    impl WordProvider for SequenceProvider {
        fn pick_word(&mut self) -> String {
            let word = self.words[self.next % self.words.len()];
            self.next += 1;
            word.to_string()
        }
    }

    /// Replays scripted actions and records what it was shown.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: Vec<Option<UserAction>>,
        views: Vec<GameView>,
        errors: Vec<GameError>,
        duplicates: Vec<char>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            let mut actions = actions;
            actions.reverse();
            Self {
                actions,
                ..Self::default()
            }
        }

        fn last_view(&self) -> &GameView {
            self.views.last().unwrap()
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_game(&mut self, view: &GameView) {
            self.views.push(view.clone());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop().unwrap_or(Some(UserAction::Exit))
        }

        fn display_error(&mut self, error: &GameError) {
            self.errors.push(error.clone());
        }

        fn display_duplicate_guess(&mut self, letter: char) {
            self.duplicates.push(letter);
        }

        fn display_exit_message(&mut self, _stats: &SessionStats) {
            self.exited = true;
        }
    }

    fn guesses(letters: &str) -> Vec<Option<UserAction>> {
        letters.chars().map(|c| Some(UserAction::Guess(c))).collect()
    }

    #[test]
    fn test_new_game_is_in_progress() {
        let state = GameState::new("cat", 4).unwrap();
        assert!(state.guessed_letters().is_empty());
        assert_eq!(state.phase(), Phase::InProgress);
        assert!(!state.is_over());
        assert_eq!(state.remaining_guesses(), 4);
        assert_eq!(state.last_guess_outcome(), GuessOutcome::None);
        assert!(state.revealed_word().iter().all(|l| !l.revealed));
    }

    #[test]
    fn test_new_rejects_bad_target() {
        assert_eq!(
            GameState::new("", 4),
            Err(GameError::InvalidWord(String::new()))
        );
        assert_eq!(
            GameState::new("Cat", 4),
            Err(GameError::InvalidWord("Cat".to_string()))
        );
        assert!(GameState::new("c4t", 4).is_err());
        assert!(GameState::new("café", 4).is_err());
        assert_eq!(GameState::new("cat", 0), Err(GameError::NoAttempts));
    }

    #[test]
    fn test_win_scenario() {
        let state = play("cat", 4, "cat");
        assert!(state.is_won());
        assert!(state.is_over());
        assert!(!state.is_lost());
        assert_eq!(state.phase(), Phase::Won);
        assert_eq!(state.wrong_guess_count(), 0);
        for c in "cat".chars() {
            assert_eq!(state.letter_status(c), LetterStatus::Correct);
        }
        assert!(
            ('a'..='z').all(|c| state.letter_status(c) != LetterStatus::Incorrect),
            "no letter should be marked incorrect"
        );
    }

    #[test]
    fn test_loss_reveals_whole_word() {
        let state = play("cat", 2, "xy");
        assert_eq!(state.wrong_guess_count(), 2);
        assert!(state.is_lost());
        assert!(!state.is_won());
        assert_eq!(state.remaining_guesses(), 0);

        let revealed = state.revealed_word();
        let letters: String = revealed.iter().map(|l| l.letter).collect();
        assert_eq!(letters, "cat");
        assert!(revealed.iter().all(|l| l.revealed));
        assert!(revealed.iter().all(RevealedLetter::is_missed));
    }

    #[test]
    fn test_partial_reveal_in_progress() {
        let state = play("react", 8, "rx");
        let revealed = state.revealed_word();
        assert!(revealed[0].revealed && revealed[0].guessed);
        assert!(!revealed[1].revealed);
        assert!(!revealed[4].revealed);
        assert!(revealed.iter().all(|l| !l.is_missed()));
    }

    #[test]
    fn test_repeated_letters_in_target() {
        let state = play("assembly", 8, "s");
        let revealed = state.revealed_word();
        assert!(revealed[1].revealed);
        assert!(revealed[2].revealed);
        assert_eq!(state.wrong_guess_count(), 0);
    }

    #[test]
    fn test_duplicate_guess_is_noop() {
        let state = play("cat", 4, "c");
        let again = state.add_guess('c').unwrap();
        assert_eq!(again, state);
        assert_eq!(again.guessed_letters(), &['c']);
        assert_eq!(again.wrong_guess_count(), 0);
    }

    #[test]
    fn test_add_guess_idempotent_for_every_letter() {
        let base = play("react", 3, "rz");
        for c in 'a'..='z' {
            let once = base.add_guess(c);
            let Ok(once) = once else { continue };
            assert_eq!(once.add_guess(c), Ok(once.clone()), "letter {c}");
        }
    }

    #[test]
    fn test_duplicate_after_game_over_is_still_noop() {
        let state = play("cat", 2, "xy");
        assert_eq!(state.add_guess('x'), Ok(state.clone()));
    }

    #[test]
    fn test_invalid_letter_rejected() {
        let state = play("cat", 4, "c");
        assert_eq!(state.add_guess('A'), Err(GameError::InvalidLetter('A')));
        assert_eq!(state.add_guess('1'), Err(GameError::InvalidLetter('1')));
        assert_eq!(state.add_guess(' '), Err(GameError::InvalidLetter(' ')));
        assert_eq!(state.add_guess('é'), Err(GameError::InvalidLetter('é')));
        assert_eq!(state.guessed_letters(), &['c']);
    }

    #[test]
    fn test_guess_after_game_over_rejected() {
        let won = play("cat", 4, "cat");
        assert_eq!(won.add_guess('z'), Err(GameError::GameOver));

        let lost = play("cat", 2, "xy");
        assert_eq!(lost.add_guess('c'), Err(GameError::GameOver));
        assert_eq!(lost.guessed_letters(), &['x', 'y']);
    }

    #[test]
    fn test_guess_order_preserved() {
        let state = play("react", 8, "zerq");
        assert_eq!(state.guessed_letters(), &['z', 'e', 'r', 'q']);
        assert_eq!(state.last_guessed_letter(), Some('q'));
    }

    #[test]
    fn test_letter_status() {
        let state = play("cat", 4, "cx");
        assert_eq!(state.letter_status('c'), LetterStatus::Correct);
        assert_eq!(state.letter_status('x'), LetterStatus::Incorrect);
        assert_eq!(state.letter_status('a'), LetterStatus::Unguessed);
        assert_eq!(state.letter_status('q'), LetterStatus::Unguessed);
    }

    #[test]
    fn test_last_guess_outcome() {
        let state = play("cat", 4, "c");
        assert_eq!(state.last_guess_outcome(), GuessOutcome::Correct);
        let state = state.add_guess('z').unwrap();
        assert_eq!(state.last_guess_outcome(), GuessOutcome::Incorrect);
        // A repeated guess does not move the last guess.
        let state = state.add_guess('c').unwrap();
        assert_eq!(state.last_guessed_letter(), Some('z'));
    }

    #[test]
    fn test_status_snapshot() {
        let status = play("cat", 4, "cz").status();
        assert_eq!(
            status,
            DerivedStatus {
                wrong_guess_count: 1,
                remaining_guesses: 3,
                is_won: false,
                is_lost: false,
                is_over: false,
                last_guessed_letter: Some('z'),
                is_last_guess_incorrect: true,
            }
        );
    }

    #[test]
    fn test_won_and_lost_never_both_true() {
        // Walk every prefix of a handful of guess sequences.
        for sequence in ["cat", "xyzcat", "xcyaztw", "qwertyuiop", "abcdefghijklmnopqrstuvwxyz"] {
            let mut state = GameState::new("cat", 3).unwrap();
            for c in sequence.chars() {
                match state.add_guess(c) {
                    Ok(next) => state = next,
                    Err(GameError::GameOver) => break,
                    Err(e) => panic!("unexpected error {e}"),
                }
                assert!(!(state.is_won() && state.is_lost()), "sequence {sequence}");
                if !state.is_over() {
                    assert!(state.wrong_guess_count() <= state.attempt_budget());
                }
            }
        }
    }

    #[test]
    fn test_reset_game_after_loss() {
        let mut provider = SequenceProvider {
            words: vec!["cat", "dog"],
            next: 0,
        };
        let state = reset_game(&mut provider, 2).unwrap();
        assert_eq!(state.target(), "cat");
        let lost = play(state.target(), 2, "xy");
        assert!(lost.is_lost());

        let fresh = reset_game(&mut provider, 2).unwrap();
        assert_eq!(fresh.target(), "dog");
        assert!(fresh.guessed_letters().is_empty());
        assert!(!fresh.is_over());
    }

    #[test]
    fn test_reset_game_rejects_bad_provider_word() {
        let mut provider = SequenceProvider {
            words: vec!["Not Valid"],
            next: 0,
        };
        assert!(matches!(
            reset_game(&mut provider, 4),
            Err(GameError::InvalidWord(_))
        ));
    }

    #[test]
    fn test_banner_for_state() {
        let catalog = Catalog::languages();
        let state = GameState::new("cat", catalog.attempt_budget()).unwrap();
        assert_eq!(Banner::for_state(&state, &catalog, 0), Banner::Idle);

        let state = state.add_guess('z').unwrap();
        assert_eq!(
            Banner::for_state(&state, &catalog, 0),
            Banner::Farewell("Farewell, HTML".to_string())
        );

        let state = state.add_guess('c').unwrap();
        assert_eq!(Banner::for_state(&state, &catalog, 0), Banner::Idle);

        let state = state.add_guess('q').unwrap();
        assert_eq!(
            Banner::for_state(&state, &catalog, 1),
            Banner::Farewell("Adios, CSS".to_string())
        );

        let won = state.add_guess('a').unwrap().add_guess('t').unwrap();
        assert_eq!(Banner::for_state(&won, &catalog, 0), Banner::Won);
    }

    #[test]
    fn test_banner_lost_not_farewell() {
        let catalog = Catalog::languages();
        let state = play("cat", catalog.attempt_budget(), "bdefghij");
        assert!(state.is_lost());
        assert_eq!(Banner::for_state(&state, &catalog, 0), Banner::Lost);
    }

    #[test]
    fn test_game_loop_win_then_exit() {
        let catalog = Catalog::languages();
        let mut provider = FixedWordProvider::new("cat").unwrap();
        let mut interface = ScriptedInterface::new(guesses("cat"));

        let stats = game_loop(&catalog, &mut provider, &mut interface).unwrap();
        assert_eq!(stats, SessionStats { played: 1, won: 1, lost: 0 });
        assert!(interface.exited);
        assert_eq!(interface.last_view().banner, Banner::Won);
    }

    #[test]
    fn test_game_loop_skips_unusable_input() {
        let catalog = Catalog::languages();
        let mut provider = FixedWordProvider::new("cat").unwrap();
        let mut actions = vec![None, None];
        actions.extend(guesses("c"));
        let mut interface = ScriptedInterface::new(actions);

        game_loop(&catalog, &mut provider, &mut interface).unwrap();
        assert_eq!(interface.last_view().state.guessed_letters(), &['c']);
    }

    #[test]
    fn test_game_loop_reports_duplicates_and_errors() {
        let catalog = Catalog::languages();
        let mut provider = FixedWordProvider::new("cat").unwrap();
        let mut actions = guesses("cc1");
        actions.push(Some(UserAction::NewGame));
        let mut interface = ScriptedInterface::new(actions);

        let stats = game_loop(&catalog, &mut provider, &mut interface).unwrap();
        assert_eq!(interface.duplicates, vec!['c']);
        assert_eq!(
            interface.errors,
            vec![GameError::InvalidLetter('1'), GameError::GameInProgress]
        );
        assert_eq!(stats.played, 0);
    }

    #[test]
    fn test_game_loop_loss_then_new_game() {
        let catalog = Catalog::languages();
        let mut provider = SequenceProvider {
            words: vec!["cat", "dog"],
            next: 0,
        };
        let mut actions = guesses("bdefghij");
        actions.extend(guesses("k"));
        actions.push(Some(UserAction::NewGame));
        actions.extend(guesses("dog"));
        let mut interface = ScriptedInterface::new(actions);

        let stats = game_loop(&catalog, &mut provider, &mut interface).unwrap();
        assert_eq!(interface.errors, vec![GameError::GameOver]);
        assert_eq!(stats, SessionStats { played: 2, won: 1, lost: 1 });
        assert_eq!(interface.last_view().state.target(), "dog");
        assert!(
            interface
                .views
                .iter()
                .any(|view| view.banner == Banner::Lost)
        );
    }

    #[test]
    fn test_game_loop_farewell_banner_names_language() {
        let catalog = Catalog::languages();
        let mut provider = FixedWordProvider::new("cat").unwrap();
        let mut interface = ScriptedInterface::new(guesses("z"));

        game_loop(&catalog, &mut provider, &mut interface).unwrap();
        match &interface.last_view().banner {
            Banner::Farewell(text) => assert!(text.contains("HTML"), "got '{text}'"),
            other => panic!("Expected farewell banner, got {other:?}"),
        }
    }

    #[test]
    fn test_game_loop_same_seed_same_farewells() {
        let catalog = Catalog::languages();
        let run = |seed: u64| {
            let mut provider = FixedWordProvider::new("cat").unwrap();
            let mut interface = ScriptedInterface::new(guesses("zqxw"));
            let mut rng = StdRng::seed_from_u64(seed);
            game_loop_with_rng(&catalog, &mut provider, &mut interface, &mut rng).unwrap();
            interface
                .views
                .into_iter()
                .map(|view| view.banner)
                .collect::<Vec<_>>()
        };

        let first = run(7);
        assert_eq!(first, run(7));
        assert_eq!(
            first
                .iter()
                .filter(|banner| matches!(banner, Banner::Farewell(_)))
                .count(),
            4
        );
    }

    #[test]
    fn test_random_banner_matches_phase() {
        let catalog = Catalog::languages();
        let mut rng = StdRng::seed_from_u64(3);
        let won = play("cat", 8, "cat");
        assert_eq!(Banner::random_for_state(&won, &catalog, &mut rng), Banner::Won);
        let missed = play("cat", 8, "cz");
        match Banner::random_for_state(&missed, &catalog, &mut rng) {
            Banner::Farewell(text) => assert!(text.contains("HTML"), "got '{text}'"),
            other => panic!("Expected farewell banner, got {other:?}"),
        }
    }
}
