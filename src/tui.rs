//! TUI (Terminal User Interface) module for Assembly: Endgame
//!
//! Full-screen interface built on Ratatui and crossterm.
//!
//! # Layout
//! Title, status banner, language chips, the hidden word, an on-screen
//! keyboard, a status line and the key help, top to bottom.
//!
//! # Input
//! - `Playing`: letter keys guess, ESC quits
//! - `GameOver`: the keyboard is disabled, ENTER or N starts a new game, ESC quits

use crate::catalog::{self, Catalog};
use crate::game_state::{
    Banner, GameError, GameInterface, GameView, LetterStatus, SessionStats, UserAction,
};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const KEYBOARD_ROWS: [&str; 2] = ["abcdefghijklm", "nopqrstuvwxyz"];

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const WON_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Green)
    .add_modifier(Modifier::BOLD);
const LOST_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);
const FAREWELL_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Magenta)
    .add_modifier(Modifier::ITALIC);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

fn to_tui_color(color: catalog::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn key_style(status: LetterStatus, over: bool) -> Style {
    let style = match status {
        LetterStatus::Unguessed => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterStatus::Incorrect => Style::new().fg(Color::White).bg(Color::Red),
    };
    if over {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    Playing,
    GameOver,
}

/// Groups what a frame needs so the render functions stay free of `self`.
struct RenderContext<'a> {
    view: Option<&'a GameView>,
    catalog: &'a Catalog,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
}

/// Main TUI interface component.
///
/// Owns the terminal for its whole lifetime and restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    catalog: Catalog,
    view: Option<GameView>,
    state: TuiState,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new(catalog: Catalog) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            catalog,
            view: None,
            state: TuiState::Playing,
            message: String::new(),
            error_message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            view: self.view.as_ref(),
            catalog: &self.catalog,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(3), // Banner
                Constraint::Length(5), // Language chips
                Constraint::Length(3), // Word
                Constraint::Length(4), // Keyboard
                Constraint::Min(3),    // Status / messages
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.catalog);
        let Some(view) = ctx.view else {
            Self::render_messages(f, chunks[5], ctx.message, ctx.error_message, None);
            return;
        };
        Self::render_banner(f, chunks[1], &view.banner);
        Self::render_chips(f, chunks[2], ctx.catalog, view);
        Self::render_word(f, chunks[3], view);
        Self::render_keyboard(f, chunks[4], view);
        Self::render_messages(f, chunks[5], ctx.message, ctx.error_message, Some(view));
        Self::render_instructions(f, chunks[6], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, catalog: &Catalog) {
        let lines = vec![
            Line::from(Span::styled("Assembly: Endgame", HEADER_STYLE)),
            Line::from(format!(
                "Guess the word within {} attempts to keep the programming world safe from Assembly!",
                catalog.attempt_budget()
            )),
        ];
        let title = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_banner(f: &mut Frame, area: Rect, banner: &Banner) {
        let (text, style) = match banner {
            Banner::Idle => (String::new(), Style::default()),
            Banner::Won => ("You win! Well done! 🎉".to_string(), WON_STYLE),
            Banner::Lost => (
                "Game over! You lose! Better start learning Assembly 😭".to_string(),
                LOST_STYLE,
            ),
            Banner::Farewell(text) => (format!("\"{text}\" 🫡"), FAREWELL_STYLE),
        };
        let paragraph = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_chips(f: &mut Frame, area: Rect, catalog: &Catalog, view: &GameView) {
        let wrong = view.state.wrong_guess_count();
        let mut spans = Vec::new();
        for (entry, lost) in catalog.entries().iter().zip(catalog.chip_states(wrong)) {
            let style = if lost {
                Style::new()
                    .fg(Color::DarkGray)
                    .bg(Color::Black)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::new()
                    .fg(to_tui_color(entry.color))
                    .bg(to_tui_color(entry.background_color))
            };
            let label = if lost {
                format!(" 💀 {} ", entry.name)
            } else {
                format!(" {} ", entry.name)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Languages").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, view: &GameView) {
        let mut spans = Vec::new();
        for letter in view.state.revealed_word() {
            let shown = if letter.revealed {
                letter.letter.to_ascii_uppercase()
            } else {
                ' '
            };
            let style = if letter.is_missed() {
                Style::new().fg(Color::Red).bg(Color::DarkGray)
            } else {
                Style::new().fg(Color::White).bg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {shown} "), style));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_keyboard(f: &mut Frame, area: Rect, view: &GameView) {
        let over = view.state.is_over();
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .map(|row| {
                let mut spans = Vec::new();
                for c in row.chars() {
                    let style = key_style(view.state.letter_status(c), over);
                    spans.push(Span::styled(format!(" {} ", c.to_ascii_uppercase()), style));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_messages(
        f: &mut Frame,
        area: Rect,
        message: &str,
        error_message: &str,
        view: Option<&GameView>,
    ) {
        let mut lines = Vec::new();

        if let Some(view) = view {
            let status = view.state.status();
            lines.push(Line::from(format!(
                "Wrong guesses: {} | Remaining: {} | Played: {} Won: {} Lost: {}",
                status.wrong_guess_count,
                status.remaining_guesses,
                view.stats.played,
                view.stats.won,
                view.stats.lost
            )));
        }
        if !message.is_empty() {
            lines.push(Line::from(Span::styled(message, MESSAGE_STYLE)));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(Span::styled(error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Status").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Playing => "A-Z: Guess a letter | ESC: Quit",
            TuiState::GameOver => "ENTER / N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };
        // Only Press, to avoid double input on terminals reporting Release/Repeat
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        self.error_message.clear();
        match Self::map_key(self.state, key) {
            Ok(action) => Ok(action),
            Err(message) => {
                self.error_message = message;
                Ok(None)
            }
        }
    }

    /// Map a key press to an action. `Err` carries a message for the player.
    fn map_key(state: TuiState, key: KeyEvent) -> Result<Option<UserAction>, String> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            info_log!("map_key() - Quit requested");
            return Ok(Some(UserAction::Exit));
        }
        if key.modifiers.contains(KeyModifiers::ALT)
            || key.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Ok(None);
        }

        match (state, key.code) {
            (TuiState::GameOver, KeyCode::Enter | KeyCode::Char('n' | 'N')) => {
                Ok(Some(UserAction::NewGame))
            }
            (TuiState::GameOver, _) => Ok(None),
            (TuiState::Playing, KeyCode::Char(c)) if c.is_ascii_alphabetic() => {
                Ok(Some(UserAction::Guess(c.to_ascii_lowercase())))
            }
            (TuiState::Playing, KeyCode::Char(c)) => Err(format!(
                "Only letters are allowed! ('{c}' is not a letter)"
            )),
            _ => Ok(None),
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_game(&mut self, view: &GameView) {
        self.state = if view.state.is_over() {
            TuiState::GameOver
        } else {
            TuiState::Playing
        };
        self.view = Some(view.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    self.message.clear();
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_error(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_duplicate_guess(&mut self, letter: char) {
        self.message = format!("You already guessed '{}'.", letter.to_ascii_uppercase());
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, stats: &SessionStats) {
        self.message = format!(
            "Exiting... played {}, won {}, lost {}",
            stats.played, stats.won, stats.lost
        );
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
