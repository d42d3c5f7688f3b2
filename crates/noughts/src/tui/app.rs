//! Application state and key handling.
//!
//! [`App`] is the presentation-side owner of the [`GameMachine`]. It keeps
//! only what the machine does not: the text typed into the name form, the
//! board cursor and transient messages. Every game change goes through the
//! machine's operations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use noughts_core::{GameMachine, MoveOutcome, Phase, Position};
use tracing::{debug, info, instrument};

use super::input::move_cursor;
use crate::config::{Config, PlayerDefaults};
use crate::messages::INVALID_NAMES;

/// Which name field has focus on the name form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameField {
    /// Player X's name.
    #[default]
    X,
    /// Player O's name.
    O,
}

impl NameField {
    /// Returns the other field.
    pub fn toggle(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameMachine,
    name_x: String,
    name_o: String,
    focus: NameField,
    cursor: Position,
    form_error: Option<String>,
    hint: Option<String>,
    move_hints: bool,
    #[getter(skip)]
    defaults: PlayerDefaults,
}

impl App {
    /// Creates the app on the name form, prefilled from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &Config) -> Self {
        let defaults = config.players().clone();
        Self {
            game: GameMachine::new(),
            name_x: defaults.x().clone(),
            name_o: defaults.o().clone(),
            focus: NameField::X,
            cursor: Position::Center,
            form_error: None,
            hint: None,
            move_hints: *config.move_hints(),
            defaults,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(phase = ?self.game.phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            return AppAction::Quit;
        }
        match self.game.phase() {
            Phase::NotStarted => self.handle_form_key(key),
            Phase::InProgress => self.handle_board_key(key.code),
            Phase::Finished => self.handle_result_key(key.code),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Enter => self.submit_names(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Backspace => {
                self.focused_name().pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.focused_name().push(c)
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.place(digit as usize - 1);
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_result_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                self.restart();
                AppAction::Continue
            }
            _ => AppAction::Continue,
        }
    }

    fn focused_name(&mut self) -> &mut String {
        match self.focus {
            NameField::X => &mut self.name_x,
            NameField::O => &mut self.name_o,
        }
    }

    /// Starts the game with the typed names, or shows why it cannot.
    fn submit_names(&mut self) {
        match self.game.start_game(&self.name_x, &self.name_o) {
            Ok(()) => {
                self.form_error = None;
                self.hint = None;
                self.cursor = Position::Center;
            }
            Err(e) => {
                debug!(error = %e, "Names rejected");
                self.form_error = Some(INVALID_NAMES.to_string());
            }
        }
    }

    /// Plays at `cell_index`; ignored moves optionally leave a hint.
    fn place(&mut self, cell_index: usize) {
        if let Some(position) = Position::from_index(cell_index) {
            self.cursor = position;
        }
        self.hint = match self.game.apply_move(cell_index) {
            MoveOutcome::Ignored(reason) if self.move_hints => Some(reason.to_string()),
            _ => None,
        };
    }

    /// Back to the name form with a fresh machine.
    fn restart(&mut self) {
        self.game.restart();
        self.name_x = self.defaults.x().clone();
        self.name_o = self.defaults.o().clone();
        self.focus = NameField::X;
        self.cursor = Position::Center;
        self.form_error = None;
        self.hint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = App::new(&Config::default());
        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bobb");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.name_x(), "Alice");
        assert_eq!(app.name_o(), "Bob");
        assert_eq!(*app.focus(), NameField::O);
    }

    #[test]
    fn test_q_is_a_name_character_on_the_form() {
        let mut app = App::new(&Config::default());
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Continue);
        assert_eq!(app.name_x(), "q");
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        let mut app = App::new(&Config::default());
        type_text(&mut app, "Al");
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('I'), KeyModifiers::SHIFT));
        assert_eq!(app.name_x(), "AlI");
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = App::new(&Config::default());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(key), AppAction::Quit);
    }
}
