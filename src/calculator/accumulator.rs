//! The calculator state machine driven by button and key input.

use tracing::debug;

use super::error::InputError;
use super::evaluation::{ERROR_MARKER, evaluate};
use super::format::format_result;
use super::history::HistoryLog;
use super::input::{Button, Key, map_key};
use super::keypad::{KeypadKey, Mode};

/// Placeholder shown while nothing has been entered.
pub const EMPTY_DISPLAY: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputState {
    /// The display shows the `"0"` placeholder.
    Empty,
    NonEmpty,
}

/// A calculator: the live expression, its history and the keypad mode.
///
/// The display string is the expression. It is evaluated as-is on `=`;
/// a successful result replaces it and can be edited further, a failure
/// replaces it with `"Error"`.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    history: HistoryLog,
    mode: Mode,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(HistoryLog::default(), Mode::default())
    }
}

impl Calculator {
    pub fn new(history: HistoryLog, mode: Mode) -> Self {
        Self {
            display: EMPTY_DISPLAY.to_string(),
            history,
            mode,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> InputState {
        if self.display == EMPTY_DISPLAY {
            InputState::Empty
        } else {
            InputState::NonEmpty
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch between the simple and advanced keypad. The expression and
    /// history are left untouched.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn keypad(&self) -> &'static [KeypadKey] {
        self.mode.layout()
    }

    /// Apply one button press.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Clear => self.display = EMPTY_DISPLAY.to_string(),
            Button::Delete => self.delete_last(),
            Button::Evaluate => self.evaluate(),
            _ => {
                let Some(text) = button.insert_text() else {
                    return;
                };
                if self.state() == InputState::Empty && button.replaces_empty() {
                    self.display = text.to_string();
                } else {
                    self.display.push_str(text);
                }
            }
        }
    }

    /// Press the button with the given keypad label.
    pub fn press_label(&mut self, label: &str) -> Result<(), InputError> {
        let button = label.parse()?;
        self.press(button);
        Ok(())
    }

    /// Handle a keyboard key. Returns `false` if the key is not bound and
    /// should be handled by the host.
    pub fn key(&mut self, key: Key) -> bool {
        match map_key(key) {
            Some(button) => {
                self.press(button);
                true
            }
            None => {
                debug!(?key, "ignoring unbound key");
                false
            }
        }
    }

    /// Replace the expression with the result of the history entry at
    /// `index` (0 is the most recent).
    pub fn select_history(&mut self, index: usize) -> Result<(), InputError> {
        let result = self
            .history
            .select(index)
            .ok_or(InputError::NoHistoryEntry(index))?;
        self.display = result.to_string();
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn delete_last(&mut self) {
        if self.state() == InputState::Empty {
            return;
        }
        self.display.pop();
        if self.display.is_empty() {
            self.display = EMPTY_DISPLAY.to_string();
        }
    }

    fn evaluate(&mut self) {
        match evaluate(&self.display) {
            Ok(value) => {
                let result = format_result(value);
                let input = std::mem::replace(&mut self.display, result.clone());
                self.history.record(input, result);
            }
            Err(_) => self.display = ERROR_MARKER.to_string(),
        }
    }
}
