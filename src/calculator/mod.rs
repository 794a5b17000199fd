//! Calculator core.
//!
//! This module provides functionality to:
//! - Accumulate button and key input into an expression
//! - Tokenize, parse and evaluate calculator notation
//! - Format results and keep a bounded history
//! - Describe the simple and advanced keypads
//! - Copy the display to the clipboard

mod accumulator;
mod clipboard;
mod error;
mod evaluation;
mod format;
mod history;
mod input;
mod keypad;
mod lexer;
mod parser;

pub use accumulator::{Calculator, EMPTY_DISPLAY, InputState};
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use error::{CalcError, InputError};
pub use evaluation::{CalcResult, ERROR_MARKER, evaluate, evaluate_expression};
pub use format::format_result;
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, HistoryLog};
pub use input::{Button, Key, Operator, map_key};
pub use keypad::{ADVANCED_LAYOUT, KeyStyle, KeypadKey, Mode, SIMPLE_LAYOUT, render as render_keypad};
pub use lexer::Function;
