//! Keypad layouts for the simple and advanced calculator modes.
//!
//! Hosts render these grids; each key knows its grid cell, its span and a
//! style category for colouring.

use super::input::{Button, Operator};
use super::lexer::Function;

/// Width of one grid column in the text rendering.
const CELL_WIDTH: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Simple,
    Advanced,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Simple => Self::Advanced,
            Self::Advanced => Self::Simple,
        }
    }

    /// Caption of the button that switches to the other mode.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Simple => "Advanced Calculator",
            Self::Advanced => "Simple Calculator",
        }
    }

    pub fn layout(self) -> &'static [KeypadKey] {
        match self {
            Self::Simple => SIMPLE_LAYOUT,
            Self::Advanced => ADVANCED_LAYOUT,
        }
    }

    pub fn columns(self) -> usize {
        match self {
            Self::Simple => 4,
            Self::Advanced => 5,
        }
    }
}

/// Colour category of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStyle {
    Digit,
    Operator,
    Evaluate,
    Control,
    Function,
    Grouping,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeypadKey {
    pub button: Button,
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
}

impl KeypadKey {
    const fn at(button: Button, row: usize, col: usize) -> Self {
        Self::spanning(button, row, col, 1)
    }

    const fn spanning(button: Button, row: usize, col: usize, col_span: usize) -> Self {
        Self {
            button,
            row,
            col,
            row_span: 1,
            col_span,
        }
    }

    pub fn style(&self) -> KeyStyle {
        match self.button {
            Button::Digit(_) | Button::Decimal => KeyStyle::Digit,
            Button::Operator(_) | Button::Power => KeyStyle::Operator,
            Button::Evaluate => KeyStyle::Evaluate,
            Button::Clear | Button::Delete => KeyStyle::Control,
            Button::LeftParen | Button::RightParen => KeyStyle::Grouping,
            Button::Function(_)
            | Button::Square
            | Button::Cube
            | Button::Factorial
            | Button::Percent
            | Button::Pi
            | Button::Euler => KeyStyle::Function,
        }
    }
}

const fn digit(d: u8, row: usize, col: usize) -> KeypadKey {
    KeypadKey::at(Button::Digit(d), row, col)
}

const fn op(operator: Operator, row: usize, col: usize) -> KeypadKey {
    KeypadKey::at(Button::Operator(operator), row, col)
}

const fn func(function: Function, row: usize, col: usize) -> KeypadKey {
    KeypadKey::at(Button::Function(function), row, col)
}

pub const SIMPLE_LAYOUT: &[KeypadKey] = &[
    digit(7, 0, 0),
    digit(8, 0, 1),
    digit(9, 0, 2),
    op(Operator::Divide, 0, 3),
    digit(4, 1, 0),
    digit(5, 1, 1),
    digit(6, 1, 2),
    op(Operator::Multiply, 1, 3),
    digit(1, 2, 0),
    digit(2, 2, 1),
    digit(3, 2, 2),
    op(Operator::Subtract, 2, 3),
    digit(0, 3, 0),
    KeypadKey::at(Button::Decimal, 3, 1),
    KeypadKey::at(Button::Evaluate, 3, 2),
    op(Operator::Add, 3, 3),
    KeypadKey::spanning(Button::Clear, 4, 0, 2),
    KeypadKey::spanning(Button::Delete, 4, 2, 2),
];

pub const ADVANCED_LAYOUT: &[KeypadKey] = &[
    digit(7, 0, 0),
    digit(8, 0, 1),
    digit(9, 0, 2),
    op(Operator::Divide, 0, 3),
    func(Function::Sqrt, 0, 4),
    digit(4, 1, 0),
    digit(5, 1, 1),
    digit(6, 1, 2),
    op(Operator::Multiply, 1, 3),
    KeypadKey::at(Button::Square, 1, 4),
    digit(1, 2, 0),
    digit(2, 2, 1),
    digit(3, 2, 2),
    op(Operator::Subtract, 2, 3),
    KeypadKey::at(Button::Cube, 2, 4),
    digit(0, 3, 0),
    KeypadKey::at(Button::Decimal, 3, 1),
    KeypadKey::at(Button::Evaluate, 3, 2),
    op(Operator::Add, 3, 3),
    KeypadKey::at(Button::Percent, 3, 4),
    func(Function::Sin, 4, 0),
    func(Function::Cos, 4, 1),
    func(Function::Tan, 4, 2),
    func(Function::Log, 4, 3),
    func(Function::Ln, 4, 4),
    KeypadKey::at(Button::LeftParen, 5, 0),
    KeypadKey::at(Button::RightParen, 5, 1),
    KeypadKey::at(Button::Factorial, 5, 2),
    KeypadKey::at(Button::Power, 5, 3),
    KeypadKey::at(Button::Euler, 5, 4),
    KeypadKey::spanning(Button::Clear, 6, 0, 2),
    KeypadKey::spanning(Button::Delete, 6, 2, 3),
];

/// Render a layout as a plain-text grid, one line per keypad row.
pub fn render(mode: Mode) -> String {
    let layout = mode.layout();
    let rows = layout.iter().map(|key| key.row + 1).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut keys: Vec<&KeypadKey> = layout.iter().filter(|key| key.row == row).collect();
        keys.sort_by_key(|key| key.col);

        let line: String = keys
            .iter()
            .map(|key| {
                let width = CELL_WIDTH * key.col_span;
                format!("[{:^width$}]", key.button.label(), width = width - 2)
            })
            .collect();
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered_cells(mode: Mode) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = mode
            .layout()
            .iter()
            .flat_map(|key| {
                (key.row..key.row + key.row_span)
                    .flat_map(move |r| (key.col..key.col + key.col_span).map(move |c| (r, c)))
            })
            .collect();
        cells.sort();
        cells
    }

    #[test]
    fn test_layouts_fill_grid_without_overlap() {
        for mode in [Mode::Simple, Mode::Advanced] {
            let cells = covered_cells(mode);
            let rows = cells.iter().map(|(r, _)| r + 1).max().unwrap();
            let mut expected = Vec::new();
            for r in 0..rows {
                for c in 0..mode.columns() {
                    expected.push((r, c));
                }
            }
            assert_eq!(cells, expected, "{mode:?}");
        }
    }

    #[test]
    fn test_simple_layout_has_no_functions() {
        assert!(
            SIMPLE_LAYOUT
                .iter()
                .all(|key| key.style() != KeyStyle::Function && key.style() != KeyStyle::Grouping)
        );
    }

    #[test]
    fn test_styles() {
        let style_of = |label: &str| {
            ADVANCED_LAYOUT
                .iter()
                .find(|key| key.button.label() == label)
                .map(KeypadKey::style)
        };
        assert_eq!(style_of("^"), Some(KeyStyle::Operator));
        assert_eq!(style_of("="), Some(KeyStyle::Evaluate));
        assert_eq!(style_of("DEL"), Some(KeyStyle::Control));
        assert_eq!(style_of("√"), Some(KeyStyle::Function));
        assert_eq!(style_of("("), Some(KeyStyle::Grouping));
        assert_eq!(style_of("7"), Some(KeyStyle::Digit));
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::default(), Mode::Simple);
        assert_eq!(Mode::Simple.toggled(), Mode::Advanced);
        assert_eq!(Mode::Advanced.toggled(), Mode::Simple);
        assert_eq!(Mode::Simple.switch_label(), "Advanced Calculator");
    }

    #[test]
    fn test_render() {
        let text = render(Mode::Simple);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("7") && lines[0].contains("/"));
        assert!(lines[4].contains("DEL"));
        assert_eq!(render(Mode::Advanced).lines().count(), 7);
    }
}
