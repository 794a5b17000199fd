//! Input tokens: keypad buttons and keyboard keys.

use std::fmt;
use std::str::FromStr;

use super::error::InputError;
use super::lexer::Function;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// One discrete unit of calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// A decimal digit, 0 through 9. Build it with [`Button::digit`];
    /// larger values insert nothing.
    Digit(u8),
    Decimal,
    Operator(Operator),
    LeftParen,
    RightParen,
    /// Inserts `name(`; the square root is `√(`.
    Function(Function),
    Square,
    Cube,
    Factorial,
    Power,
    Percent,
    Pi,
    Euler,
    Clear,
    Delete,
    Evaluate,
}

impl Button {
    /// The digit button for `d`, if `d` is a single decimal digit.
    pub fn digit(d: u32) -> Option<Self> {
        u8::try_from(d).ok().filter(|&d| d <= 9).map(Self::Digit)
    }

    /// Caption shown on the keypad.
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Function(f) => f.name(),
            Self::Square => "x²",
            Self::Cube => "x³",
            Self::Factorial => "x!",
            Self::Power => "^",
            Self::Percent => "%",
            Self::Pi => "π",
            Self::Euler => "e",
            Self::Clear => "C",
            Self::Delete => "DEL",
            Self::Evaluate => "=",
        }
    }

    /// Text this button adds to the expression, or `None` for the
    /// control buttons and out-of-range digits.
    pub fn insert_text(self) -> Option<&'static str> {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied(),
            Self::Function(f) => Some(f.call_prefix()),
            Self::Factorial => Some("!"),
            Self::Clear | Self::Delete | Self::Evaluate => None,
            other => Some(other.label()),
        }
    }

    /// Whether this button replaces the placeholder `"0"` instead of being
    /// appended to it.
    ///
    /// Decimal point, parentheses, postfix markers and `^` always append.
    pub fn replaces_empty(self) -> bool {
        matches!(
            self,
            Self::Digit(_) | Self::Operator(_) | Self::Function(_) | Self::Pi | Self::Euler
        )
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Button {
    type Err = InputError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if let Some(d) = DIGIT_LABELS.iter().position(|&l| l == label) {
            return Ok(Self::Digit(d as u8));
        }
        if let Some(f) = Function::from_name(label) {
            return Ok(Self::Function(f));
        }

        let button = match label {
            "." => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            "(" => Self::LeftParen,
            ")" => Self::RightParen,
            "x²" => Self::Square,
            "x³" => Self::Cube,
            "x!" | "!" => Self::Factorial,
            "^" => Self::Power,
            "%" => Self::Percent,
            "π" => Self::Pi,
            "e" => Self::Euler,
            "C" => Self::Clear,
            "DEL" => Self::Delete,
            "=" => Self::Evaluate,
            _ => return Err(InputError::UnknownButton(label.to_string())),
        };
        Ok(button)
    }
}

/// A keyboard key as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

/// Map a keyboard key to the button it stands for.
///
/// Only digits, `+ - * / ( ) . ^`, `=`/Enter, Backspace and Escape are
/// bound; anything else is left to the host.
pub fn map_key(key: Key) -> Option<Button> {
    match key {
        Key::Enter | Key::Char('=') => Some(Button::Evaluate),
        Key::Backspace => Some(Button::Delete),
        Key::Escape => Some(Button::Clear),
        Key::Char(c) if c.is_ascii_digit() => c.to_digit(10).and_then(Button::digit),
        Key::Char(c) if "+-*/().^".contains(c) => c.to_string().parse().ok(),
        Key::Char(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        let buttons = [
            Button::Digit(0),
            Button::Digit(9),
            Button::Decimal,
            Button::Operator(Operator::Divide),
            Button::LeftParen,
            Button::Function(Function::Sqrt),
            Button::Function(Function::Ln),
            Button::Square,
            Button::Cube,
            Button::Factorial,
            Button::Power,
            Button::Percent,
            Button::Pi,
            Button::Euler,
            Button::Clear,
            Button::Delete,
            Button::Evaluate,
        ];
        for button in buttons {
            assert_eq!(button.label().parse::<Button>(), Ok(button));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(
            "sinh".parse::<Button>(),
            Err(InputError::UnknownButton("sinh".to_string()))
        );
        assert!("10".parse::<Button>().is_err());
    }

    #[test]
    fn test_insert_text() {
        assert_eq!(Button::Function(Function::Sin).insert_text(), Some("sin("));
        assert_eq!(Button::Function(Function::Sqrt).insert_text(), Some("√("));
        assert_eq!(Button::Factorial.insert_text(), Some("!"));
        assert_eq!(Button::Square.insert_text(), Some("x²"));
        assert_eq!(Button::Digit(4).insert_text(), Some("4"));
        assert_eq!(Button::Evaluate.insert_text(), None);
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Button::digit(0), Some(Button::Digit(0)));
        assert_eq!(Button::digit(9), Some(Button::Digit(9)));
        assert_eq!(Button::digit(10), None);
        assert_eq!(Button::digit(300), None);
        assert_eq!(Button::Digit(12).insert_text(), None);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(Key::Char('7')), Some(Button::Digit(7)));
        assert_eq!(
            map_key(Key::Char('*')),
            Some(Button::Operator(Operator::Multiply))
        );
        assert_eq!(map_key(Key::Char('(')), Some(Button::LeftParen));
        assert_eq!(map_key(Key::Char('.')), Some(Button::Decimal));
        assert_eq!(map_key(Key::Char('^')), Some(Button::Power));
        assert_eq!(map_key(Key::Char('=')), Some(Button::Evaluate));
        assert_eq!(map_key(Key::Enter), Some(Button::Evaluate));
        assert_eq!(map_key(Key::Backspace), Some(Button::Delete));
        assert_eq!(map_key(Key::Escape), Some(Button::Clear));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(map_key(Key::Char('a')), None);
        assert_eq!(map_key(Key::Char('e')), None);
        assert_eq!(map_key(Key::Char('%')), None);
        assert_eq!(map_key(Key::Char('٣')), None);
    }
}
