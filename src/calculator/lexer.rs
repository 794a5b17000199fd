//! Tokenizer for calculator notation.
//!
//! Turns the display text (`"√(16)+5x²"`, `"sin(π/2)"`, `"5!"`) into a flat
//! token stream. Constants and function names are recognised as whole
//! identifiers, so the Euler constant `e` never matches inside a longer
//! name.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::Fault;

lazy_static! {
    /// Decimal literal without exponent: `12`, `12.`, `12.5`, `.5`.
    static ref NUMBER: Regex = Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)").unwrap();

    /// Run of ASCII letters forming a function name or constant.
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z]+").unwrap();
}

/// Postfix power markers as they appear on the keypad. Checked before
/// identifiers so that the `x` of `x²` is not read as a name.
const POWER_MARKERS: &[(&str, Token)] = &[
    ("x²", Token::Squared),
    ("x³", Token::Cubed),
    ("²", Token::Squared),
    ("³", Token::Cubed),
];

/// Single-argument functions available on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
}

impl Function {
    pub const ALL: [Function; 6] = [
        Function::Sqrt,
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Log,
        Function::Ln,
    ];

    /// The name as written in an expression (and on its button).
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
        }
    }

    /// The text inserted into the expression: the name plus an open paren.
    pub fn call_prefix(self) -> &'static str {
        match self {
            Self::Sqrt => "√(",
            Self::Sin => "sin(",
            Self::Cos => "cos(",
            Self::Tan => "tan(",
            Self::Log => "log(",
            Self::Ln => "ln(",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// A lexical token of calculator notation.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Pi,
    Euler,
    Function(Function),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Percent,
    Bang,
    Squared,
    Cubed,
    LParen,
    RParen,
}

/// Split `input` into tokens. Whitespace is skipped.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Fault> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(ch) = input[pos..].chars().next() {
        let rest = &input[pos..];

        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        if let Some(m) = NUMBER.find(rest) {
            let literal = m.as_str();
            let value = literal
                .parse::<f64>()
                .map_err(|_| Fault::InvalidNumber(literal.to_string()))?;
            tokens.push(Token::Number(value));
            pos += m.end();
            continue;
        }

        if let Some((marker, token)) = POWER_MARKERS.iter().find(|(m, _)| rest.starts_with(m)) {
            tokens.push(token.clone());
            pos += marker.len();
            continue;
        }

        if let Some(m) = IDENTIFIER.find(rest) {
            tokens.push(identifier(m.as_str())?);
            pos += m.end();
            continue;
        }

        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '%' => Token::Percent,
            '!' => Token::Bang,
            '(' => Token::LParen,
            ')' => Token::RParen,
            'π' => Token::Pi,
            '√' => Token::Function(Function::Sqrt),
            _ => return Err(Fault::UnexpectedChar { ch, at: pos }),
        };
        tokens.push(token);
        pos += ch.len_utf8();
    }

    Ok(tokens)
}

fn identifier(name: &str) -> Result<Token, Fault> {
    if name == "e" {
        return Ok(Token::Euler);
    }
    Function::from_name(name)
        .map(Token::Function)
        .ok_or_else(|| Fault::UnknownIdentifier(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(tokenize("42").unwrap(), vec![Token::Number(42.0)]);
        assert_eq!(tokenize("4.25").unwrap(), vec![Token::Number(4.25)]);
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(tokenize("5.").unwrap(), vec![Token::Number(5.0)]);
    }

    #[test]
    fn test_repeated_decimal_point_splits_literal() {
        assert_eq!(
            tokenize("1.2.3").unwrap(),
            vec![Token::Number(1.2), Token::Number(0.3)]
        );
    }

    #[test]
    fn test_operators_and_whitespace() {
        assert_eq!(
            tokenize(" 2 + 3*4 ").unwrap(),
            vec![
                Token::Number(2.0),
                Token::Plus,
                Token::Number(3.0),
                Token::Star,
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_keypad_markers() {
        assert_eq!(
            tokenize("√(16)").unwrap(),
            vec![
                Token::Function(Function::Sqrt),
                Token::LParen,
                Token::Number(16.0),
                Token::RParen,
            ]
        );
        assert_eq!(
            tokenize("5x²").unwrap(),
            vec![Token::Number(5.0), Token::Squared]
        );
        assert_eq!(tokenize("2³").unwrap(), vec![Token::Number(2.0), Token::Cubed]);
        assert_eq!(
            tokenize("5!%").unwrap(),
            vec![Token::Number(5.0), Token::Bang, Token::Percent]
        );
    }

    #[test]
    fn test_euler_does_not_collide_with_names() {
        assert_eq!(
            tokenize("ln(e)").unwrap(),
            vec![
                Token::Function(Function::Ln),
                Token::LParen,
                Token::Euler,
                Token::RParen,
            ]
        );
        assert_eq!(tokenize("π").unwrap(), vec![Token::Pi]);
    }

    #[test]
    fn test_unknown_input_rejected() {
        assert_eq!(
            tokenize("Error").unwrap_err(),
            Fault::UnknownIdentifier("Error".to_string())
        );
        assert_eq!(
            tokenize("2 # 3").unwrap_err(),
            Fault::UnexpectedChar { ch: '#', at: 2 }
        );
        assert!(tokenize("x").is_err());
    }
}
