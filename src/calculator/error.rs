//! Error types for the calculator core.

use thiserror::Error;

use super::lexer::Token;

/// The single failure surfaced by expression evaluation.
///
/// Every syntax, domain and overflow fault collapses into this variant; the
/// caller only learns that the expression could not be evaluated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("evaluation failed")]
    EvaluationFailed,
}

/// Detailed cause of an evaluation failure.
///
/// Only used internally and for logging; converted into
/// [`CalcError::EvaluationFailed`] at the evaluation boundary.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Fault {
    #[error("unexpected character '{ch}' at byte {at}")]
    UnexpectedChar { ch: char, at: usize },
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
    #[error("unexpected token {0:?}")]
    UnexpectedToken(Token),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expression nested too deeply")]
    TooDeep,
    #[error("division by zero")]
    DivisionByZero,
    #[error("{value} is outside the domain of {operation}")]
    Domain {
        value: f64,
        operation: &'static str,
    },
    #[error("result is not a finite number")]
    NonFinite,
}

impl From<Fault> for CalcError {
    fn from(_: Fault) -> Self {
        CalcError::EvaluationFailed
    }
}

/// Errors raised while feeding input into a [`Calculator`](super::Calculator).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown button '{0}'")]
    UnknownButton(String),
    #[error("no history entry at index {0}")]
    NoHistoryEntry(usize),
}
