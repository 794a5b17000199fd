//! Recursive-descent parser producing an expression tree.
//!
//! Precedence, loosest first:
//! - `+` `-` (left associative)
//! - `*` `/` (left associative)
//! - unary sign
//! - `^` (right associative, binds tighter than a leading sign: `-3^2 = -9`)
//! - postfix markers `!` `²` `³` `%`
//! - numbers, constants, calls and parenthesized groups

use super::error::Fault;
use super::lexer::{Function, Token, tokenize};

/// Bound on the depth of the produced tree. Nested groups, signs, chained
/// operators and postfix markers all count, so evaluating or dropping any
/// accepted expression stays within a small stack.
const MAX_DEPTH: usize = 512;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostfixOp {
    Factorial,
    Square,
    Cube,
    Percent,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Postfix {
        op: PostfixOp,
        operand: Box<Expr>,
    },
    Call {
        function: Function,
        arg: Box<Expr>,
    },
}

/// Parse calculator notation into an [`Expr`].
pub fn parse(input: &str) -> Result<Expr, Fault> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expr()?;
    match parser.peek() {
        Some(token) => Err(Fault::UnexpectedToken(token.clone())),
        None => Ok(expr),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<(), Fault> {
        match self.next() {
            Some(ref token) if token == expected => Ok(()),
            Some(token) => Err(Fault::UnexpectedToken(token)),
            None => Err(Fault::UnexpectedEnd),
        }
    }

    fn descend(&mut self) -> Result<(), Fault> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Fault::TooDeep);
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<Expr, Fault> {
        let entry = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Subtract,
                _ => break,
            };
            self.pos += 1;
            // Each fold wraps the chain so far one level deeper.
            self.descend()?;
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth = entry;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, Fault> {
        let entry = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Multiply,
                Some(Token::Slash) => BinaryOp::Divide,
                _ => break,
            };
            self.pos += 1;
            self.descend()?;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth = entry;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, Fault> {
        self.descend()?;
        let expr = if self.eat(&Token::Minus) {
            Expr::Negate(Box::new(self.unary()?))
        } else if self.eat(&Token::Plus) {
            self.unary()?
        } else {
            self.power()?
        };
        self.ascend();
        Ok(expr)
    }

    fn power(&mut self) -> Result<Expr, Fault> {
        let base = self.postfix()?;
        if self.eat(&Token::Caret) {
            let exponent = self.unary()?;
            return Ok(binary(BinaryOp::Power, base, exponent));
        }
        Ok(base)
    }

    fn postfix(&mut self) -> Result<Expr, Fault> {
        let entry = self.depth;
        let mut operand = self.primary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Bang) => PostfixOp::Factorial,
                Some(Token::Squared) => PostfixOp::Square,
                Some(Token::Cubed) => PostfixOp::Cube,
                Some(Token::Percent) => PostfixOp::Percent,
                _ => break,
            };
            self.pos += 1;
            self.descend()?;
            operand = Expr::Postfix {
                op,
                operand: Box::new(operand),
            };
        }
        self.depth = entry;
        Ok(operand)
    }

    fn primary(&mut self) -> Result<Expr, Fault> {
        match self.next() {
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::Pi) => Ok(Expr::Number(std::f64::consts::PI)),
            Some(Token::Euler) => Ok(Expr::Number(std::f64::consts::E)),
            Some(Token::LParen) => self.group(),
            Some(Token::Function(function)) => {
                self.expect(&Token::LParen)?;
                let arg = self.group()?;
                Ok(Expr::Call {
                    function,
                    arg: Box::new(arg),
                })
            }
            Some(token) => Err(Fault::UnexpectedToken(token)),
            None => Err(Fault::UnexpectedEnd),
        }
    }

    /// Body of a parenthesized group; the opening paren is already consumed.
    fn group(&mut self) -> Result<Expr, Fault> {
        self.descend()?;
        let inner = self.expr()?;
        self.expect(&Token::RParen)?;
        self.ascend();
        Ok(inner)
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
