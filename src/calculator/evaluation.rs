//! Expression evaluation.
//!
//! Parses calculator notation and walks the resulting tree in IEEE double
//! precision. Every fault (syntax, domain, division by zero, overflow) is
//! reported to the caller as [`CalcError::EvaluationFailed`]; the detailed
//! cause only goes to the debug log.

use tracing::debug;

use super::error::{CalcError, Fault};
use super::format::format_result;
use super::lexer::Function;
use super::parser::{BinaryOp, Expr, PostfixOp, parse};

/// Text shown in place of a result when evaluation fails.
pub const ERROR_MARKER: &str = "Error";

/// Largest n for which n! is finite in double precision.
const MAX_FACTORIAL: u32 = 170;

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// The expression produced a finite number.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Canonical formatted value.
        display_result: String,
    },
    /// The expression could not be evaluated.
    Error {
        /// The original expression.
        expression: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string: the formatted result, or the error marker.
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { .. } => ERROR_MARKER,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate an expression and format the outcome for display.
pub fn evaluate_expression(input: &str) -> CalcResult {
    let expression = input.to_string();

    match evaluate(input) {
        Ok(value) => CalcResult::Success {
            expression,
            display_result: format_result(value),
            value,
        },
        Err(_) => CalcResult::Error { expression },
    }
}

/// Evaluate an expression to a finite number.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    parse(input)
        .and_then(|expr| eval(&expr))
        .map_err(|fault| {
            debug!(expression = input, %fault, "evaluation failed");
            CalcError::from(fault)
        })
}

fn eval(expr: &Expr) -> Result<f64, Fault> {
    let value = match expr {
        Expr::Number(value) => *value,
        Expr::Negate(inner) => -eval(inner)?,
        Expr::Binary { op, lhs, rhs } => op.apply(eval(lhs)?, eval(rhs)?)?,
        Expr::Postfix { op, operand } => op.apply(eval(operand)?)?,
        Expr::Call { function, arg } => function.apply(eval(arg)?)?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Fault::NonFinite)
    }
}

impl BinaryOp {
    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, Fault> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(Fault::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
            Self::Power if lhs == 0.0 && rhs < 0.0 => Err(Fault::DivisionByZero),
            Self::Power if lhs < 0.0 && rhs.fract() != 0.0 => Err(Fault::Domain {
                value: lhs,
                operation: "fractional power",
            }),
            Self::Power => Ok(lhs.powf(rhs)),
        }
    }
}

impl PostfixOp {
    fn apply(self, operand: f64) -> Result<f64, Fault> {
        match self {
            Self::Factorial => factorial(operand),
            Self::Square => Ok(operand.powi(2)),
            Self::Cube => Ok(operand.powi(3)),
            Self::Percent => Ok(operand / 100.0),
        }
    }
}

impl Function {
    fn apply(self, arg: f64) -> Result<f64, Fault> {
        let domain = |operation| Fault::Domain {
            value: arg,
            operation,
        };
        match self {
            Self::Sqrt if arg < 0.0 => Err(domain("square root")),
            Self::Sqrt => Ok(arg.sqrt()),
            Self::Sin => Ok(arg.sin()),
            Self::Cos => Ok(arg.cos()),
            Self::Tan => Ok(arg.tan()),
            Self::Log if arg <= 0.0 => Err(domain("log")),
            Self::Log => Ok(arg.log10()),
            Self::Ln if arg <= 0.0 => Err(domain("ln")),
            Self::Ln => Ok(arg.ln()),
        }
    }
}

/// Factorial of a non-negative integral value.
///
/// The product is exact; the only rounding is the final conversion.
fn factorial(value: f64) -> Result<f64, Fault> {
    if value < 0.0 || value.fract() != 0.0 {
        return Err(Fault::Domain {
            value,
            operation: "factorial",
        });
    }
    if value > f64::from(MAX_FACTORIAL) {
        return Err(Fault::NonFinite);
    }

    let digits = factorial_digits(value as u32);
    digits
        .parse::<f64>()
        .map_err(|_| Fault::InvalidNumber(digits))
}

/// Decimal digits of n!, built from base 10^9 limbs.
fn factorial_digits(n: u32) -> String {
    const LIMB: u64 = 1_000_000_000;

    // Least significant limb first.
    let mut limbs: Vec<u64> = vec![1];
    for k in 2..=u64::from(n) {
        let mut carry = 0;
        for limb in &mut limbs {
            let product = *limb * k + carry;
            *limb = product % LIMB;
            carry = product / LIMB;
        }
        while carry > 0 {
            limbs.push(carry % LIMB);
            carry /= LIMB;
        }
    }

    let mut limbs = limbs.iter().rev();
    let mut digits = limbs.next().map(u64::to_string).unwrap_or_default();
    for limb in limbs {
        digits.push_str(&format!("{limb:09}"));
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(input: &str) -> String {
        evaluate_expression(input).display().to_string()
    }

    #[test]
    fn test_basic_evaluation() {
        let result = evaluate_expression("2+3*4");
        assert!(result.is_success());
        assert_eq!(result.display(), "14.0");
        assert_eq!(result.value(), Some(14.0));
        assert_eq!(result.expression(), "2+3*4");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(display("(2+3)*4"), "20.0");
        assert_eq!(display("10-4-3"), "3.0");
        assert_eq!(display("64/4/2"), "8.0");
        assert_eq!(display("2*(3+(4-1))/3"), "4.0");
        assert_eq!(display("-2+5"), "3.0");
        assert_eq!(display("2*-3"), "-6.0");
    }

    #[test]
    fn test_matches_native_arithmetic() {
        let cases: &[(&str, f64)] = &[
            ("1+2*3-4/5", 1.0 + 2.0 * 3.0 - 4.0 / 5.0),
            ("(1+2)*(3-4)/5", (1.0 + 2.0) * (3.0 - 4.0) / 5.0),
            ("0.1+0.2", 0.1 + 0.2),
            ("7/3*3", 7.0 / 3.0 * 3.0),
            ("((2.5-1)*(4+0.5))/1.5", ((2.5 - 1.0) * (4.0 + 0.5)) / 1.5),
        ];
        for (input, expected) in cases {
            assert_eq!(evaluate(input).unwrap(), *expected, "{input}");
        }
    }

    #[test]
    fn test_factorial() {
        assert_eq!(display("5!"), "120.0");
        assert_eq!(display("0!"), "1.0");
        assert_eq!(display("(2+1)!"), "6.0");
        assert_eq!(display("2^3!"), "64.0");
        assert_eq!(display("-5!"), "-120.0");
        assert_eq!(evaluate("20!").unwrap(), 2_432_902_008_176_640_000.0);
    }

    #[test]
    fn test_large_factorials_are_correctly_rounded() {
        assert_eq!(
            format_result(evaluate("35!").unwrap()),
            "10333147966386145431134989962796349784064.0"
        );
        assert_eq!(evaluate("35!").unwrap(), 1.0333147966386145e40);
        assert_eq!(evaluate("100!").unwrap(), 9.332621544394415e157);
        assert_eq!(evaluate("170!").unwrap(), 7.257415615307999e306);
    }

    #[test]
    fn test_long_chains_fail_cleanly() {
        let markers = format!("1{}", "%".repeat(200_000));
        assert_eq!(evaluate(&markers), Err(CalcError::EvaluationFailed));

        let sum = format!("1{}", "+1".repeat(200_000));
        assert_eq!(evaluate(&sum), Err(CalcError::EvaluationFailed));
        assert_eq!(display(&sum), ERROR_MARKER);

        assert_eq!(display(&format!("1{}", "+1".repeat(300))), "301.0");
    }

    #[test]
    fn test_factorial_digits() {
        assert_eq!(factorial_digits(0), "1");
        assert_eq!(factorial_digits(12), "479001600");
        assert_eq!(factorial_digits(13), "6227020800");
        assert_eq!(factorial_digits(25), "15511210043330985984000000");
    }

    #[test]
    fn test_factorial_domain() {
        assert_eq!(evaluate("2.5!"), Err(CalcError::EvaluationFailed));
        assert_eq!(evaluate("(0-3)!"), Err(CalcError::EvaluationFailed));
        assert_eq!(evaluate("171!"), Err(CalcError::EvaluationFailed));
        assert!(evaluate("170!").is_ok());
    }

    #[test]
    fn test_functions() {
        assert_eq!(display("√(16)"), "4.0");
        assert_eq!(display("√(2.25)"), "1.5");
        assert_eq!(display("sin(0)"), "0.0");
        assert_eq!(display("cos(0)"), "1.0");
        assert_eq!(display("tan(0)"), "0.0");
        assert_eq!(display("log(100)"), "2.0");
        assert_eq!(display("ln(e)"), "1.0");
        assert_eq!(display("sin(π/2)"), "1.0");
        assert_eq!(display("√(sin(0)+9)"), "3.0");
    }

    #[test]
    fn test_powers_and_percent() {
        assert_eq!(display("5x²"), "25.0");
        assert_eq!(display("3x³"), "27.0");
        assert_eq!(display("2+3x²"), "11.0");
        assert_eq!(display("(2+3)x²"), "25.0");
        assert_eq!(display("2^8"), "256.0");
        assert_eq!(display("-3^2"), "-9.0");
        assert_eq!(display("2^-1"), "0.5");
        assert_eq!(display("50%"), "0.5");
        assert_eq!(display("200*10%"), "20.0");
    }

    #[test]
    fn test_constants() {
        assert_eq!(display("π"), "3.1415926536");
        assert_eq!(display("e"), "2.7182818285");
        assert_eq!(display("2*π"), "6.2831853072");
    }

    #[test]
    fn test_division_by_zero() {
        let result = evaluate_expression("1/0");
        assert!(!result.is_success());
        assert_eq!(result.display(), ERROR_MARKER);
        assert_eq!(result.value(), None);
        assert_eq!(evaluate("1/(1-1)"), Err(CalcError::EvaluationFailed));
        assert_eq!(evaluate("0^-1"), Err(CalcError::EvaluationFailed));
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(evaluate("√(0-4)"), Err(CalcError::EvaluationFailed));
        assert_eq!(evaluate("log(0)"), Err(CalcError::EvaluationFailed));
        assert_eq!(evaluate("ln(0-1)"), Err(CalcError::EvaluationFailed));
        assert_eq!(evaluate("(0-8)^0.5"), Err(CalcError::EvaluationFailed));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(evaluate("10^400"), Err(CalcError::EvaluationFailed));
        assert_eq!(evaluate("1/(10^400)"), Err(CalcError::EvaluationFailed));
    }

    #[test]
    fn test_invalid_expression() {
        for input in ["", "2 +* 2", "Error", "Error5", "sin", "√16", "2π", "0("] {
            assert_eq!(evaluate(input), Err(CalcError::EvaluationFailed), "{input}");
        }
    }

    #[test]
    fn test_lone_zero() {
        assert_eq!(display("0"), "0.0");
        assert_eq!(display("-0"), "0.0");
    }
}
