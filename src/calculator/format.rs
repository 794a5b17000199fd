//! Canonical decimal rendering of results.

use super::evaluation::ERROR_MARKER;

/// Below this magnitude results get extra fractional digits.
const SMALL_MAGNITUDE: f64 = 1e-6;
const SMALL_PRECISION: usize = 15;
const PRECISION: usize = 10;

/// Format a result without exponent notation.
///
/// Zero, and anything that rounds to zero at the printed precision, is
/// `"0.0"` without a sign. Other values are printed with a fixed number of
/// fractional digits (15 below 1e-6, otherwise 10), trailing zeros are
/// stripped and at least one fractional digit is kept. The output is
/// lossy for very large or very small magnitudes.
///
/// Non-finite values never come out of evaluation; they render as the
/// error marker.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let precision = if value.abs() < SMALL_MAGNITUDE {
        SMALL_PRECISION
    } else {
        PRECISION
    };
    let formatted = format!("{:.*}", precision, value);
    let mut trimmed = formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();

    if trimmed == "-0" {
        return "0.0".to_string();
    }
    if !trimmed.contains('.') {
        trimmed.push_str(".0");
    }
    trimmed
}
