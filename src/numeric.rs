//! Numeric cell normalization.

use serde::{Deserialize, Serialize};

/// Tolerance under which a value counts as a whole number.
const INTEGER_EPSILON: f64 = 1e-9;

const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
// 2^63, the first value past i64::MAX
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// A number as it should appear in generated output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberValue {
    /// Whole number
    Integer(i64),
    /// Fractional value rounded to 4 decimal places
    Decimal(f64),
}

/// Parse raw cell text as a number.
///
/// Surrounding whitespace and thousands separators are ignored. Empty text,
/// unparseable text and non-finite results give `None`.
pub fn normalize_number(value: &str) -> Option<f64> {
    let text = value.trim();
    if text.is_empty() {
        return None;
    }

    let text = text.replace(',', "");
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Round a weight to the nearest whole number, halves away from zero.
///
/// Returns `None` when the result does not fit in an `i64`.
pub fn round_weight(value: f64) -> Option<i64> {
    to_i64(value.round())
}

fn to_i64(whole: f64) -> Option<i64> {
    if !(I64_MIN_F64..I64_END_F64).contains(&whole) {
        return None;
    }
    Some(whole as i64)
}

/// Stringify-friendly form of a number: an integer when within 1e-9 of
/// one, otherwise rounded to 4 decimal places. Whole numbers outside the
/// `i64` range stay decimal.
pub fn stringify_number(value: f64) -> NumberValue {
    let whole = value.round();
    if (value - whole).abs() < INTEGER_EPSILON {
        if let Some(n) = to_i64(whole) {
            return NumberValue::Integer(n);
        }
        return NumberValue::Decimal(value);
    }
    NumberValue::Decimal((value * 10_000.0).round() / 10_000.0)
}
