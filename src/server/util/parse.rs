use std::str::FromStr;

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde_json::Value;

/// Parses a decimal from user supplied text, accepting plain or scientific notation.
///
/// # Arguments
/// - `value` - Raw text, surrounding whitespace is ignored
///
/// # Returns
/// - `Some(Decimal)` - Successfully parsed value
/// - `None` - The text is not a finite number
pub fn parse_decimal_lenient(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Coerces a JSON value into an integer.
///
/// Numbers have any fraction truncated toward zero and numeric strings are parsed the same
/// way. Anything else, including booleans and `null`, yields `None`.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| parse_decimal_lenient(s).and_then(|d| d.trunc().to_i64()))
        }
        _ => None,
    }
}

/// Coerces a JSON value into a record id.
///
/// Only whole numbers (or strings holding one) that fit in an `i32` are accepted.
pub fn coerce_id(value: &Value) -> Option<i32> {
    let id = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    i32::try_from(id).ok()
}
