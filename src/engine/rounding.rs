// ============================================================================
// Rounding
// Integer ceiling and floor of real inputs
// ============================================================================

use crate::interfaces::NumericFunction;
use crate::numeric::{NonFinite, NumericError, NumericResult, Value};

/// 2^63: first float past `i64::MAX`; `-2^63` is exactly `i64::MIN`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Convert an already-integral float to `Value::Int`.
fn to_integer(rounded: f64) -> NumericResult<Value> {
    if rounded.is_nan() {
        return Err(NumericError::NonFiniteConversion(NonFinite::NaN));
    }
    if rounded.is_infinite() {
        return Err(NumericError::NonFiniteConversion(NonFinite::Infinity));
    }
    if !(-I64_BOUND..I64_BOUND).contains(&rounded) {
        return Err(NumericError::Overflow);
    }
    Ok(Value::Int(rounded as i64))
}

fn round_with(input: Value, op: fn(f64) -> f64) -> NumericResult<Value> {
    match input {
        Value::Int(i) => Ok(Value::Int(i)),
        Value::Bool(b) => Ok(Value::Int(i64::from(b))),
        other => to_integer(op(other.to_real()?)),
    }
}

/// Least integer not below the input
pub struct Ceil;

impl NumericFunction for Ceil {
    fn evaluate(&self, input: Value) -> NumericResult<Value> {
        round_with(input, f64::ceil)
    }

    fn name(&self) -> &str {
        "ceil"
    }
}

/// Greatest integer not above the input
pub struct Floor;

impl NumericFunction for Floor {
    fn evaluate(&self, input: Value) -> NumericResult<Value> {
        round_with(input, f64::floor)
    }

    fn name(&self) -> &str {
        "floor"
    }
}
