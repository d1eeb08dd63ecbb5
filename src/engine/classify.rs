// ============================================================================
// Classification Predicates
// isfinite / isnan / isinf over reals, plus the complex-aware isfinite
// ============================================================================

use crate::interfaces::NumericFunction;
use crate::numeric::{NumericResult, Value};

/// True when the input is neither infinite nor NaN. Rejects complex input.
pub struct IsFinite;

impl NumericFunction for IsFinite {
    fn evaluate(&self, input: Value) -> NumericResult<Value> {
        Ok(Value::Bool(input.to_real()?.is_finite()))
    }

    fn name(&self) -> &str {
        "isfinite"
    }
}

/// True when both parts of the (promoted) complex input are finite.
pub struct ComplexIsFinite;

impl NumericFunction for ComplexIsFinite {
    fn evaluate(&self, input: Value) -> NumericResult<Value> {
        let z = input.to_complex();
        Ok(Value::Bool(z.re.is_finite() && z.im.is_finite()))
    }

    fn name(&self) -> &str {
        "isfinite"
    }

    fn accepts_complex(&self) -> bool {
        true
    }
}

pub struct IsNan;

impl NumericFunction for IsNan {
    fn evaluate(&self, input: Value) -> NumericResult<Value> {
        Ok(Value::Bool(input.to_real()?.is_nan()))
    }

    fn name(&self) -> &str {
        "isnan"
    }
}

pub struct IsInf;

impl NumericFunction for IsInf {
    fn evaluate(&self, input: Value) -> NumericResult<Value> {
        Ok(Value::Bool(input.to_real()?.is_infinite()))
    }

    fn name(&self) -> &str {
        "isinf"
    }
}
