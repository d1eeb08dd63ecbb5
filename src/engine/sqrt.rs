// ============================================================================
// Square Root
// Real-only root with a domain check, and the total principal complex root
// ============================================================================

use crate::interfaces::NumericFunction;
use crate::numeric::{NumericError, NumericResult, Value};

/// Real square root.
///
/// - Negative input: `DomainError`
/// - Complex input: `TypeError`
/// - NaN passes through, `-0.0` maps to `-0.0`
pub struct RealSqrt;

impl NumericFunction for RealSqrt {
    fn evaluate(&self, input: Value) -> NumericResult<Value> {
        let x = input.to_real()?;
        if x < 0.0 {
            return Err(NumericError::DomainError);
        }
        Ok(Value::Real(x.sqrt()))
    }

    fn name(&self) -> &str {
        "sqrt"
    }
}

/// Principal complex square root. Defined everywhere, always returns complex.
pub struct ComplexSqrt;

impl NumericFunction for ComplexSqrt {
    fn evaluate(&self, input: Value) -> NumericResult<Value> {
        Ok(Value::Complex(input.to_complex().sqrt()))
    }

    fn name(&self) -> &str {
        "sqrt"
    }

    fn accepts_complex(&self) -> bool {
        true
    }
}
