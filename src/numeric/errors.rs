// ============================================================================
// Numeric Errors
// Error types for numeric function evaluation
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which non-finite float was fed to an integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NonFinite {
    Infinity,
    NaN,
}

/// Errors that can occur while evaluating a numeric function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum NumericError {
    /// Input lies outside the function's valid real domain
    DomainError,
    /// Input type is not accepted by the function
    TypeError {
        expected: &'static str,
        found: &'static str,
    },
    /// Infinity or NaN cannot be represented as an integer
    NonFiniteConversion(NonFinite),
    /// Integer result does not fit in i64
    Overflow,
}

impl NumericError {
    /// Error a real-only function raises for an input of kind `found`.
    pub const fn unsupported_type(found: &'static str) -> Self {
        NumericError::TypeError {
            expected: "real number",
            found,
        }
    }

    /// Shorthand for the error a real-only function raises on complex input.
    pub const fn complex_unsupported() -> Self {
        Self::unsupported_type("complex")
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DomainError => write!(f, "math domain error"),
            NumericError::TypeError { expected, found } => {
                write!(f, "must be {}, not {}", expected, found)
            },
            NumericError::NonFiniteConversion(NonFinite::Infinity) => {
                write!(f, "cannot convert float infinity to integer")
            },
            NumericError::NonFiniteConversion(NonFinite::NaN) => {
                write!(f, "cannot convert float NaN to integer")
            },
            NumericError::Overflow => {
                write!(f, "integer overflow: result exceeds 64-bit range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DomainError.to_string(), "math domain error");
        assert_eq!(
            NumericError::complex_unsupported().to_string(),
            "must be real number, not complex"
        );
        assert_eq!(
            NumericError::NonFiniteConversion(NonFinite::NaN).to_string(),
            "cannot convert float NaN to integer"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::DomainError, NumericError::DomainError);
        assert_ne!(NumericError::DomainError, NumericError::Overflow);
    }
}
