// ============================================================================
// Numeric Value
// Dynamically-kinded number passed into and out of numeric functions
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::repr::{format_complex, format_real};
use num_complex::Complex64;
use std::fmt;

#[cfg(feature = "serde")]
use super::repr::{format_component, parse_real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number of one of the four kinds the demo functions consume or produce.
///
/// `Bool` and `Int` promote to `Real` wherever a real argument is expected,
/// and every kind promotes to `Complex`. Nothing demotes implicitly.
///
/// With `serde`, floats that JSON cannot hold are written as the strings
/// `"nan"`, `"inf"` and `"-inf"`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "ValueRepr", try_from = "ValueRepr")
)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Real(f64),
    Complex(Complex64),
}

impl Value {
    /// Infinity times the imaginary unit, computed as a complex product.
    ///
    /// The real part comes out as `inf * 0 = NaN`, so this renders as
    /// `(nan+infj)` rather than `infj`.
    pub fn complex_infinity() -> Self {
        Value::Complex(Complex64::new(f64::INFINITY, 0.0) * Complex64::i())
    }

    /// Short kind name, as used in type error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Real(_) => "float",
            Value::Complex(_) => "complex",
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Value::Complex(_))
    }

    /// Promote to a real number, rejecting complex values.
    pub fn to_real(&self) -> NumericResult<f64> {
        match *self {
            Value::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
            Value::Int(i) => Ok(i as f64),
            Value::Real(x) => Ok(x),
            Value::Complex(_) => Err(NumericError::unsupported_type(self.type_name())),
        }
    }

    /// Promote to a complex number. Always succeeds.
    pub fn to_complex(&self) -> Complex64 {
        match *self {
            Value::Complex(z) => z,
            Value::Bool(b) => Complex64::new(if b { 1.0 } else { 0.0 }, 0.0),
            Value::Int(i) => Complex64::new(i as f64, 0.0),
            Value::Real(x) => Complex64::new(x, 0.0),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Real(x) => f.write_str(&format_real(*x)),
            Value::Complex(z) => f.write_str(&format_complex(*z)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Real(x)
    }
}

impl From<Complex64> for Value {
    fn from(z: Complex64) -> Self {
        Value::Complex(z)
    }
}

// ============================================================================
// Serialized Form
// ============================================================================

/// A float as JSON can carry it: a number when finite, text otherwise
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum JsonFloat {
    Number(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl JsonFloat {
    fn encode(x: f64) -> Self {
        if x.is_finite() {
            JsonFloat::Number(x)
        } else {
            JsonFloat::Text(format_component(x))
        }
    }

    fn decode(self) -> Result<f64, String> {
        match self {
            JsonFloat::Number(x) => Ok(x),
            JsonFloat::Text(text) => {
                parse_real(&text).ok_or_else(|| format!("invalid float literal: {:?}", text))
            },
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum ValueRepr {
    Bool(bool),
    Int(i64),
    Real(JsonFloat),
    Complex(JsonFloat, JsonFloat),
}

#[cfg(feature = "serde")]
impl From<Value> for ValueRepr {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => ValueRepr::Bool(b),
            Value::Int(i) => ValueRepr::Int(i),
            Value::Real(x) => ValueRepr::Real(JsonFloat::encode(x)),
            Value::Complex(z) => {
                ValueRepr::Complex(JsonFloat::encode(z.re), JsonFloat::encode(z.im))
            },
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ValueRepr> for Value {
    type Error = String;

    fn try_from(repr: ValueRepr) -> Result<Self, Self::Error> {
        Ok(match repr {
            ValueRepr::Bool(b) => Value::Bool(b),
            ValueRepr::Int(i) => Value::Int(i),
            ValueRepr::Real(x) => Value::Real(x.decode()?),
            ValueRepr::Complex(re, im) => {
                Value::Complex(Complex64::new(re.decode()?, im.decode()?))
            },
        })
    }
}
