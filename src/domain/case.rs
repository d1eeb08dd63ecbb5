// ============================================================================
// Edge Case Domain Model
// ============================================================================

use super::outcome::CaseOutcome;
use crate::interfaces::NumericFunction;
use crate::numeric::{NumericError, NumericResult, Value};
use std::fmt;
use std::sync::Arc;

/// A (name, function, input) triple evaluated once per run.
#[derive(Clone)]
pub struct EdgeCase {
    pub name: String,
    pub function: Arc<dyn NumericFunction>,
    pub input: Value,
}

impl EdgeCase {
    /// Create a case named after its function
    pub fn new(function: Arc<dyn NumericFunction>, input: Value) -> Self {
        Self {
            name: function.name().to_string(),
            function,
            input,
        }
    }

    /// Override the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Invoke the function on the input. Failures are captured, never raised.
    pub fn evaluate(&self, index: usize) -> CaseOutcome {
        CaseOutcome {
            index,
            name: self.name.clone(),
            input: self.input,
            result: self.invoke(),
        }
    }

    /// Complex input to a real-only function is a type error; the function
    /// is not called.
    fn invoke(&self) -> NumericResult<Value> {
        if self.input.is_complex() && !self.function.accepts_complex() {
            return Err(NumericError::unsupported_type(self.input.type_name()));
        }
        self.function.evaluate(self.input)
    }
}

impl fmt::Debug for EdgeCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeCase")
            .field("name", &self.name)
            .field("function", &self.function.name())
            .field("input", &self.input)
            .finish()
    }
}
