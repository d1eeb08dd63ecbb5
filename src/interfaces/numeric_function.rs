// ============================================================================
// Numeric Function Interface
// Defines the contract for functions exercised by the demo
// ============================================================================

use crate::numeric::{NumericResult, Value};

/// Strategy pattern interface for numeric functions
/// Implementations: real/complex square root, ceil/floor, finiteness checks
pub trait NumericFunction: Send + Sync {
    /// Evaluate the function on a single input
    ///
    /// # Arguments
    /// * `input` - The value to evaluate at
    ///
    /// # Returns
    /// The result, or the error the function raises for this input.
    /// Implementations validate the input before computing.
    fn evaluate(&self, input: Value) -> NumericResult<Value>;

    /// Function name as shown in output lines
    fn name(&self) -> &str;

    /// Whether complex inputs are accepted
    fn accepts_complex(&self) -> bool {
        false
    }
}
