// ============================================================================
// Case Outcome Domain Model
// ============================================================================

use crate::numeric::{NumericResult, Value};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Identifies a single demo run in the event stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Case Outcome
// ============================================================================

/// Result of evaluating one edge case: the value, or the caught error
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    /// Position in the case list
    pub index: usize,
    pub name: String,
    pub input: Value,
    pub result: NumericResult<Value>,
}

impl CaseOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Output line: `name(input) -> result` on success, the bare error
    /// message on failure.
    pub fn render(&self) -> String {
        match &self.result {
            Ok(value) => format!("{}({}) -> {}", self.name, self.input, value),
            Err(err) => err.to_string(),
        }
    }

    /// Flat record for machine-readable output
    #[cfg(feature = "serde")]
    pub fn to_record(&self) -> CaseRecord {
        let (result, error) = match &self.result {
            Ok(value) => (Some(value.to_string()), None),
            Err(err) => (None, Some(err.to_string())),
        };
        CaseRecord {
            index: self.index,
            function: self.name.clone(),
            input: self.input.to_string(),
            ok: self.is_success(),
            result,
            error,
        }
    }
}

/// JSON form of a [`CaseOutcome`]. Numbers are rendered as text, since JSON
/// has no NaN or infinity.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub index: usize,
    pub function: String,
    pub input: String,
    pub ok: bool,
    pub result: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_render_success() {
        let outcome = CaseOutcome {
            index: 1,
            name: "ceil".to_string(),
            input: Value::Real(4.5),
            result: Ok(Value::Int(5)),
        };
        assert!(outcome.is_success());
        assert_eq!(outcome.render(), "ceil(4.5) -> 5");
    }

    #[test]
    fn test_render_failure_is_message_only() {
        let outcome = CaseOutcome {
            index: 0,
            name: "sqrt".to_string(),
            input: Value::Int(-1),
            result: Err(NumericError::DomainError),
        };
        assert!(!outcome.is_success());
        assert_eq!(outcome.render(), "math domain error");
    }

    #[test]
    fn test_run_ids_are_unique() {
        assert_ne!(RunId::new(), RunId::new());
    }

    #[test]
    fn test_run_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let run_id = RunId::from_uuid(uuid);
        assert_eq!(run_id.as_uuid(), &uuid);
        assert_eq!(run_id, RunId::from_uuid(uuid));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_renders_non_finite_as_text() {
        let outcome = CaseOutcome {
            index: 2,
            name: "isfinite".to_string(),
            input: Value::complex_infinity(),
            result: Err(NumericError::complex_unsupported()),
        };
        let record = outcome.to_record();
        assert_eq!(record.input, "(nan+infj)");
        assert!(!record.ok);
        assert_eq!(
            record.error.as_deref(),
            Some("must be real number, not complex")
        );
    }
}
