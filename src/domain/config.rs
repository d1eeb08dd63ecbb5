// ============================================================================
// Demo Configuration
// Which functions run against which inputs, and how results are printed
// ============================================================================

use crate::numeric::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Function Kind
// ============================================================================

/// The numeric functions a case can exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionKind {
    /// Real square root; negative input is a domain error
    Sqrt,
    /// Principal complex square root; total
    ComplexSqrt,
    /// Integer ceiling of a real
    Ceil,
    /// Integer floor of a real
    Floor,
    /// Real finiteness predicate; rejects complex input
    IsFinite,
    /// Finiteness predicate over both complex parts
    ComplexIsFinite,
    /// Real NaN predicate
    IsNan,
    /// Real infinity predicate
    IsInf,
}

impl FunctionKind {
    /// Name shown in output lines. Real and complex variants share a name.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::Sqrt | FunctionKind::ComplexSqrt => "sqrt",
            FunctionKind::Ceil => "ceil",
            FunctionKind::Floor => "floor",
            FunctionKind::IsFinite | FunctionKind::ComplexIsFinite => "isfinite",
            FunctionKind::IsNan => "isnan",
            FunctionKind::IsInf => "isinf",
        }
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// How each outcome is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputFormat {
    /// `name(input) -> result`, or the bare error message
    #[default]
    Text,
    /// One JSON object per line
    #[cfg(feature = "serde")]
    Json,
}

// ============================================================================
// Demo Configuration
// ============================================================================

/// One case before its function has been instantiated
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaseSpec {
    pub kind: FunctionKind,
    pub input: Value,

    /// Optional: display name; None means the function's own name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
}

/// Complete configuration for a demo run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DemoConfig {
    /// Cases, evaluated in order
    pub cases: Vec<CaseSpec>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub format: OutputFormat,
}

impl DemoConfig {
    /// Create an empty configuration
    pub fn new(format: OutputFormat) -> Self {
        Self {
            cases: Vec::new(),
            format,
        }
    }

    /// The three stock pairings: `sqrt(-1)`, `ceil(4.5)`, `isfinite(inf*1j)`
    pub fn standard() -> Self {
        Self::new(OutputFormat::Text)
            .with_case(FunctionKind::Sqrt, Value::Int(-1))
            .with_case(FunctionKind::Ceil, Value::Real(4.5))
            .with_case(FunctionKind::IsFinite, Value::complex_infinity())
    }

    /// Builder method: Append a case
    pub fn with_case(mut self, kind: FunctionKind, input: Value) -> Self {
        self.cases.push(CaseSpec {
            kind,
            input,
            name: None,
        });
        self
    }

    /// Builder method: Append a case with a custom display name
    pub fn with_named_case(
        mut self,
        name: impl Into<String>,
        kind: FunctionKind,
        input: Value,
    ) -> Self {
        self.cases.push(CaseSpec {
            kind,
            input,
            name: Some(name.into()),
        });
        self
    }

    /// Builder method: Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cases.is_empty() {
            return Err("At least one case is required".to_string());
        }

        for (index, case) in self.cases.iter().enumerate() {
            if let Some(name) = &case.name {
                if name.trim().is_empty() {
                    return Err(format!("Case {} has a blank name", index));
                }
            }
        }

        Ok(())
    }

    /// Parse a configuration from JSON and validate it
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid demo config: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::standard()
    }
}
