// ============================================================================
// Demo Factory
// Creates functions and demos from configuration
// ============================================================================

use crate::domain::{CaseSpec, DemoConfig, EdgeCase, FunctionKind, OutputFormat};
use crate::engine::{
    Ceil, ComplexIsFinite, ComplexSqrt, EdgeCaseDemo, Floor, IsFinite, IsInf, IsNan, RealSqrt,
};
use crate::interfaces::{EventHandler, NumericFunction};
use crate::numeric::Value;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the numeric function for a kind
pub fn create_function(kind: &FunctionKind) -> Arc<dyn NumericFunction> {
    match kind {
        FunctionKind::Sqrt => Arc::new(RealSqrt),
        FunctionKind::ComplexSqrt => Arc::new(ComplexSqrt),
        FunctionKind::Ceil => Arc::new(Ceil),
        FunctionKind::Floor => Arc::new(Floor),
        FunctionKind::IsFinite => Arc::new(IsFinite),
        FunctionKind::ComplexIsFinite => Arc::new(ComplexIsFinite),
        FunctionKind::IsNan => Arc::new(IsNan),
        FunctionKind::IsInf => Arc::new(IsInf),
    }
}

fn build_case(spec: &CaseSpec) -> EdgeCase {
    let case = EdgeCase::new(create_function(&spec.kind), spec.input);
    match &spec.name {
        Some(name) => case.with_name(name.clone()),
        None => case,
    }
}

/// Instantiates every case of a configuration, in order. Does not validate.
pub fn build_cases(config: &DemoConfig) -> Vec<EdgeCase> {
    config.cases.iter().map(build_case).collect()
}

/// Creates a demo from configuration
///
/// # Arguments
/// * `config` - Demo configuration
/// * `event_handler` - Event handler for run and case events
///
/// # Returns
/// * `Result<EdgeCaseDemo, String>` - Configured demo or validation error
///
/// # Example
/// ```
/// use edge_case_demo::prelude::*;
/// use std::sync::Arc;
///
/// let demo = create_from_config(DemoConfig::standard(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(demo.render_lines()[1], "ceil(4.5) -> 5");
/// ```
pub fn create_from_config(
    config: DemoConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<EdgeCaseDemo, String> {
    config.validate()?;

    Ok(EdgeCaseDemo::new(build_cases(&config), event_handler).with_format(config.format))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating demos with fluent API
///
/// # Example
/// ```
/// use edge_case_demo::prelude::*;
/// use std::sync::Arc;
///
/// let demo = EdgeCaseDemoBuilder::new()
///     .case(FunctionKind::Floor, Value::Real(-2.5))
///     .named_case("csqrt", FunctionKind::ComplexSqrt, Value::Int(-1))
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(demo.render_lines(), vec!["floor(-2.5) -> -3", "csqrt(-1) -> 1j"]);
/// ```
pub struct EdgeCaseDemoBuilder {
    config: DemoConfig,
}

impl EdgeCaseDemoBuilder {
    /// Create a builder with no cases
    pub fn new() -> Self {
        Self {
            config: DemoConfig::new(OutputFormat::Text),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: DemoConfig) -> Self {
        Self { config }
    }

    /// Add the three stock cases
    pub fn standard_cases(mut self) -> Self {
        self.config.cases.extend(DemoConfig::standard().cases);
        self
    }

    pub fn case(mut self, kind: FunctionKind, input: Value) -> Self {
        self.config = self.config.with_case(kind, input);
        self
    }

    pub fn named_case(mut self, name: impl Into<String>, kind: FunctionKind, input: Value) -> Self {
        self.config = self.config.with_named_case(name, kind, input);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Build the demo
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<EdgeCaseDemo, String> {
        create_from_config(self.config, event_handler)
    }
}

impl Default for EdgeCaseDemoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_every_kind_reports_its_name() {
        let kinds = [
            FunctionKind::Sqrt,
            FunctionKind::ComplexSqrt,
            FunctionKind::Ceil,
            FunctionKind::Floor,
            FunctionKind::IsFinite,
            FunctionKind::ComplexIsFinite,
            FunctionKind::IsNan,
            FunctionKind::IsInf,
        ];
        for kind in kinds {
            assert_eq!(create_function(&kind).name(), kind.name());
        }
    }

    #[test]
    fn test_complex_acceptance() {
        assert!(create_function(&FunctionKind::ComplexSqrt).accepts_complex());
        assert!(create_function(&FunctionKind::ComplexIsFinite).accepts_complex());
        assert!(!create_function(&FunctionKind::IsFinite).accepts_complex());
    }

    #[test]
    fn test_create_from_config() {
        let demo = create_from_config(DemoConfig::standard(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(demo.cases().len(), 3);
        assert_eq!(demo.format(), OutputFormat::Text);
    }

    #[test]
    fn test_create_from_invalid_config() {
        let result = create_from_config(
            DemoConfig::new(OutputFormat::Text),
            Arc::new(NoOpEventHandler),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let demo = EdgeCaseDemoBuilder::new()
            .standard_cases()
            .named_case("cisfinite", FunctionKind::ComplexIsFinite, Value::complex_infinity())
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        let lines = demo.render_lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "cisfinite((nan+infj)) -> False");
    }

    #[test]
    fn test_builder_from_config_appends() {
        let builder = EdgeCaseDemoBuilder::from_config(DemoConfig::standard())
            .case(FunctionKind::IsNan, Value::Real(f64::NAN));
        assert_eq!(builder.config().cases.len(), 4);

        let lines = builder.build(Arc::new(NoOpEventHandler)).unwrap().render_lines();
        assert_eq!(lines[1], "ceil(4.5) -> 5");
        assert_eq!(lines[3], "isnan(nan) -> True");
    }

    #[test]
    fn test_builder_rejects_blank_name() {
        let result = EdgeCaseDemoBuilder::new()
            .named_case("", FunctionKind::Ceil, Value::Real(1.5))
            .build(Arc::new(NoOpEventHandler));
        assert_eq!(result.err(), Some("Case 0 has a blank name".to_string()));
    }
}
