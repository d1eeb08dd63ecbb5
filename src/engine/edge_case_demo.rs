// ============================================================================
// Edge Case Demo
// Evaluates each case in order and reports a value or the caught error
// ============================================================================

use crate::domain::{CaseOutcome, DemoConfig, EdgeCase, OutputFormat, RunId};
use crate::engine::factory::build_cases;
use crate::interfaces::{DemoEvent, EventHandler};
use chrono::Utc;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs a fixed, ordered list of edge cases
pub struct EdgeCaseDemo {
    /// Cases in evaluation order
    cases: Vec<EdgeCase>,

    /// Output format used by `run`
    format: OutputFormat,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl EdgeCaseDemo {
    /// Create a demo over the given cases, printing text
    pub fn new(cases: Vec<EdgeCase>, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            cases,
            format: OutputFormat::Text,
            event_handler,
        }
    }

    /// The stock three-case demo
    pub fn standard(event_handler: Arc<dyn EventHandler>) -> Self {
        Self::new(build_cases(&DemoConfig::standard()), event_handler)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn cases(&self) -> &[EdgeCase] {
        &self.cases
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Evaluate every case in order.
    ///
    /// A failing case never stops the run: its error is stored in the
    /// outcome and the next case is evaluated.
    pub fn evaluate(&self) -> Vec<CaseOutcome> {
        let run_id = RunId::new();
        let mut events = Vec::with_capacity(self.cases.len() + 2);

        info!(run_id = %run_id.as_uuid(), cases = self.cases.len(), "Edge case run started");
        events.push(DemoEvent::RunStarted {
            run_id,
            case_count: self.cases.len(),
            timestamp: Utc::now(),
        });

        let mut outcomes = Vec::with_capacity(self.cases.len());
        for (index, case) in self.cases.iter().enumerate() {
            let outcome = case.evaluate(index);

            match &outcome.result {
                Ok(output) => {
                    debug!(
                        index,
                        function = %case.name,
                        input = %case.input,
                        output = %output,
                        "Case succeeded"
                    );
                    events.push(DemoEvent::CaseSucceeded {
                        run_id,
                        index,
                        function: case.name.clone(),
                        input: case.input,
                        output: *output,
                        timestamp: Utc::now(),
                    });
                },
                Err(error) => {
                    debug!(
                        index,
                        function = %case.name,
                        input = %case.input,
                        error = %error,
                        "Case failed"
                    );
                    events.push(DemoEvent::CaseFailed {
                        run_id,
                        index,
                        function: case.name.clone(),
                        input: case.input,
                        error: *error,
                        timestamp: Utc::now(),
                    });
                },
            }

            outcomes.push(outcome);
        }

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        let failed = outcomes.len() - succeeded;
        info!(run_id = %run_id.as_uuid(), succeeded, failed, "Edge case run completed");
        events.push(DemoEvent::RunCompleted {
            run_id,
            succeeded,
            failed,
            timestamp: Utc::now(),
        });

        self.event_handler.on_events(events);
        outcomes
    }

    /// Text lines for every case, in order
    pub fn render_lines(&self) -> Vec<String> {
        self.evaluate().iter().map(CaseOutcome::render).collect()
    }

    /// Write one newline-terminated line per case
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for outcome in self.evaluate() {
            match self.format {
                OutputFormat::Text => writeln!(out, "{}", outcome.render())?,
                #[cfg(feature = "serde")]
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &outcome.to_record())?;
                    writeln!(out)?;
                },
            }
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FunctionKind;
    use crate::engine::factory::create_function;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};
    use crate::numeric::{NumericError, Value};

    fn standard() -> EdgeCaseDemo {
        EdgeCaseDemo::standard(Arc::new(NoOpEventHandler))
    }

    #[test]
    fn test_standard_lines() {
        let lines = standard().render_lines();
        assert_eq!(
            lines,
            vec![
                "math domain error".to_string(),
                "ceil(4.5) -> 5".to_string(),
                "must be real number, not complex".to_string(),
            ]
        );
    }

    #[test]
    fn test_standard_outcomes() {
        let outcomes = standard().evaluate();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].result, Err(NumericError::DomainError));
        assert_eq!(outcomes[1].result, Ok(Value::Int(5)));
        assert_eq!(
            outcomes[2].result,
            Err(NumericError::complex_unsupported())
        );
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.index, i);
        }
    }

    #[test]
    fn test_run_writes_newline_terminated_lines() {
        let mut buf = Vec::new();
        standard().run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "math domain error\nceil(4.5) -> 5\nmust be real number, not complex\n"
        );
    }

    #[test]
    fn test_failures_do_not_stop_the_run() {
        let cases = vec![
            EdgeCase::new(create_function(&FunctionKind::Sqrt), Value::Int(-4)),
            EdgeCase::new(create_function(&FunctionKind::Ceil), Value::Real(f64::NAN)),
            EdgeCase::new(create_function(&FunctionKind::Sqrt), Value::Int(16)),
        ];
        let lines = EdgeCaseDemo::new(cases, Arc::new(NoOpEventHandler)).render_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "sqrt(16) -> 4.0");
    }

    #[test]
    fn test_event_stream() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let demo = EdgeCaseDemo::standard(recorder.clone());
        demo.evaluate();

        let events = recorder.events();
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], DemoEvent::RunStarted { case_count: 3, .. }));
        assert!(matches!(events[1], DemoEvent::CaseFailed { index: 0, .. }));
        assert!(matches!(events[2], DemoEvent::CaseSucceeded { index: 1, .. }));
        assert!(matches!(events[3], DemoEvent::CaseFailed { index: 2, .. }));
        assert!(matches!(
            events[4],
            DemoEvent::RunCompleted {
                succeeded: 1,
                failed: 2,
                ..
            }
        ));

        let run_id = events[0].run_id();
        assert!(events.iter().all(|e| e.run_id() == run_id));
    }

    #[test]
    fn test_each_run_gets_a_fresh_id() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let demo = EdgeCaseDemo::standard(recorder.clone());
        demo.evaluate();
        assert_eq!(recorder.len(), 5);
        demo.evaluate();
        assert_eq!(recorder.len(), 10);

        let events = recorder.events();
        assert_ne!(events[0].run_id(), events[5].run_id());
    }

    #[test]
    fn test_output_is_idempotent() {
        fn same_output_twice(x: f64) -> bool {
            let demo = EdgeCaseDemo::new(
                vec![
                    EdgeCase::new(create_function(&FunctionKind::Ceil), Value::Real(x)),
                    EdgeCase::new(create_function(&FunctionKind::Sqrt), Value::Real(x)),
                    EdgeCase::new(create_function(&FunctionKind::IsFinite), Value::Real(x)),
                ],
                Arc::new(NoOpEventHandler),
            );
            demo.render_lines() == demo.render_lines()
        }

        quickcheck::quickcheck(same_output_twice as fn(f64) -> bool);
        assert_eq!(standard().render_lines(), standard().render_lines());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_output() {
        use crate::domain::CaseRecord;

        let mut buf = Vec::new();
        standard()
            .with_format(OutputFormat::Json)
            .run(&mut buf)
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        let records: Vec<CaseRecord> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 3);
        assert!(!records[0].ok);
        assert_eq!(records[1].result.as_deref(), Some("5"));
        assert_eq!(records[2].input, "(nan+infj)");
    }
}
