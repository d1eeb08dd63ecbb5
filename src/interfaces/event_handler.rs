// ============================================================================
// Event Handler Interface
// Defines the contract for observing demo runs
// ============================================================================

use crate::domain::RunId;
use crate::numeric::{NumericError, Value};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted while a demo run evaluates its cases
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DemoEvent {
    /// Run started
    RunStarted {
        run_id: RunId,
        case_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// Function returned a value
    CaseSucceeded {
        run_id: RunId,
        index: usize,
        function: String,
        input: Value,
        output: Value,
        timestamp: DateTime<Utc>,
    },

    /// Function raised an error, which was caught
    CaseFailed {
        run_id: RunId,
        index: usize,
        function: String,
        input: Value,
        error: NumericError,
        timestamp: DateTime<Utc>,
    },

    /// Every case has been evaluated
    RunCompleted {
        run_id: RunId,
        succeeded: usize,
        failed: usize,
        timestamp: DateTime<Utc>,
    },
}

impl DemoEvent {
    pub fn run_id(&self) -> RunId {
        match self {
            DemoEvent::RunStarted { run_id, .. }
            | DemoEvent::CaseSucceeded { run_id, .. }
            | DemoEvent::CaseFailed { run_id, .. }
            | DemoEvent::RunCompleted { run_id, .. } => *run_id,
        }
    }
}

/// Event handler trait for processing demo events
/// Implementations can handle logging, recording, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a demo event
    fn on_event(&self, event: DemoEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<DemoEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: DemoEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: DemoEvent) {
        tracing::debug!("Edge case demo event: {:?}", event);
    }
}

/// Keeps every event it receives, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<DemoEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<DemoEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: DemoEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<DemoEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(run_id: RunId) -> DemoEvent {
        DemoEvent::RunStarted {
            run_id,
            case_count: 3,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(started(RunId::new()));
        // Should not panic
    }

    #[test]
    fn test_recording_handler_keeps_order() {
        let handler = RecordingEventHandler::new();
        let run_id = RunId::new();

        handler.on_event(started(run_id));
        handler.on_events(vec![DemoEvent::RunCompleted {
            run_id,
            succeeded: 1,
            failed: 2,
            timestamp: Utc::now(),
        }]);

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DemoEvent::RunStarted { .. }));
        assert!(matches!(
            events[1],
            DemoEvent::RunCompleted {
                succeeded: 1,
                failed: 2,
                ..
            }
        ));
        assert!(events.iter().all(|e| e.run_id() == run_id));

        handler.clear();
        assert!(handler.is_empty());
    }
}
