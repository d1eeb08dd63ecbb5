// ============================================================================
// Edge Case Demo Library
// Shows which numeric functions fail on edge-case inputs and which return
// special values
// ============================================================================

//! # Edge Case Demo
//!
//! Pairs numeric functions with awkward inputs and reports, per pair, either
//! the computed value or the error the function raises.
//!
//! ## Features
//!
//! - **Explicit results**: every function returns `Result`; domain and type
//!   errors are values, not panics
//! - **Pluggable functions** behind the [`NumericFunction`](interfaces::NumericFunction) trait
//! - **Event stream** for observing runs (logging, recording)
//! - **Text or JSON output** (JSON with the `serde` feature)
//!
//! ## Example
//!
//! ```rust
//! use edge_case_demo::prelude::*;
//! use std::sync::Arc;
//!
//! let demo = EdgeCaseDemo::standard(Arc::new(NoOpEventHandler));
//!
//! let lines = demo.render_lines();
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[0], "math domain error");                  // sqrt(-1)
//! assert_eq!(lines[1], "ceil(4.5) -> 5");
//! assert_eq!(lines[2], "must be real number, not complex");   // isfinite(inf*1j)
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CaseOutcome, CaseSpec, DemoConfig, EdgeCase, FunctionKind, OutputFormat, RunId,
    };
    pub use crate::engine::{
        create_from_config, create_function, EdgeCaseDemo, EdgeCaseDemoBuilder,
    };
    pub use crate::interfaces::{
        DemoEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, NumericFunction,
        RecordingEventHandler,
    };
    pub use crate::numeric::{NumericError, NumericResult, Value};
}
