// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod case;
pub mod config;
pub mod outcome;

pub use case::EdgeCase;
pub use config::{CaseSpec, DemoConfig, FunctionKind, OutputFormat};
pub use outcome::{CaseOutcome, RunId};

#[cfg(feature = "serde")]
pub use outcome::CaseRecord;
