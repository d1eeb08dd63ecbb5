// ============================================================================
// Engine Module
// Numeric function implementations and the demo runner
// ============================================================================

mod classify;
mod edge_case_demo;
mod rounding;
mod sqrt;

pub mod factory;

pub use classify::{ComplexIsFinite, IsFinite, IsInf, IsNan};
pub use edge_case_demo::EdgeCaseDemo;
pub use factory::{build_cases, create_from_config, create_function, EdgeCaseDemoBuilder};
pub use rounding::{Ceil, Floor};
pub use sqrt::{ComplexSqrt, RealSqrt};
