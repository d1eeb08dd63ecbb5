// ============================================================================
// Numeric Module
// Values, errors and rendering shared by every numeric function
// ============================================================================
//
// This module provides:
// - Value: bool / int / real / complex number with explicit promotion rules
// - NumericError: domain, type, conversion and overflow failures
// - format_real / format_complex / parse_real: REPL-style number rendering
//
// Design principles:
// - Every evaluation returns Result (no panics)
// - Domain is checked before computing, never inferred from a NaN afterwards

mod errors;
mod repr;
mod value;

pub use errors::{NonFinite, NumericError, NumericResult};
pub use repr::{format_complex, format_real, parse_real};
pub use value::Value;
