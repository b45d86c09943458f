// ============================================================================
// Numeric Module
// Exact integer scaling and the crate-wide error type
// ============================================================================
//
// This module provides:
// - checked_pow10: exact power-of-ten table for denomination rescaling
// - RenderError: error type for conversion, formatting and parsing
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)

mod errors;
mod pow10;

pub use errors::{RenderError, RenderResult};
pub use pow10::{checked_pow10, MAX_POW10_EXPONENT};
