// ============================================================================
// Numeric Module
// Exact decimal representation for monetary values
// ============================================================================
//
// This module provides:
// - Amount: exact scaled-integer decimal value (i128 units × 10^-scale)
// - MoneyError: error types for monetary operations
// - MAX_PRECISION: documented practical bound for scales and precisions
//
// Design principles:
// - No floating-point operations anywhere in the computation path
// - All arithmetic returns Result (no panics outside documented asserts)
// - One rounding primitive (rescale), round half away from zero
// - rust_decimal only at API boundaries, never in arithmetic

mod amount;
mod errors;

pub use amount::{Amount, MAX_PRECISION};
pub use errors::{MoneyError, MoneyResult};
