// ============================================================================
// Engine Module
// Contains the fixed-precision calculator business logic
// ============================================================================

mod calculator;

pub use calculator::{MoneyCalculator, DEFAULT_PRECISION};
