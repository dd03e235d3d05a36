// ============================================================================
// Numeric Module
// Digit-reduction arithmetic shared by every calculator
// ============================================================================
//
// This module provides:
// - reduce / reduce_trace: theosophical reduction with a per-number policy
// - Reduction: the full chain of a reduction, used for karmic debt detection
// - The fixed master-number, karmic-debt and vibration tables
//
// Design principles:
// - Total over u32, no panics, no allocation
// - No floating-point operations

mod reduction;

pub use reduction::{
    digit_sum, is_karmic_debt, is_master, reduce, reduce_trace, root, vibration_root, Reduction,
    ReductionPolicy, KARMIC_DEBTS, MASTER_NUMBERS, VIBRATIONS,
};
