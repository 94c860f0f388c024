//! Precision constants for solving and display.
//!
//! Solver output is rounded to `SOLUTION_DECIMALS`; display rounding never
//! touches stored values.

/// Decimal places kept on every back-substituted component.
/// Suppresses accumulation noise so equal systems give equal solutions.
pub const SOLUTION_DECIMALS: i32 = 13;

/// Decimal places shown when rendering a vector.
pub const VECTOR_DISPLAY_DECIMALS: i32 = 4;

/// Decimal places shown when rendering a matrix.
pub const MATRIX_DISPLAY_DECIMALS: i32 = 3;

/// Field width of a rendered matrix element.
pub const MATRIX_DISPLAY_WIDTH: usize = 9;

/// Confusion tolerance for checking coincidence of two points, relative to
/// their scale (`CONFUSION * (1 + scale)`).
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Rounds `value` to `decimals` places, halves away from zero.
/// NaN and infinities pass through untouched.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
