// ===== Float tolerance helpers =====
// Value comparison for expressions goes through here so that `1.0/3.0 * 3.0`
// and `1.0` are treated as equal.

/// Default tolerance for floating-point comparisons
pub const FLOAT_TOLERANCE: f64 = 1e-10;

/// Check if two floats are approximately equal (NaN equals NaN)
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a == b || (a - b).abs() < FLOAT_TOLERANCE
}
