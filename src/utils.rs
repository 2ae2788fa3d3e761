//! Small numeric helpers shared across the crate.

/// Three-valued sign: `-1.0`, `0.0` or `1.0`.
///
/// Unlike [`f64::signum`], zero (of either sign) maps to `0.0`, so a zero
/// skew selects neither root branch. NaN maps to `0.0`.
#[inline]
#[must_use]
pub fn sgn(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
