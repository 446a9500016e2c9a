//! Tolerance-based comparison of `f64` components.
//!
//! Every `approx_eq` in this workspace reduces to [`approx_eq`] on the
//! scalar components. Two components are considered different only
//! when one exceeds the other by more than the tolerance; a NaN
//! component is therefore never "different" from anything, which keeps
//! equality reflexive for every constructible value.

/// Default comparison tolerance, `1e-8`.
pub const DEFAULT_TOLERANCE: f64 = 0.000_000_01;

/// True iff `a` and `b` differ by more than `tolerance`.
pub fn not_equals(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b) > tolerance || (b - a) > tolerance
}

/// True iff `a` and `b` are within `tolerance` of each other.
///
/// # Example
///
/// ```rust
/// use algebra_core::tolerance::approx_eq;
/// use algebra_core::DEFAULT_TOLERANCE;
///
/// assert!(approx_eq(2.03, 2.0299999999, DEFAULT_TOLERANCE));
/// assert!(!approx_eq(1.0, 3.0, DEFAULT_TOLERANCE));
/// ```
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    !not_equals(a, b, tolerance)
}

/// True iff `a` is within [`DEFAULT_TOLERANCE`] of zero.
pub fn is_negligible(a: f64) -> bool {
    approx_eq(a, 0.0, DEFAULT_TOLERANCE)
}
