//! The real numbers as the innermost coefficient ring.

use crate::tolerance::{approx_eq, is_negligible};
use crate::{DivisionError, Ring};

/// `+∞` for `sign >= 0`, `-∞` otherwise.
pub fn signed_inf(sign: i32) -> f64 {
    if sign >= 0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}

impl Ring for f64 {
    const DIM: usize = 1;

    fn conj(&self) -> Self {
        *self
    }

    fn dil(&self, a: f64) -> Self {
        self * a
    }

    fn real_core(&self) -> f64 {
        *self
    }

    fn is_zero_divisor(&self) -> bool {
        is_negligible(*self)
    }

    fn inv(&self) -> Result<Self, DivisionError> {
        if self.is_zero_divisor() {
            return Err(DivisionError::ZeroDivisor);
        }
        Ok(self.recip())
    }

    fn approx_eq_with(&self, other: &Self, tolerance: f64) -> bool {
        approx_eq(*self, *other, tolerance)
    }

    fn for_each_component(&self, f: &mut dyn FnMut(f64)) {
        f(*self)
    }

    fn from_components(next: &mut dyn FnMut() -> f64) -> Self {
        next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_inf_follows_sign() {
        assert_eq!(signed_inf(1), f64::INFINITY);
        assert_eq!(signed_inf(0), f64::INFINITY);
        assert_eq!(signed_inf(-1), f64::NEG_INFINITY);
    }

    #[test]
    fn real_inverse() {
        assert_eq!(Ring::inv(&4.0_f64), Ok(0.25));
    }

    #[test]
    fn tiny_reals_are_zero_divisors() {
        assert!(1e-12_f64.is_zero_divisor());
        assert_eq!(Ring::inv(&0.0_f64), Err(DivisionError::ZeroDivisor));
    }

    #[test]
    fn real_quadrance_is_square() {
        assert_eq!((-3.0_f64).quad(), 9.0);
    }
}
