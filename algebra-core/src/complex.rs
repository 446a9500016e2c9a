//! The complex numbers as a coefficient ring.
//!
//! [`Complex64`] comes from `num-complex`; this module only supplies
//! its [`Ring`] capabilities.

use crate::tolerance::{approx_eq, is_negligible};
use crate::{DivisionError, Ring};
use num_complex::Complex64;

impl Ring for Complex64 {
    const DIM: usize = 2;

    fn conj(&self) -> Self {
        Complex64::conj(self)
    }

    fn dil(&self, a: f64) -> Self {
        self.scale(a)
    }

    fn real_core(&self) -> f64 {
        self.re
    }

    fn is_zero_divisor(&self) -> bool {
        is_negligible(self.re) && is_negligible(self.im)
    }

    fn inv(&self) -> Result<Self, DivisionError> {
        if Ring::is_zero_divisor(self) {
            return Err(DivisionError::ZeroDivisor);
        }
        Ok(Complex64::conj(self).unscale(self.norm_sqr()))
    }

    fn approx_eq_with(&self, other: &Self, tolerance: f64) -> bool {
        approx_eq(self.re, other.re, tolerance) && approx_eq(self.im, other.im, tolerance)
    }

    fn for_each_component(&self, f: &mut dyn FnMut(f64)) {
        f(self.re);
        f(self.im);
    }

    fn from_components(next: &mut dyn FnMut() -> f64) -> Self {
        let re = next();
        let im = next();
        Complex64::new(re, im)
    }
}
