//! Dual perplex numbers.
//!
//! A dual perplex number is `a + bε` with `a, b` split-complex, written
//! over the basis `{1, s, ε, εs}` where `s² = +1`:
//!
//! ```text
//!  *  |  s    ε    εs
//! ----+---------------
//!  s  |  1    εs   ε
//!  ε  |  εs   0    0
//!  εs |  ε    0    0
//! ```
//!
//! Multiplication is commutative and associative. The conjugate acts on
//! each half, `conj(a + bε) = conj(a) + conj(b)ε`, negating `s` and
//! `εs`, so `z · conj(z)` has no `s` component in either half.
//!
//! The base ring has the indefinite quadrance `a² - b²`, so
//! [`quad`](algebra_core::Ring::quad) may be negative here. Only the
//! pure dual elements are zero divisors. An element whose real part is
//! a split-complex null element (such as `1 + s`) is not one, but it
//! still cannot be inverted or divided by.

use crate::dual::{Componentwise, Dual};
use algebra_core::{Basis, Ring, SplitComplex};

/// A dual perplex number `re + du·ε` with split-complex parts.
pub type Perplex = Dual<SplitComplex, Componentwise>;

impl Basis for Perplex {
    const SYMBOLS: &'static [&'static str] = &["", "s", "ε", "εs"];
}

impl Dual<SplitComplex, Componentwise> {
    /// Create `a + bs + cε + dεs`.
    ///
    /// ```
    /// use dual_algebra::Perplex;
    ///
    /// let s = Perplex::new(0.0, 1.0, 0.0, 0.0);
    /// assert_eq!((s * s).to_string(), "(1+0s+0ε+0εs)");
    /// ```
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Dual::from_parts(SplitComplex::new(a, b), SplitComplex::new(c, d))
    }

    /// A dual perplex infinity; `signs[n] >= 0` selects `+∞`.
    pub fn inf(signs: [i32; 4]) -> Self {
        <Perplex as Ring>::infinity(&signs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_core::{DivisionError, One, Zero};

    #[test]
    fn multiplication_table() {
        let one = Perplex::one();
        let s = Perplex::new(0.0, 1.0, 0.0, 0.0);
        let e = Perplex::new(0.0, 0.0, 1.0, 0.0);
        let es = Perplex::new(0.0, 0.0, 0.0, 1.0);
        assert!((s * s).approx_eq(&one));
        assert!((e * e).approx_eq(&Perplex::zero()));
        assert!((s * e).approx_eq(&es));
        assert!((e * s).approx_eq(&es));
        assert!((s * es).approx_eq(&e));
        assert!((es * es).approx_eq(&Perplex::zero()));
    }

    #[test]
    fn commutative_and_associative() {
        let x = Perplex::new(1.0, 2.0, -1.0, 0.5);
        let y = Perplex::new(-3.0, 0.5, 2.0, 1.0);
        let z = Perplex::new(0.5, -1.0, 4.0, 2.0);
        assert!(x.commutator(&y).approx_eq(&Perplex::zero()));
        assert!(x.associator(&y, &z).approx_eq(&Perplex::zero()));
    }

    #[test]
    fn quadrance_is_indefinite() {
        assert_eq!(Perplex::new(3.0, 1.0, 5.0, 5.0).quad(), 8.0);
        assert_eq!(Perplex::new(1.0, 3.0, 0.0, 0.0).quad(), -8.0);
    }

    #[test]
    fn conj_negates_s_and_epsilon_s() {
        let z = Perplex::new(1.0, 2.0, 3.0, 4.0);
        assert!(z.conj().approx_eq(&Perplex::new(1.0, -2.0, 3.0, -4.0)));
        assert!(z.dual_conj().approx_eq(&Perplex::new(1.0, 2.0, -3.0, -4.0)));
        // (a² - b²) + 2(ac - bd)ε
        assert_eq!(z * z.conj(), Perplex::new(-3.0, 0.0, -10.0, 0.0));
    }

    #[test]
    fn null_real_part_is_not_a_zero_divisor() {
        let z = Perplex::new(1.0, 1.0, 0.0, 0.0);
        assert!(!z.is_zero_divisor());
        assert_eq!(z * z, Perplex::new(2.0, 2.0, 0.0, 0.0));
    }

    #[test]
    fn null_real_part_cannot_be_inverted() {
        let z = Perplex::new(1.0, 1.0, 0.0, 0.0);
        let w = Perplex::new(1.0, -1.0, 3.0, 0.0);
        assert!((z * w).du.approx_eq(&z.re.dil(3.0)));
        assert_eq!(z.inv(), Err(DivisionError::ZeroDivisor));
        assert_eq!(
            Perplex::one().quo(&z),
            Err(DivisionError::ZeroDivisorDenominator)
        );
        assert_eq!(
            Perplex::one().quo(&w),
            Err(DivisionError::ZeroDivisorDenominator)
        );
    }

    #[test]
    fn pure_dual_elements_are_zero_divisors() {
        let e = Perplex::new(0.0, 0.0, 1.0, 0.0);
        assert!(e.is_zero_divisor());
        assert_eq!(e.inv(), Err(DivisionError::ZeroDivisor));
    }

    #[test]
    fn inverse_and_quotient() {
        let y = Perplex::new(2.0, 1.0, -1.0, 3.0);
        let w = y.inv().unwrap();
        assert!((w * y).approx_eq(&Perplex::one()));

        let x = Perplex::new(1.0, 0.0, 5.0, -2.0);
        assert!((x * y).quo(&y).unwrap().approx_eq(&x));
    }
}
