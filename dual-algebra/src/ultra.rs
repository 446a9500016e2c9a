//! Ultra dual numbers.
//!
//! An ultra dual number is a dual number over the super dual numbers,
//! composed by the [`Twisted`] rule, written over the basis
//! `{1, υ₁, …, υ₇}`. Every generator is nilpotent and the only nonzero
//! products are:
//!
//! ```text
//! υ₁ * υ₂ = -υ₂ * υ₁ = υ₃
//! υ₁ * υ₄ = -υ₄ * υ₁ = υ₅
//! υ₂ * υ₄ = -υ₄ * υ₂ = υ₆
//! υ₁ * υ₆ = -υ₆ * υ₁ = -υ₇
//! υ₂ * υ₅ = -υ₅ * υ₂ = υ₇
//! υ₃ * υ₄ = -υ₄ * υ₃ = υ₇
//! ```
//!
//! Multiplication is noncommutative and nonassociative: for example
//! `(υ₁υ₂)υ₄ - υ₁(υ₂υ₄) = 2υ₇`. Right division still works because the
//! super dual coefficients form an associative ring.

use crate::dual::{Dual, Twisted};
use crate::superdual::Super;
use algebra_core::{Basis, Ring};

/// An ultra dual number `re + du·υ₄` with super dual parts.
pub type Ultra = Dual<Super, Twisted>;

impl Basis for Ultra {
    const SYMBOLS: &'static [&'static str] =
        &["", "υ₁", "υ₂", "υ₃", "υ₄", "υ₅", "υ₆", "υ₇"];
}

impl Dual<Super, Twisted> {
    /// Create `a + bυ₁ + cυ₂ + dυ₃ + eυ₄ + fυ₅ + gυ₆ + hυ₇`.
    ///
    /// ```
    /// use dual_algebra::Ultra;
    ///
    /// let z = Ultra::new(1.0, 0.0, -2.0, 0.0, 0.5, 0.0, 0.0, 3.0);
    /// assert_eq!(z.to_string(), "(1+0υ₁-2υ₂+0υ₃+0.5υ₄+0υ₅+0υ₆+3υ₇)");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64) -> Self {
        Dual::from_parts(Super::new(a, b, c, d), Super::new(e, f, g, h))
    }

    /// An ultra dual infinity; `signs[n] >= 0` selects `+∞`.
    pub fn inf(signs: [i32; 8]) -> Self {
        <Ultra as Ring>::infinity(&signs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_core::{DivisionError, One, Zero};

    fn u(n: usize) -> Ultra {
        let mut c = [0.0; 8];
        c[n] = 1.0;
        Ultra::new(c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7])
    }

    #[test]
    fn generators_are_nilpotent() {
        for n in 1..8 {
            assert!((u(n) * u(n)).approx_eq(&Ultra::zero()), "υ{n}² ≠ 0");
        }
    }

    #[test]
    fn multiplication_table() {
        let products = [
            (1, 2, u(3)),
            (1, 4, u(5)),
            (2, 4, u(6)),
            (1, 6, -u(7)),
            (2, 5, u(7)),
            (3, 4, u(7)),
        ];
        for (a, b, expected) in products {
            assert!((u(a) * u(b)).approx_eq(&expected), "υ{a}υ{b}");
            assert!((u(b) * u(a)).approx_eq(&-expected), "υ{b}υ{a}");
        }
        assert!((u(3) * u(5)).approx_eq(&Ultra::zero()));
        assert!((u(7) * u(1)).approx_eq(&Ultra::zero()));
    }

    #[test]
    fn multiplication_is_nonassociative() {
        let a = u(1).associator(&u(2), &u(4));
        assert!(a.approx_eq(&u(7).dil(2.0)));
    }

    #[test]
    fn conj_and_quadrance() {
        let z = Ultra::new(2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
        let c = Ultra::new(2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0);
        assert!(z.conj().approx_eq(&c));
        assert!(z.conj().conj().approx_eq(&z));
        assert_eq!(z.quad(), 4.0);
    }

    #[test]
    fn quotient_undoes_right_multiplication() {
        let x = Ultra::new(1.0, -2.0, 0.5, 3.0, 0.0, 1.0, -1.0, 2.0);
        let y = Ultra::new(-1.5, 2.0, 1.0, -0.5, 3.0, 0.0, 1.0, 1.0);
        assert!((x * y).quo(&y).unwrap().approx_eq(&x));
    }

    #[test]
    fn inverse_is_a_left_inverse() {
        let y = Ultra::new(2.0, 1.0, -1.0, 3.0, 0.5, 0.0, 2.0, -1.0);
        let w = y.inv().unwrap();
        assert!((w * y).approx_eq(&Ultra::one()));
    }

    #[test]
    fn zero_divisors() {
        assert!(u(4).is_zero_divisor());
        assert_eq!(u(4).inv(), Err(DivisionError::ZeroDivisor));
        assert!(!Ultra::one().is_zero_divisor());
    }
}
