//! Hamilton quaternions.
//!
//! A quaternion has the form `a + bi + cj + dk` with the multiplication
//! table
//!
//! ```text
//! i * i = j * j = k * k = -1
//! i * j = -j * i = k
//! j * k = -k * j = i
//! k * i = -i * k = j
//! ```
//!
//! Multiplication is noncommutative but associative, and every nonzero
//! quaternion is invertible: `q⁻¹ = conj(q) / quad(q)`.

use crate::format::{write_ring, Basis};
use crate::tolerance::{approx_eq, is_negligible};
use crate::{DivisionError, Ring};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A Hamilton quaternion `re + i·i + j·j + k·k`.
///
/// # Example
///
/// ```rust
/// use algebra_core::{Quaternion, Ring};
///
/// let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
/// let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
///
/// // Noncommutative: ij = k but ji = -k
/// assert_eq!(i * j, Quaternion::new(0.0, 0.0, 0.0, 1.0));
/// assert_eq!(j * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
///
/// assert_eq!(Quaternion::new(1.0, 2.0, 3.0, 4.0).quad(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Coefficient of `1`
    pub re: f64,
    /// Coefficient of `i`
    pub i: f64,
    /// Coefficient of `j`
    pub j: f64,
    /// Coefficient of `k`
    pub k: f64,
}

impl Quaternion {
    /// Create a quaternion from its four components.
    pub fn new(re: f64, i: f64, j: f64, k: f64) -> Self {
        Quaternion { re, i, j, k }
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.re + rhs.re,
            self.i + rhs.i,
            self.j + rhs.j,
            self.k + rhs.k,
        )
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.re - rhs.re,
            self.i - rhs.i,
            self.j - rhs.j,
            self.k - rhs.k,
        )
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Self) -> Self::Output {
        let (p, q) = (self, rhs);
        Quaternion::new(
            p.re * q.re - p.i * q.i - p.j * q.j - p.k * q.k,
            p.re * q.i + p.i * q.re + p.j * q.k - p.k * q.j,
            p.re * q.j - p.i * q.k + p.j * q.re + p.k * q.i,
            p.re * q.k + p.i * q.j - p.j * q.i + p.k * q.re,
        )
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Self::Output {
        Quaternion::new(-self.re, -self.i, -self.j, -self.k)
    }
}

impl Zero for Quaternion {
    fn zero() -> Self {
        Quaternion::new(0.0, 0.0, 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.i == 0.0 && self.j == 0.0 && self.k == 0.0
    }
}

impl One for Quaternion {
    fn one() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }
}

impl Ring for Quaternion {
    const DIM: usize = 4;

    fn conj(&self) -> Self {
        Quaternion::new(self.re, -self.i, -self.j, -self.k)
    }

    fn dil(&self, a: f64) -> Self {
        Quaternion::new(self.re * a, self.i * a, self.j * a, self.k * a)
    }

    fn real_core(&self) -> f64 {
        self.re
    }

    fn is_zero_divisor(&self) -> bool {
        is_negligible(self.re)
            && is_negligible(self.i)
            && is_negligible(self.j)
            && is_negligible(self.k)
    }

    fn inv(&self) -> Result<Self, DivisionError> {
        if self.is_zero_divisor() {
            return Err(DivisionError::ZeroDivisor);
        }
        Ok(self.conj().dil(self.quad().recip()))
    }

    fn approx_eq_with(&self, other: &Self, tolerance: f64) -> bool {
        approx_eq(self.re, other.re, tolerance)
            && approx_eq(self.i, other.i, tolerance)
            && approx_eq(self.j, other.j, tolerance)
            && approx_eq(self.k, other.k, tolerance)
    }

    fn for_each_component(&self, f: &mut dyn FnMut(f64)) {
        f(self.re);
        f(self.i);
        f(self.j);
        f(self.k);
    }

    fn from_components(next: &mut dyn FnMut() -> f64) -> Self {
        let re = next();
        let i = next();
        let j = next();
        let k = next();
        Quaternion::new(re, i, j, k)
    }
}

impl Basis for Quaternion {
    const SYMBOLS: &'static [&'static str] = &["", "i", "j", "k"];
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ring(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(n: usize) -> Quaternion {
        let mut c = [0.0; 4];
        c[n] = 1.0;
        Quaternion::new(c[0], c[1], c[2], c[3])
    }

    #[test]
    fn hamilton_multiplication_table() {
        let (one, i, j, k) = (unit(0), unit(1), unit(2), unit(3));
        assert_eq!(i * i, -one);
        assert_eq!(j * j, -one);
        assert_eq!(k * k, -one);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(k * j, -i);
        assert_eq!(i * k, -j);
        assert_eq!(i * j * k, -one);
    }

    #[test]
    fn multiplication_is_associative() {
        let p = Quaternion::new(1.0, -2.0, 0.5, 3.0);
        let q = Quaternion::new(-0.5, 1.0, 4.0, -1.0);
        let r = Quaternion::new(2.0, 0.0, -3.0, 1.5);
        assert!(((p * q) * r).approx_eq(&(p * (q * r))));
    }

    #[test]
    fn conjugate_gives_real_quadrance() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert!((q * q.conj()).approx_eq(&Quaternion::new(30.0, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn inverse_is_two_sided() {
        let q = Quaternion::new(1.0, 2.0, -3.0, 0.5);
        let w = q.inv().unwrap();
        assert!((q * w).approx_eq(&Quaternion::one()));
        assert!((w * q).approx_eq(&Quaternion::one()));
    }

    #[test]
    fn zero_is_the_only_zero_divisor() {
        assert!(Quaternion::zero().is_zero_divisor());
        assert!(!unit(2).is_zero_divisor());
        assert_eq!(Quaternion::zero().inv(), Err(DivisionError::ZeroDivisor));
    }

    #[test]
    fn display_lists_all_components() {
        let q = Quaternion::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(q.to_string(), "(1-2i+3j-4k)");
    }
}
