//! Split-complex (perplex) numbers.
//!
//! A split-complex number has the form `a + b·s` where `s² = +1`.
//! Arithmetic follows these rules:
//!
//! - `(a + bs) + (c + ds) = (a+c) + (b+d)s`
//! - `(a + bs) * (c + ds) = (ac + bd) + (ad + bc)s`
//! - `conj(a + bs) = a - bs`
//! - `quad(a + bs) = a² - b²`
//!
//! The quadrance is indefinite. Every element with `|a| = |b|` (for
//! example `1 + s`) is a *null* element: it has no inverse, and it
//! annihilates its conjugate, `(1 + s)(1 - s) = 0`.
//!
//! [`is_zero_divisor`](Ring::is_zero_divisor) stays the narrow test
//! shared by every coefficient ring (both components tolerance-zero),
//! so a dual perplex number is a zero divisor only when its real part
//! vanishes. Null elements are caught by [`SplitComplex::is_null`] and
//! rejected by [`inv`](Ring::inv).

use crate::format::{write_ring, Basis};
use crate::tolerance::{approx_eq, is_negligible};
use crate::{DivisionError, Ring, DEFAULT_TOLERANCE};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A split-complex number `re + s·s` with `s² = +1`.
///
/// # Example
///
/// ```rust
/// use algebra_core::{Ring, SplitComplex};
///
/// let s = SplitComplex::new(0.0, 1.0);
/// assert_eq!(s * s, SplitComplex::new(1.0, 0.0));
///
/// let z = SplitComplex::new(2.0, 1.0);
/// let w = z.inv().unwrap();
/// assert!((z * w).approx_eq(&SplitComplex::new(1.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitComplex {
    /// Coefficient of `1`
    pub re: f64,
    /// Coefficient of `s`
    pub s: f64,
}

impl SplitComplex {
    /// Create a split-complex number from its two components.
    pub fn new(re: f64, s: f64) -> Self {
        SplitComplex { re, s }
    }

    /// Whether `|re| = |s|` within [`DEFAULT_TOLERANCE`], so that the
    /// quadrance vanishes and no inverse exists.
    ///
    /// ```rust
    /// use algebra_core::{Ring, SplitComplex};
    ///
    /// let z = SplitComplex::new(1.0, -1.0);
    /// assert!(z.is_null());
    /// assert!(!z.is_zero_divisor());
    /// assert!(z.inv().is_err());
    /// ```
    pub fn is_null(&self) -> bool {
        approx_eq(self.re.abs(), self.s.abs(), DEFAULT_TOLERANCE)
    }
}

impl Add for SplitComplex {
    type Output = SplitComplex;

    fn add(self, rhs: Self) -> Self::Output {
        SplitComplex::new(self.re + rhs.re, self.s + rhs.s)
    }
}

impl Sub for SplitComplex {
    type Output = SplitComplex;

    fn sub(self, rhs: Self) -> Self::Output {
        SplitComplex::new(self.re - rhs.re, self.s - rhs.s)
    }
}

/// Multiplication: `(a + bs) * (c + ds) = (ac + bd) + (ad + bc)s`
impl Mul for SplitComplex {
    type Output = SplitComplex;

    fn mul(self, rhs: Self) -> Self::Output {
        SplitComplex::new(
            self.re * rhs.re + self.s * rhs.s,
            self.re * rhs.s + self.s * rhs.re,
        )
    }
}

impl Neg for SplitComplex {
    type Output = SplitComplex;

    fn neg(self) -> Self::Output {
        SplitComplex::new(-self.re, -self.s)
    }
}

impl Zero for SplitComplex {
    fn zero() -> Self {
        SplitComplex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.s == 0.0
    }
}

impl One for SplitComplex {
    fn one() -> Self {
        SplitComplex::new(1.0, 0.0)
    }
}

impl Ring for SplitComplex {
    const DIM: usize = 2;

    fn conj(&self) -> Self {
        SplitComplex::new(self.re, -self.s)
    }

    fn dil(&self, a: f64) -> Self {
        SplitComplex::new(self.re * a, self.s * a)
    }

    fn real_core(&self) -> f64 {
        self.re
    }

    fn is_zero_divisor(&self) -> bool {
        is_negligible(self.re) && is_negligible(self.s)
    }

    fn inv(&self) -> Result<Self, DivisionError> {
        if self.is_null() {
            return Err(DivisionError::ZeroDivisor);
        }
        Ok(self.conj().dil(self.quad().recip()))
    }

    fn approx_eq_with(&self, other: &Self, tolerance: f64) -> bool {
        approx_eq(self.re, other.re, tolerance) && approx_eq(self.s, other.s, tolerance)
    }

    fn for_each_component(&self, f: &mut dyn FnMut(f64)) {
        f(self.re);
        f(self.s);
    }

    fn from_components(next: &mut dyn FnMut() -> f64) -> Self {
        let re = next();
        let s = next();
        SplitComplex::new(re, s)
    }
}

impl Basis for SplitComplex {
    const SYMBOLS: &'static [&'static str] = &["", "s"];
}

impl fmt::Display for SplitComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ring(f, self)
    }
}
