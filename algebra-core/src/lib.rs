#![deny(missing_docs)]
//! # algebra-core — Ring abstractions for dual-number algebras
//!
//! This crate provides the capability set that every coefficient ring
//! of a dual number must offer, together with the atomic rings the
//! `dual-algebra` crate builds on:
//!
//! - [`Ring`]: unital ring with an involution, a quadrance and a
//!   partial inverse
//! - [`Basis`]: fixed basis-symbol table used for rendering
//! - [`DivisionError`]: the only failure mode, division by a zero
//!   divisor
//!
//! ## Base rings
//!
//! - **`f64`**: the real numbers, conjugation is the identity
//! - **[`Complex64`]**: complex numbers, `i² = -1`
//! - **[`SplitComplex`]**: split-complex (perplex) numbers, `s² = +1`
//! - **[`Quaternion`]**: Hamilton quaternions, `i² = j² = k² = ijk = -1`
//!
//! ## Quick start
//!
//! ```rust
//! use algebra_core::{One, Quaternion, Ring};
//!
//! let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
//! let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
//!
//! // Hamilton's rule: ij = k
//! assert!((i * j).approx_eq(&Quaternion::new(0.0, 0.0, 0.0, 1.0)));
//!
//! // Every nonzero quaternion is invertible
//! let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
//! assert!((q * q.inv().unwrap()).approx_eq(&Quaternion::one()));
//! ```
//!
//! ## Tolerance
//!
//! Equality of ring elements is always tolerance-based (see
//! [`tolerance`]). The default tolerance is [`DEFAULT_TOLERANCE`];
//! [`Ring::approx_eq_with`] accepts any other.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

pub use num_complex::Complex64;
pub use num_traits::{One, Zero};

pub mod complex;
pub mod error;
pub mod format;
pub mod quaternion;
pub mod scalar;
pub mod split;
pub mod tolerance;

pub use error::DivisionError;
pub use format::Basis;
pub use quaternion::Quaternion;
pub use split::SplitComplex;
pub use tolerance::DEFAULT_TOLERANCE;

/// A **coefficient ring** for dual numbers: a unital ring of `f64`
/// tuples with an involution.
///
/// Laws (not enforced by type system):
///
/// - **Ring**: `+` is an abelian group with identity `zero()`, `*`
///   distributes over `+` and has identity `one()`
/// - **Involution**: `a.conj().conj() == a`
/// - **Dilation**: `a.dil(t) == a * (one() scaled by t)`
/// - **Inverse**: whenever `a.inv()` succeeds,
///   `a * a.inv()? == one() == a.inv()? * a`; a zero divisor never has
///   an inverse
///
/// The scalar components of an element are visited in canonical basis
/// order by [`for_each_component`](Ring::for_each_component) and
/// rebuilt in the same order by
/// [`from_components`](Ring::from_components). The classification
/// helpers ([`is_inf`](Ring::is_inf), [`is_nan`](Ring::is_nan)) and
/// the renderer in [`format`] are derived from that traversal.
///
/// # Example
///
/// ```rust
/// use algebra_core::{Ring, SplitComplex};
///
/// let z = SplitComplex::new(3.0, 1.0);
///
/// // Quadrance of a split-complex number is a² - b²
/// assert_eq!(z.quad(), 8.0);
///
/// // 1 + s is a null element: not zero, yet it has no inverse
/// let null = SplitComplex::new(1.0, 1.0);
/// assert!(!null.is_zero_divisor());
/// assert!(null.inv().is_err());
/// ```
pub trait Ring:
    Copy
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Number of `f64` components of an element.
    const DIM: usize;

    /// The ring involution (negates the imaginary generators).
    fn conj(&self) -> Self;

    /// Scale every component by the real number `a`.
    fn dil(&self, a: f64) -> Self;

    /// The innermost real coefficient (the coefficient of `1`).
    fn real_core(&self) -> f64;

    /// Whether this element is tolerance-zero in the sense that makes a
    /// dual number over this ring a zero divisor.
    ///
    /// For the base rings this is "every component negligible"; for a
    /// dual number it is "the real part is a zero divisor".
    fn is_zero_divisor(&self) -> bool;

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionError::ZeroDivisor`] when
    /// [`is_zero_divisor`](Ring::is_zero_divisor) holds, or when the
    /// element has no inverse for another reason (a split-complex null
    /// element).
    fn inv(&self) -> Result<Self, DivisionError>;

    /// Componentwise comparison with an explicit tolerance.
    fn approx_eq_with(&self, other: &Self, tolerance: f64) -> bool;

    /// Visit every scalar component in canonical basis order.
    fn for_each_component(&self, f: &mut dyn FnMut(f64));

    /// Build an element by drawing its components in canonical basis
    /// order.
    fn from_components(next: &mut dyn FnMut() -> f64) -> Self;

    /// The quadrance: real core of `self * self.conj()`.
    fn quad(&self) -> f64 {
        (*self * self.conj()).real_core()
    }

    /// Componentwise comparison with [`DEFAULT_TOLERANCE`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, DEFAULT_TOLERANCE)
    }

    /// All scalar components in canonical basis order.
    fn cartesian(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(Self::DIM);
        self.for_each_component(&mut |v| out.push(v));
        out
    }

    /// True iff any component is an infinity.
    fn is_inf(&self) -> bool {
        let mut found = false;
        self.for_each_component(&mut |v| found |= v.is_infinite());
        found
    }

    /// True iff no component is infinite and at least one is NaN.
    ///
    /// Infinity takes precedence: an element with one infinite and one
    /// NaN component is classified as infinite, not NaN.
    fn is_nan(&self) -> bool {
        if self.is_inf() {
            return false;
        }
        let mut found = false;
        self.for_each_component(&mut |v| found |= v.is_nan());
        found
    }

    /// An element with every component NaN.
    fn nan() -> Self {
        Self::from_components(&mut || f64::NAN)
    }

    /// An element with every component infinite.
    ///
    /// `signs[n] >= 0` selects `+∞` for component `n`, a negative value
    /// selects `-∞`. Missing signs default to `+∞`.
    fn infinity(signs: &[i32]) -> Self {
        let mut signs = signs.iter().copied();
        Self::from_components(&mut || scalar::signed_inf(signs.next().unwrap_or(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_respects_signs() {
        let q = Quaternion::infinity(&[1, -1, 1, -1]);
        let inf = f64::INFINITY;
        assert_eq!(q.cartesian(), vec![inf, -inf, inf, -inf]);
    }

    #[test]
    fn infinity_defaults_missing_signs_to_positive() {
        let z = SplitComplex::infinity(&[-1]);
        assert_eq!(z.re, f64::NEG_INFINITY);
        assert_eq!(z.s, f64::INFINITY);
    }

    #[test]
    fn inf_takes_precedence_over_nan() {
        let q = Quaternion::new(f64::INFINITY, f64::NAN, 0.0, 0.0);
        assert!(q.is_inf());
        assert!(!q.is_nan());
    }

    #[test]
    fn nan_fills_every_component() {
        let z = <Complex64 as Ring>::nan();
        assert!(z.re.is_nan() && z.im.is_nan());
        assert!(Ring::is_nan(&z));
        assert!(!z.is_inf());
    }

    #[test]
    fn cartesian_has_dim_components() {
        assert_eq!(0.5_f64.cartesian().len(), <f64 as Ring>::DIM);
        assert_eq!(Quaternion::one().cartesian().len(), Quaternion::DIM);
    }
}
