//! Dual numbers over an arbitrary coefficient ring.
//!
//! A dual number over a ring `R` is a pair `(re, du)` representing
//! `re + du·ε` where `ε² = 0`. Addition and subtraction are
//! componentwise. Multiplication depends on how `ε` interacts with the
//! generators of `R`, which is fixed by a [`Composition`] rule:
//!
//! - [`Commutative`]: `ε` commutes with `R`,
//!   `(p0 + p1ε)(q0 + q1ε) = p0q0 + (p0q1 + p1q0)ε`
//! - [`Componentwise`]: the same product as [`Commutative`], with a
//!   conjugate that acts on each half separately
//! - [`Twisted`]: moving `ε` past an element conjugates it,
//!   `(p0 + p1ε)(q0 + q1ε) = p0q0 + (q1p0 + p1·conj(q0))ε`
//!
//! Because `Dual<R, K>` is itself a [`Ring`], the construction nests:
//! a dual number over a dual number is a perfectly good value, which is
//! how the hyper, super and ultra algebras are built.
//!
//! # Conjugations
//!
//! Two involutions are kept apart:
//!
//! - [`dual_conj`](Dual::dual_conj) negates the dual part only:
//!   `(a, b) ↦ (a, -b)`
//! - [`Ring::conj`] is the full conjugate, chosen by the rule so that
//!   `z · conj(z)` has a real core equal to the quadrance of `a`:
//!   `(conj a, -conj b)` for [`Commutative`], `(conj a, conj b)` for
//!   [`Componentwise`], `(conj a, -b)` for [`Twisted`]
//!
//! Over a commutative base whose conjugate fixes only the reals, the
//! componentwise conjugate leaves no imaginary unit of `R` in either
//! half of `z · conj(z)`: for dual complex numbers the product is
//! `|a|² + 2Re(a·conj b)ε`.
//!
//! # Division
//!
//! An element is a zero divisor exactly when its real part is a zero
//! divisor of `R`. Every other element has a unique right quotient,
//! computed by solving the triangular system the composition rule
//! induces (see [`Composition::quo`]). Division by a zero divisor is
//! reported as a [`DivisionError`], never as NaN.

use algebra_core::format::{write_ring, Basis};
use algebra_core::{DivisionError, One, Ring, Zero};
use std::fmt;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// How the nilpotent generator `ε` composes with the coefficient ring.
pub trait Composition: Copy + Debug + Default + PartialEq + 'static {
    /// The product `p * q`.
    fn mul<R: Ring>(p: &Dual<R, Self>, q: &Dual<R, Self>) -> Dual<R, Self>;

    /// The full conjugate used for the quadrance.
    fn conj<R: Ring>(z: &Dual<R, Self>) -> Dual<R, Self>;

    /// The right quotient: the `w` with `w * y == x`.
    ///
    /// # Errors
    ///
    /// Propagates [`DivisionError::ZeroDivisor`] from the coefficient
    /// ring when `y.re` (or its conjugate) has no inverse.
    fn quo<R: Ring>(
        x: &Dual<R, Self>,
        y: &Dual<R, Self>,
    ) -> Result<Dual<R, Self>, DivisionError>;
}

/// `ε` commutes with every coefficient.
///
/// Associative whenever `R` is, commutative whenever `R` is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Commutative;

/// `ε` commutes with every coefficient, and conjugation acts on the two
/// halves independently: `conj(a + bε) = conj(a) + conj(b)ε`.
///
/// Used for the dual complex and dual perplex numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Componentwise;

/// `ε` anticommutes with the imaginary generators of the coefficient
/// ring: `ε·a = conj(a)·ε`.
///
/// Over the dual reals this yields the super dual numbers
/// (noncommutative, associative); one level further it yields the
/// ultra dual numbers (nonassociative).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Twisted;

fn commuting_mul<R: Ring, K>(p: &Dual<R, K>, q: &Dual<R, K>) -> Dual<R, K> {
    Dual::from_parts(p.re * q.re, p.re * q.du + p.du * q.re)
}

fn commuting_quo<R: Ring, K>(
    x: &Dual<R, K>,
    y: &Dual<R, K>,
) -> Result<Dual<R, K>, DivisionError> {
    // w0·y0 = x0, w0·y1 + w1·y0 = x1
    let y0_inv = y.re.inv()?;
    let w0 = x.re * y0_inv;
    let w1 = (x.du - w0 * y.du) * y0_inv;
    Ok(Dual::from_parts(w0, w1))
}

impl Composition for Commutative {
    fn mul<R: Ring>(p: &Dual<R, Self>, q: &Dual<R, Self>) -> Dual<R, Self> {
        commuting_mul(p, q)
    }

    fn conj<R: Ring>(z: &Dual<R, Self>) -> Dual<R, Self> {
        Dual::from_parts(z.re.conj(), -z.du.conj())
    }

    fn quo<R: Ring>(
        x: &Dual<R, Self>,
        y: &Dual<R, Self>,
    ) -> Result<Dual<R, Self>, DivisionError> {
        commuting_quo(x, y)
    }
}

impl Composition for Componentwise {
    fn mul<R: Ring>(p: &Dual<R, Self>, q: &Dual<R, Self>) -> Dual<R, Self> {
        commuting_mul(p, q)
    }

    fn conj<R: Ring>(z: &Dual<R, Self>) -> Dual<R, Self> {
        Dual::from_parts(z.re.conj(), z.du.conj())
    }

    fn quo<R: Ring>(
        x: &Dual<R, Self>,
        y: &Dual<R, Self>,
    ) -> Result<Dual<R, Self>, DivisionError> {
        commuting_quo(x, y)
    }
}

impl Composition for Twisted {
    fn mul<R: Ring>(p: &Dual<R, Self>, q: &Dual<R, Self>) -> Dual<R, Self> {
        Dual::from_parts(p.re * q.re, q.du * p.re + p.du * q.re.conj())
    }

    fn conj<R: Ring>(z: &Dual<R, Self>) -> Dual<R, Self> {
        Dual::from_parts(z.re.conj(), -z.du)
    }

    fn quo<R: Ring>(
        x: &Dual<R, Self>,
        y: &Dual<R, Self>,
    ) -> Result<Dual<R, Self>, DivisionError> {
        // w0·y0 = x0, y1·w0 + w1·conj(y0) = x1
        let w0 = x.re * y.re.inv()?;
        let w1 = (x.du - y.du * w0) * y.re.conj().inv()?;
        Ok(Dual::from_parts(w0, w1))
    }
}

/// A dual number `re + du·ε` over the ring `R`, composed by rule `K`.
///
/// # Type Parameters
///
/// - `R`: the coefficient ring (`f64`, complex, quaternion, or another
///   `Dual`)
/// - `K`: the [`Composition`] rule, [`Commutative`] by default
///
/// # Example
///
/// ```
/// use dual_algebra::{Dual, Ring};
///
/// // A dual number over the reals
/// let x: Dual<f64> = Dual::from_parts(3.0, 1.0);
/// let y = x * x;
///
/// assert_eq!(y.re, 9.0);
/// assert_eq!(y.du, 6.0);
/// assert!((y.quo(&x).unwrap()).approx_eq(&x));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<R, K = Commutative> {
    /// The real (non-nilpotent) part
    pub re: R,
    /// The dual part, the coefficient of `ε`
    pub du: R,
    #[cfg_attr(feature = "serde", serde(skip))]
    rule: PhantomData<K>,
}

impl<R, K> Dual<R, K> {
    /// Create a dual number from its real and dual parts.
    pub fn from_parts(re: R, du: R) -> Self {
        Dual {
            re,
            du,
            rule: PhantomData,
        }
    }
}

impl<R: Ring, K: Composition> Dual<R, K> {
    /// Negate the dual part only: `(a, b) ↦ (a, -b)`.
    pub fn dual_conj(&self) -> Self {
        Dual::from_parts(self.re, -self.du)
    }

    /// Scale by a ring element on the right: `self * (a + 0ε)`.
    pub fn scal(&self, a: R) -> Self {
        *self * Dual::from_parts(a, R::zero())
    }

    /// Scale by a ring element on the left: `(a + 0ε) * self`.
    pub fn scal_left(&self, a: R) -> Self {
        Dual::from_parts(a, R::zero()) * *self
    }

    /// The dual quadrance `(self * dual_conj(self)).re`, an element of
    /// the coefficient ring.
    pub fn dual_quad(&self) -> R {
        (*self * self.dual_conj()).re
    }

    /// The structured quadrance: real cores of both halves of
    /// `self * (conj(re) + conj(du)ε)`, as a dual real number.
    ///
    /// The real half is [`quad`](Ring::quad); for dual complex numbers
    /// and dual quaternions the dual half is `2⟨re, du⟩`.
    pub fn ring_quad(&self) -> Dual<f64> {
        let p = *self * Dual::from_parts(self.re.conj(), self.du.conj());
        Dual::from_parts(p.re.real_core(), p.du.real_core())
    }

    /// The quotient `w` with `w * y == self`.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionError::ZeroDivisorDenominator`] if `y` is a
    /// zero divisor, or if its real part has no inverse in `R` (a split
    /// complex null element).
    pub fn quo(&self, y: &Self) -> Result<Self, DivisionError> {
        if y.is_zero_divisor() {
            reject(&y.re, "quo");
            return Err(DivisionError::ZeroDivisorDenominator);
        }
        K::quo(self, y).map_err(|_| {
            reject(&y.re, "quo");
            DivisionError::ZeroDivisorDenominator
        })
    }

    /// The commutator `self * y - y * self`.
    pub fn commutator(&self, y: &Self) -> Self {
        *self * *y - *y * *self
    }

    /// The associator `(self * x) * y - self * (x * y)`.
    pub fn associator(&self, x: &Self, y: &Self) -> Self {
        (*self * *x) * *y - *self * (*x * *y)
    }
}

fn reject<R: Debug>(re: &R, operation: &'static str) {
    tracing::debug!(real = ?re, operation, "division by zero divisor rejected");
}

impl<R: Ring, K: Composition> Add for Dual<R, K> {
    type Output = Dual<R, K>;

    fn add(self, rhs: Self) -> Self::Output {
        Dual::from_parts(self.re + rhs.re, self.du + rhs.du)
    }
}

impl<R: Ring, K: Composition> Sub for Dual<R, K> {
    type Output = Dual<R, K>;

    fn sub(self, rhs: Self) -> Self::Output {
        Dual::from_parts(self.re - rhs.re, self.du - rhs.du)
    }
}

impl<R: Ring, K: Composition> Mul for Dual<R, K> {
    type Output = Dual<R, K>;

    fn mul(self, rhs: Self) -> Self::Output {
        K::mul(&self, &rhs)
    }
}

/// Negation: `-(a + bε) = Dil(a + bε, -1)`
impl<R: Ring, K: Composition> Neg for Dual<R, K> {
    type Output = Dual<R, K>;

    fn neg(self) -> Self::Output {
        self.dil(-1.0)
    }
}

impl<R: Ring, K: Composition> AddAssign for Dual<R, K> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Ring, K: Composition> SubAssign for Dual<R, K> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: Ring, K: Composition> MulAssign for Dual<R, K> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<R: Ring, K: Composition> Zero for Dual<R, K> {
    fn zero() -> Self {
        Dual::from_parts(R::zero(), R::zero())
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.du.is_zero()
    }
}

impl<R: Ring, K: Composition> One for Dual<R, K> {
    fn one() -> Self {
        Dual::from_parts(R::one(), R::zero())
    }
}

impl<R: Ring, K: Composition> Ring for Dual<R, K> {
    const DIM: usize = 2 * R::DIM;

    fn conj(&self) -> Self {
        K::conj(self)
    }

    fn dil(&self, a: f64) -> Self {
        Dual::from_parts(self.re.dil(a), self.du.dil(a))
    }

    fn real_core(&self) -> f64 {
        self.re.real_core()
    }

    fn is_zero_divisor(&self) -> bool {
        self.re.is_zero_divisor()
    }

    fn inv(&self) -> Result<Self, DivisionError> {
        if self.is_zero_divisor() {
            reject(&self.re, "inv");
            return Err(DivisionError::ZeroDivisor);
        }
        K::quo(&Self::one(), self).inspect_err(|_| reject(&self.re, "inv"))
    }

    fn approx_eq_with(&self, other: &Self, tolerance: f64) -> bool {
        self.re.approx_eq_with(&other.re, tolerance)
            && self.du.approx_eq_with(&other.du, tolerance)
    }

    fn for_each_component(&self, f: &mut dyn FnMut(f64)) {
        self.re.for_each_component(f);
        self.du.for_each_component(f);
    }

    fn from_components(next: &mut dyn FnMut() -> f64) -> Self {
        let re = R::from_components(next);
        let du = R::from_components(next);
        Dual::from_parts(re, du)
    }
}

impl<R: Ring, K: Composition> fmt::Display for Dual<R, K>
where
    Self: Basis,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ring(f, self)
    }
}
