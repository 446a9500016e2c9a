//! Super dual numbers.
//!
//! A super dual number is `a + bσ + cτ + dστ`, a dual number over the
//! dual reals composed by the [`Twisted`] rule. The two nilpotents
//! anticommute:
//!
//! ```text
//!  *  |  σ    τ    στ
//! ----+---------------
//!  σ  |  0    στ   0
//!  τ  | -στ   0    0
//!  στ |  0    0    0
//! ```
//!
//! Multiplication is noncommutative but associative.

use crate::dual::{Dual, Twisted};
use crate::real::Real;
use algebra_core::{Basis, Ring};

/// A super dual number `re + du·τ` with dual real parts.
pub type Super = Dual<Real, Twisted>;

impl Basis for Super {
    const SYMBOLS: &'static [&'static str] = &["", "σ", "τ", "στ"];
}

impl Dual<Real, Twisted> {
    /// Create `a + bσ + cτ + dστ`.
    ///
    /// ```
    /// use dual_algebra::Super;
    ///
    /// let s = Super::new(0.0, 1.0, 0.0, 0.0);
    /// let t = Super::new(0.0, 0.0, 1.0, 0.0);
    /// assert_eq!((s * t).to_string(), "(0+0σ+0τ+1στ)");
    /// assert_eq!((t * s).to_string(), "(0+0σ+0τ-1στ)");
    /// ```
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Dual::from_parts(Real::new(a, b), Real::new(c, d))
    }

    /// A super dual infinity; `signs[n] >= 0` selects `+∞`.
    pub fn inf(signs: [i32; 4]) -> Self {
        <Super as Ring>::infinity(&signs)
    }
}
