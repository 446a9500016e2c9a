//! Hyper dual numbers.
//!
//! A hyper dual number is `a + bε + cη + dεη`, a dual number over the
//! dual reals: the inner nilpotent is `ε`, the outer one `η`. Both
//! square to zero, commute with each other, and their product `εη` is
//! the only nonvanishing mixed term:
//!
//! ```text
//!  *  |  ε    η    εη
//! ----+---------------
//!  ε  |  0    εη   0
//!  η  |  εη   0    0
//!  εη |  0    0    0
//! ```
//!
//! Multiplication is commutative and associative. Evaluating a
//! polynomial at `x + ε + η` yields `f(x)`, `f′(x)` twice and `f″(x)`
//! in the `εη` slot.

use crate::dual::{Commutative, Dual};
use crate::real::Real;
use algebra_core::{Basis, Ring};

/// A hyper dual number `re + du·η` with dual real parts.
pub type Hyper = Dual<Real, Commutative>;

impl Basis for Hyper {
    const SYMBOLS: &'static [&'static str] = &["", "ε", "η", "εη"];
}

impl Dual<Real, Commutative> {
    /// Create `a + bε + cη + dεη`.
    ///
    /// ```
    /// use dual_algebra::Hyper;
    ///
    /// let x = Hyper::new(2.0, 1.0, 1.0, 0.0);
    /// // x³ at 2: value 8, first derivative 12, second derivative 12
    /// assert_eq!((x * x * x).to_string(), "(8+12ε+12η+12εη)");
    /// ```
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Dual::from_parts(Real::new(a, b), Real::new(c, d))
    }

    /// A hyper dual infinity; `signs[n] >= 0` selects `+∞`.
    pub fn inf(signs: [i32; 4]) -> Self {
        <Hyper as Ring>::infinity(&signs)
    }
}
