//! Dual real numbers.
//!
//! A dual real number has the form `a + b·ε` where `ε² = 0`.
//! Arithmetic follows these rules:
//!
//! - `(a + bε) + (c + dε) = (a+c) + (b+d)ε`
//! - `(a + bε) * (c + dε) = ac + (ad + bc)ε`
//! - `conj(a + bε) = a - bε`
//! - `(a + bε)⁻¹ = conj(a + bε) / a²`, defined iff `a ≠ 0`
//!
//! Elementary functions extend to the dual reals by first-order Taylor
//! linearisation: `f(a + bε) = f(a) + b·f′(a)·ε`. This is exactly
//! forward-mode automatic differentiation; the chain rule emerges from
//! composition.
//!
//! # Example
//!
//! ```
//! use dual_algebra::Real;
//!
//! // f(x) = sin(x)·eˣ at x = 0, with f'(0) = 1
//! let x = Real::variable(0.0);
//! let f = x.sin() * x.exp();
//!
//! assert_eq!(f.re, 0.0);
//! assert_eq!(f.du, 1.0);
//! ```

use crate::dual::{Commutative, Dual};
use algebra_core::{Basis, Ring};

/// A dual real number `re + du·ε`.
pub type Real = Dual<f64, Commutative>;

impl Basis for Real {
    const SYMBOLS: &'static [&'static str] = &["", "ε"];
}

impl Dual<f64, Commutative> {
    /// Create a dual real number `a + bε`.
    ///
    /// ```
    /// use dual_algebra::Real;
    ///
    /// assert_eq!(Real::new(2.0, -3.0).to_string(), "(2-3ε)");
    /// ```
    pub fn new(a: f64, b: f64) -> Self {
        Dual::from_parts(a, b)
    }

    /// A constant `a + 0ε` (derivative zero).
    pub fn constant(a: f64) -> Self {
        Real::new(a, 0.0)
    }

    /// A variable `a + 1ε` (derivative one).
    pub fn variable(a: f64) -> Self {
        Real::new(a, 1.0)
    }

    /// A dual real infinity; `signs[n] >= 0` selects `+∞`.
    pub fn inf(signs: [i32; 2]) -> Self {
        <Real as Ring>::infinity(&signs)
    }

    /// Dual sine: `sin(a + bε) = sin(a) + b·cos(a)ε`.
    pub fn sin(&self) -> Self {
        let (s, c) = self.re.sin_cos();
        Real::new(s, self.du * c)
    }

    /// Dual cosine: `cos(a + bε) = cos(a) - b·sin(a)ε`.
    pub fn cos(&self) -> Self {
        let (s, c) = self.re.sin_cos();
        Real::new(c, -self.du * s)
    }

    /// Dual exponential: `exp(a + bε) = eᵃ + b·eᵃε`.
    pub fn exp(&self) -> Self {
        let e = self.re.exp();
        Real::new(e, self.du * e)
    }

    /// Dual hyperbolic sine: `sinh(a + bε) = sinh(a) + b·cosh(a)ε`.
    pub fn sinh(&self) -> Self {
        Real::new(self.re.sinh(), self.du * self.re.cosh())
    }

    /// Dual hyperbolic cosine: `cosh(a + bε) = cosh(a) + b·sinh(a)ε`.
    pub fn cosh(&self) -> Self {
        Real::new(self.re.cosh(), self.du * self.re.sinh())
    }
}
