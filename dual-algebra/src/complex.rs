//! Dual complex numbers.
//!
//! A dual complex number is `a + bε` with `a, b ∈ ℂ`, equivalently the
//! 4-tuple `(c0, c1, c2, c3)` over the basis `{1, i, ε, εi}`:
//!
//! ```text
//!  *  |  i    ε    εi
//! ----+---------------
//!  i  | -1    εi  -ε
//!  ε  |  εi   0    0
//!  εi | -ε    0    0
//! ```
//!
//! Multiplication is commutative and associative. The conjugate
//! conjugates each half, `conj(a + bε) = conj(a) + conj(b)ε`, negating
//! `i` and `εi`. Then `z · conj(z) = |a|² + 2Re(a·conj b)ε` has no
//! imaginary component in either half.

use crate::dual::{Componentwise, Dual};
use algebra_core::{Basis, Ring};
use num_complex::Complex64;

/// A dual complex number `re + du·ε` with complex parts.
pub type Complex = Dual<Complex64, Componentwise>;

impl Basis for Complex {
    const SYMBOLS: &'static [&'static str] = &["", "i", "ε", "εi"];
}

impl Dual<Complex64, Componentwise> {
    /// Create `a + bi + cε + dεi`.
    ///
    /// ```
    /// use dual_algebra::Complex;
    ///
    /// let z = Complex::new(1.0, 2.0, 3.0, -4.0);
    /// assert_eq!(z.to_string(), "(1+2i+3ε-4εi)");
    /// ```
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Dual::from_parts(Complex64::new(a, b), Complex64::new(c, d))
    }

    /// A dual complex infinity; `signs[n] >= 0` selects `+∞`.
    pub fn inf(signs: [i32; 4]) -> Self {
        <Complex as Ring>::infinity(&signs)
    }
}
