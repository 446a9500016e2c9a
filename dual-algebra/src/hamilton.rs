//! Dual quaternions.
//!
//! A dual quaternion is `a + bε` with `a, b` Hamilton quaternions,
//! written over the basis `{1, i, j, k, ε, εi, εj, εk}`. The nilpotent
//! `ε` commutes with `i`, `j` and `k`, so the table is the quaternion
//! table on each half:
//!
//! ```text
//!  *  |  i    j    k    ε    εi   εj   εk
//! ----+-----------------------------------
//!  i  | -1    k   -j    εi  -ε    εk  -εj
//!  j  | -k   -1    i    εj  -εk  -ε    εi
//!  k  |  j   -i   -1    εk   εj  -εi  -ε
//!  ε  |  εi   εj   εk   0    0    0    0
//!  εi | -ε    εk  -εj   0    0    0    0
//!  εj | -εk  -ε    εi   0    0    0    0
//!  εk |  εj  -εi  -ε    0    0    0    0
//! ```
//!
//! Multiplication is noncommutative but associative. The conjugate is
//! `conj(a + bε) = conj(a) - conj(b)ε`, which makes the quadrance the
//! squared norm of the real quaternion; [`ring_quad`](Dual::ring_quad)
//! gives the full dual real quadrance `|a|² + 2⟨a, b⟩ε`.

use crate::dual::{Commutative, Dual};
use algebra_core::{Basis, Ring};

/// A dual quaternion `re + du·ε` with quaternion parts.
pub type Hamilton = Dual<algebra_core::Quaternion, Commutative>;

/// Alternative name for [`Hamilton`].
pub type Quaternion = Hamilton;

impl Basis for Hamilton {
    const SYMBOLS: &'static [&'static str] = &["", "i", "j", "k", "ε", "εi", "εj", "εk"];
}

impl Dual<algebra_core::Quaternion, Commutative> {
    /// Create `a + bi + cj + dk + eε + fεi + gεj + hεk`.
    ///
    /// ```
    /// use dual_algebra::Hamilton;
    ///
    /// let i = Hamilton::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// let j = Hamilton::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// assert_eq!((i * j).to_string(), "(0+0i+0j+1k+0ε+0εi+0εj+0εk)");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64) -> Self {
        Dual::from_parts(
            algebra_core::Quaternion::new(a, b, c, d),
            algebra_core::Quaternion::new(e, f, g, h),
        )
    }

    /// A dual quaternion infinity; `signs[n] >= 0` selects `+∞`.
    pub fn inf(signs: [i32; 8]) -> Self {
        <Hamilton as Ring>::infinity(&signs)
    }
}
