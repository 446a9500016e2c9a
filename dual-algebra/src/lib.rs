#![deny(missing_docs)]
//! # dual-algebra — Dual numbers over real, complex and quaternion rings
//!
//! Every algebra in this crate is an instance of one generic pair type,
//! [`Dual<R, K>`], representing `re + du·ε` with `ε² = 0` over a
//! coefficient ring `R` and composed by the rule `K`:
//!
//! | type         | coefficients     | rule              | basis                              |
//! |--------------|------------------|-------------------|------------------------------------|
//! | [`Real`]     | `f64`            | [`Commutative`]   | `1, ε`                             |
//! | [`Complex`]  | complex          | [`Componentwise`] | `1, i, ε, εi`                      |
//! | [`Hyper`]    | [`Real`]         | [`Commutative`]   | `1, ε, η, εη`                      |
//! | [`Super`]    | [`Real`]         | [`Twisted`]       | `1, σ, τ, στ`                      |
//! | [`Perplex`]  | split-complex    | [`Componentwise`] | `1, s, ε, εs`                      |
//! | [`Hamilton`] | quaternion       | [`Commutative`]   | `1, i, j, k, ε, εi, εj, εk`        |
//! | [`Ultra`]    | [`Super`]        | [`Twisted`]       | `1, υ₁, …, υ₇`                     |
//!
//! All of them implement [`Ring`], so the full contract (conjugation,
//! quadrance, inversion, tolerance equality, classification) is
//! available through one trait.
//!
//! ## Quick start
//!
//! ```rust
//! use dual_algebra::{Hamilton, Real, Ring};
//!
//! // Forward-mode differentiation: d/dx (x² + 1) at x = 3
//! let x = Real::variable(3.0);
//! let y = x * x + Real::constant(1.0);
//! assert_eq!(y.to_string(), "(10+6ε)");
//!
//! // Dual quaternions: ε commutes with i
//! let i = Hamilton::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
//! let e = Hamilton::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
//! assert!((e * i).approx_eq(&(i * e)));
//!
//! // Division by a zero divisor is an error, not NaN
//! assert!(Real::new(1.0, 2.0).quo(&Real::new(0.0, 1.0)).is_err());
//! ```
//!
//! ## Errors
//!
//! [`Ring::inv`] and [`Dual::quo`] return [`DivisionError`] when the
//! divisor is a zero divisor, or when its real part has no inverse in
//! the base ring (a split-complex null element). A rejected division also emits a `DEBUG`
//! level `tracing` event carrying the offending real part.

pub mod complex;
pub mod dual;
pub mod hamilton;
pub mod hyper;
pub mod perplex;
pub mod real;
pub mod superdual;
pub mod ultra;

pub use algebra_core::{
    Basis, Complex64, DivisionError, One, Ring, SplitComplex, Zero, DEFAULT_TOLERANCE,
};
pub use complex::Complex;
pub use dual::{Commutative, Componentwise, Composition, Dual, Twisted};
pub use hamilton::{Hamilton, Quaternion};
pub use hyper::Hyper;
pub use perplex::Perplex;
pub use real::Real;
pub use superdual::Super;
pub use ultra::Ultra;
