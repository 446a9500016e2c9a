//! Sign-aware rendering of ring elements.
//!
//! An element with components `c0, c1, …` and basis symbols
//! `"", s1, …` renders as `(c0±c1s1±c2s2…)`, the same shape Go uses
//! for `complex128`:
//!
//! - numbers use `%g` formatting (shortest round-trip digits, exponent
//!   form when the decimal exponent is below `-4` or at least `6`)
//! - every component after the first carries an explicit sign
//! - infinities render as `+Inf` / `-Inf`, NaN as `NaN`
//!
//! # Example
//!
//! ```rust
//! use algebra_core::{Quaternion, SplitComplex};
//!
//! assert_eq!(SplitComplex::new(1.0, -2.5).to_string(), "(1-2.5s)");
//! assert_eq!(
//!     Quaternion::new(0.0, 1e6, -0.0, f64::INFINITY).to_string(),
//!     "(0+1e+06i-0j+Infk)"
//! );
//! ```

use crate::Ring;
use std::fmt;

/// A fixed table of basis symbols, one per scalar component.
///
/// The first symbol belongs to the real unit and is conventionally
/// empty.
pub trait Basis {
    /// Symbols in canonical basis order.
    const SYMBOLS: &'static [&'static str];
}

/// Format `x` the way Go's `%g` verb does.
///
/// ```rust
/// use algebra_core::format::fmt_g;
///
/// assert_eq!(fmt_g(4.0), "4");
/// assert_eq!(fmt_g(0.5), "0.5");
/// assert_eq!(fmt_g(123456.0), "123456");
/// assert_eq!(fmt_g(1234567.0), "1.234567e+06");
/// assert_eq!(fmt_g(0.00001), "1e-05");
/// assert_eq!(fmt_g(-0.0), "-0");
/// assert_eq!(fmt_g(f64::NEG_INFINITY), "-Inf");
/// ```
pub fn fmt_g(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x == 0.0 {
        return format!("{sign}0");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return format!("{sign}{sci}"),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if !(-4..6).contains(&exp) {
        let (lead, rest) = digits.split_at(1);
        let frac = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{lead}{frac}e{exp_sign}{:02}", exp.abs())
    } else if exp >= 0 {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{digits}{}", "0".repeat(int_len - digits.len()))
        } else {
            let (int_part, frac) = digits.split_at(int_len);
            format!("{int_part}.{frac}")
        }
    } else {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("0.{zeros}{digits}")
    };
    format!("{sign}{body}")
}

/// Render one non-leading component with its explicit sign.
fn signed(v: f64) -> String {
    if v.is_sign_negative() {
        fmt_g(v)
    } else if v == f64::INFINITY {
        "+Inf".to_owned()
    } else {
        format!("+{}", fmt_g(v))
    }
}

/// Write `(c0±c1s1±c2s2…)` for the given components and symbols.
pub fn write_components(
    f: &mut fmt::Formatter<'_>,
    components: &[f64],
    symbols: &[&str],
) -> fmt::Result {
    f.write_str("(")?;
    for (n, (v, symbol)) in components.iter().zip(symbols).enumerate() {
        if n == 0 {
            f.write_str(&fmt_g(*v))?;
        } else {
            f.write_str(&signed(*v))?;
        }
        f.write_str(symbol)?;
    }
    f.write_str(")")
}

/// Render any ring element that has a basis table.
pub fn write_ring<T: Ring + Basis>(f: &mut fmt::Formatter<'_>, z: &T) -> fmt::Result {
    write_components(f, &z.cartesian(), T::SYMBOLS)
}
