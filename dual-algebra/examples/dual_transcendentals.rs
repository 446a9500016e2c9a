//! Example demonstrating differentiation with dual transcendental
//! functions, hyper dual second derivatives, and dual quaternion
//! division.
//!
//! Run with: `cargo run --example dual_transcendentals`

use dual_algebra::{DivisionError, Hamilton, Hyper, Real, Ring};
use std::f64::consts::PI;

fn main() -> Result<(), DivisionError> {
    println!("=== Dual Numbers: Transcendental Functions ===\n");

    // f(x) = e^x at x=0
    println!("Example 1: f(x) = e^x at x=0");
    let f = Real::variable(0.0).exp();
    println!("  f = {f}");
    println!("  f'(0) = {} (expected: 1.0)", f.du);
    println!();

    // f(x) = sin(x) at x=π/2
    println!("Example 2: f(x) = sin(x) at x=π/2");
    let f = Real::variable(PI / 2.0).sin();
    println!("  f'(π/2) = {} (expected: ~0.0)", f.du);
    println!();

    // f(x) = cos(x) at x=π
    println!("Example 3: f(x) = cos(x) at x=π");
    let f = Real::variable(PI).cos();
    println!("  f(π) = {}", f.re);
    println!("  f'(π) = {} (expected: ~0.0)", f.du);
    println!();

    // σ(x) = 1 / (1 + e^(-x)) at x=0
    println!("Example 4: Sigmoid σ(x) = 1/(1 + e^(-x)) at x=0");
    let x = Real::variable(0.0);
    let sigmoid = (Real::constant(1.0) + (-x).exp()).inv()?;
    println!("  σ(0) = {}", sigmoid.re);
    println!("  σ'(0) = {} (expected: 0.25)", sigmoid.du);
    println!();

    // tanh(x) = sinh(x) / cosh(x) at x=0
    println!("Example 5: tanh(x) = sinh(x)/cosh(x) at x=0");
    let x = Real::variable(0.0);
    let tanh = x.sinh().quo(&x.cosh())?;
    println!("  tanh'(0) = {} (expected: 1.0)", tanh.du);
    println!();

    // f(x) = sin(x²) at x=√(π/2)
    println!("Example 6: f(x) = sin(x²) at x=√(π/2)");
    let x = Real::variable((PI / 2.0).sqrt());
    let f = (x * x).sin();
    println!("  f'(√(π/2)) = {}", f.du);
    println!("  (Chain rule: f'(x) = 2x·cos(x²))");
    println!();

    println!("=== Hyper Dual Numbers: Second Derivatives ===\n");

    // f(x) = x³ at x=2: εη carries f''(2) = 12
    println!("Example 7: f(x) = x³ at x=2");
    let x = Hyper::new(2.0, 1.0, 1.0, 0.0);
    let f = x * x * x;
    println!("  f = {f}");
    println!("  f''(2) = {} (expected: 12.0)", f.du.du);
    println!();

    println!("=== Dual Quaternions ===\n");

    let i = Hamilton::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let j = Hamilton::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    println!("Example 8: i·j = {}", i * j);

    let q = Hamilton::new(1.0, 2.0, 3.0, 4.0, 0.5, 0.0, -1.0, 2.0);
    let r = (q * i).quo(&i)?;
    println!("  (q·i)/i = {r}");
    println!("  recovers q: {}", r.approx_eq(&q));

    let e = Hamilton::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    match q.quo(&e) {
        Ok(_) => println!("  q/ε unexpectedly succeeded"),
        Err(err) => println!("  q/ε fails: {err}"),
    }
    println!();

    println!("=== Key Insights ===");
    println!("• Dual numbers compute derivatives alongside function values");
    println!("• Nesting dual numbers yields higher derivatives");
    println!("• Division by a zero divisor is an error value, never NaN");

    Ok(())
}
