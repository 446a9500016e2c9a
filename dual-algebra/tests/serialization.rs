//! Serde Round-Trip Tests
//!
//! Only compiled with `--features serde`. A dual number serializes as
//! its `re` and `du` halves; the composition rule is carried by the
//! type, not the data.

#![cfg(feature = "serde")]

use dual_algebra::{Complex, Hamilton, Perplex, Real, Ultra};

#[test]
fn real_serializes_as_two_named_halves() {
    let z = Real::new(1.5, -2.0);
    let json = serde_json::to_string(&z).unwrap();
    assert_eq!(json, r#"{"re":1.5,"du":-2.0}"#);
    assert_eq!(serde_json::from_str::<Real>(&json).unwrap(), z);
}

#[test]
fn complex_round_trips() {
    let z = Complex::new(1.0, -2.5, 0.25, 4.0);
    let json = serde_json::to_string(&z).unwrap();
    assert_eq!(serde_json::from_str::<Complex>(&json).unwrap(), z);
}

#[test]
fn perplex_round_trips() {
    let z = Perplex::new(3.0, 1.0, -0.5, 2.0);
    let json = serde_json::to_string(&z).unwrap();
    assert!(json.contains(r#""s":1.0"#), "{json}");
    assert_eq!(serde_json::from_str::<Perplex>(&json).unwrap(), z);
}

#[test]
fn hamilton_round_trips() {
    let z = Hamilton::new(1.0, 2.0, 3.0, 4.0, -1.0, -2.0, -3.0, -4.0);
    let json = serde_json::to_string(&z).unwrap();
    assert_eq!(serde_json::from_str::<Hamilton>(&json).unwrap(), z);
}

#[test]
fn nested_ultra_round_trips() {
    let z = Ultra::new(1.0, 0.0, -2.0, 0.5, 0.5, 0.0, 0.125, 3.0);
    let json = serde_json::to_string(&z).unwrap();
    let back: Ultra = serde_json::from_str(&json).unwrap();
    assert_eq!(back, z);
    assert_eq!(back.to_string(), z.to_string());
}

#[test]
fn missing_half_is_rejected() {
    assert!(serde_json::from_str::<Real>(r#"{"re":1.0}"#).is_err());
}
