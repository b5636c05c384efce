//! # Predicate Tests

use super::*;
use approx::assert_relative_eq;

fn p(x: f64, y: f64, z: f64) -> Option<DVec3> {
    Some(DVec3::new(x, y, z))
}

// =============================================================================
// ORIENTATION
// =============================================================================

#[test]
fn test_orientation_counterclockwise_is_positive() {
    let turn = orientation(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
    assert_relative_eq!(turn, 1.0);
}

#[test]
fn test_orientation_clockwise_is_negative() {
    let turn = orientation(p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 0.0, 0.0));
    assert_relative_eq!(turn, -1.0);
}

#[test]
fn test_orientation_matches_cross_product() {
    let (a, b, c) = (p(0.5, -1.0, 3.0), p(2.0, 4.0, 0.0), p(-3.0, 1.5, 9.0));
    let (pa, pb, pc) = (a.unwrap(), b.unwrap(), c.unwrap());
    let expected = (pc.y - pa.y) * (pb.x - pa.x) - (pb.y - pa.y) * (pc.x - pa.x);
    assert_relative_eq!(orientation(a, b, c), expected, max_relative = 1e-12);
}

#[test]
fn test_orientation_ignores_height() {
    let flat = orientation(p(0.0, 0.0, 0.0), p(2.0, 1.0, 0.0), p(1.0, 3.0, 0.0));
    let lifted = orientation(p(0.0, 0.0, -7.0), p(2.0, 1.0, 4.0), p(1.0, 3.0, 100.0));
    assert_eq!(flat, lifted);
}

#[test]
fn test_orientation_collinear_is_exactly_zero() {
    let turn = orientation(p(0.5, 0.25, 0.0), p(1.5, 0.75, 0.0), p(3.5, 1.75, 0.0));
    assert_eq!(turn, 0.0);
}

#[test]
fn test_orientation_with_absent_is_convex() {
    let a = p(0.0, 0.0, 0.0);
    let b = p(1.0, 0.0, 0.0);
    assert_eq!(orientation(None, a, b), ABSENT_ORIENTATION);
    assert_eq!(orientation(a, None, b), ABSENT_ORIENTATION);
    assert_eq!(orientation(a, b, None), ABSENT_ORIENTATION);
    assert!(!(orientation(a, b, None) < 0.0));
}

// =============================================================================
// BRIDGE TIME
// =============================================================================

#[test]
fn test_bridge_time_value() {
    let time = bridge_time(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 2.0));
    assert_relative_eq!(time, 2.0);
}

#[test]
fn test_bridge_time_is_when_triple_becomes_collinear() {
    // At time t the point (x, y, z) sits at (x, z - t * y)
    let (a, b, c) = (p(0.0, 0.0, 1.0), p(2.0, 1.0, -1.0), p(4.0, 0.5, 2.0));
    let t = bridge_time(a, b, c);
    assert!(t.is_finite());

    let at = |q: Option<DVec3>| {
        let q = q.unwrap();
        Some(DVec3::new(q.x, q.z - t * q.y, 0.0))
    };
    let turn = orientation(at(a), at(b), at(c));
    assert!(turn.abs() < 1e-9, "triple should be collinear at t, got {turn}");
}

#[test]
fn test_bridge_time_absent_is_never() {
    let a = p(0.0, 0.0, 0.0);
    let b = p(1.0, 1.0, 1.0);
    assert_eq!(bridge_time(None, a, b), f64::INFINITY);
    assert_eq!(bridge_time(a, None, b), f64::INFINITY);
    assert_eq!(bridge_time(a, b, None), f64::INFINITY);
}

#[test]
fn test_bridge_time_collinear_is_never() {
    let time = bridge_time(p(0.0, 0.0, 0.0), p(1.0, 1.0, 5.0), p(2.0, 2.0, -3.0));
    assert_eq!(time, f64::INFINITY);
}

#[test]
fn test_bridge_time_undefined_is_never() {
    let time = bridge_time(p(0.0, 0.0, f64::NAN), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
    assert_eq!(time, f64::INFINITY);
}

// =============================================================================
// CANDIDATE SELECTION
// =============================================================================

#[test]
fn test_is_selectable_window() {
    assert!(is_selectable(0.0, -1.0, 1.0));
    assert!(!is_selectable(-1.0, -1.0, 1.0));
    assert!(!is_selectable(1.0, -1.0, 1.0));
    assert!(!is_selectable(f64::INFINITY, 0.0, f64::INFINITY));
    assert!(!is_selectable(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0));
}

#[test]
fn test_is_selectable_rejects_nan() {
    assert!(!is_selectable(f64::NAN, f64::NEG_INFINITY, f64::INFINITY));
}
