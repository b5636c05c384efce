//! # Delaunay Tests

use super::*;
use crate::HullError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use robust::{incircle, orient2d, Coord};

/// Exact test for `d` strictly inside the circumcircle of `abc`.
fn in_circumcircle(a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> bool {
    let pt = |p: [f64; 2]| Coord { x: p[0], y: p[1] };
    let turn = orient2d(pt(a), pt(b), pt(c));
    let inside = incircle(pt(a), pt(b), pt(c), pt(d));
    inside != 0.0 && (inside > 0.0) == (turn > 0.0)
}

#[test]
fn test_lift_onto_paraboloid() {
    assert_eq!(lift([3.0, -4.0]), DVec3::new(3.0, -4.0, 25.0));
}

#[test]
fn test_triangle_is_its_own_triangulation() {
    let triangles = delaunay_triangulation(&[[0.0, 0.0], [1.0, 3.0], [2.0, 0.5]]).unwrap();
    assert_eq!(triangles.len(), 1);
    assert_eq!(triangles[0].sorted(), [0, 1, 2]);
}

#[test]
fn test_quadrilateral_picks_delaunay_diagonal() {
    // Diagonal 1-3 is short; diagonal 0-2 would leave 3 inside a circumcircle
    let points = [[0.0, 0.0], [1.5, -1.0], [3.0, 0.1], [1.4, 0.5]];
    let triangles = delaunay_triangulation(&points).unwrap();
    let mut sorted: Vec<[usize; 3]> = triangles.iter().map(Facet::sorted).collect();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![[0, 1, 3], [1, 2, 3]]);
}

#[test]
fn test_empty_circumcircles_on_random_points() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let points: Vec<[f64; 2]> = (0..80)
        .map(|_| [rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
        .collect();

    let triangles = delaunay_triangulation(&points).unwrap();
    assert!(!triangles.is_empty());
    for triangle in &triangles {
        let [a, b, c] = triangle.indices().map(|i| points[i]);
        for (i, &d) in points.iter().enumerate() {
            if triangle.contains(i) {
                continue;
            }
            assert!(
                !in_circumcircle(a, b, c, d),
                "point {i} inside circumcircle of {triangle:?}"
            );
        }
    }
}

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(delaunay_triangulation(&[]), Err(HullError::EmptyInput));
}
