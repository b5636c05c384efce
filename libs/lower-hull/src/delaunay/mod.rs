//! # Delaunay Triangulation
//!
//! Planar Delaunay triangulation via the paraboloid lifting map: each
//! point `(x, y)` is lifted to `(x, y, x² + y²)`, and the lower-hull facets
//! of the lifted set are exactly the Delaunay triangles when no four
//! points are cocircular.

#[cfg(test)]
mod tests;

use crate::error::HullResult;
use crate::hull::{compute_hull_with_config, Facet};
use crate::options::HullConfig;
use glam::DVec3;

/// Lifts a planar point onto the paraboloid `z = x² + y²`.
pub fn lift(point: [f64; 2]) -> DVec3 {
    let [x, y] = point;
    DVec3::new(x, y, x * x + y * y)
}

/// Delaunay triangles of `points` as index triples.
///
/// Same preconditions as [`crate::compute_hull`].
///
/// ## Example
///
/// ```rust
/// use lower_hull::delaunay::delaunay_triangulation;
///
/// let points = [[0.0, 0.0], [2.0, 0.1], [1.0, 2.0], [1.1, 0.8]];
/// let triangles = delaunay_triangulation(&points).unwrap();
/// assert_eq!(triangles.len(), 3);
/// ```
pub fn delaunay_triangulation(points: &[[f64; 2]]) -> HullResult<Vec<Facet>> {
    delaunay_triangulation_with_config(points, &HullConfig::default())
}

/// [`delaunay_triangulation`] with explicit options.
pub fn delaunay_triangulation_with_config(
    points: &[[f64; 2]],
    config: &HullConfig,
) -> HullResult<Vec<Facet>> {
    let lifted: Vec<DVec3> = points.iter().map(|&p| lift(p)).collect();
    Ok(compute_hull_with_config(&lifted, config)?.into_facets())
}
