//! # Hull Validation
//!
//! Checks a facet list against the point set it came from:
//!
//! - **Support**: no input point lies strictly below any facet's plane
//! - **Coverage**: every input point is a facet corner or lies over some
//!   facet's xy-projection, on or above it
//!
//! Above/below decisions use the exact `orient3d` predicate; only the
//! "lies over a facet" test carries a tolerance.


use crate::error::{HullError, HullResult};
use crate::hull::{Facet, LowerHull};
use config::constants::BARYCENTRIC_TOLERANCE;
use glam::DVec3;
use robust::{orient2d, orient3d, Coord, Coord3D};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Validates `hull` against `points`.
///
/// ## Example
///
/// ```rust
/// use lower_hull::{compute_hull, validate::validate_lower_hull};
///
/// let points = [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [1.0, 1.0, -3.0]];
/// let hull = compute_hull(&points).unwrap();
/// assert!(validate_lower_hull(&points, &hull).is_ok());
/// ```
pub fn validate_lower_hull<P>(points: &[P], hull: &LowerHull) -> HullResult<()>
where
    P: Copy + Into<DVec3>,
{
    let points: Vec<DVec3> = points.iter().map(|&p| p.into()).collect();
    check_indices(&points, hull.facets())?;
    check_supporting(&points, hull.facets())?;
    check_coverage(&points, hull.facets(), BARYCENTRIC_TOLERANCE)
}

impl LowerHull {
    /// Validates this hull against the points it was computed from.
    pub fn validate<P>(&self, points: &[P]) -> HullResult<()>
    where
        P: Copy + Into<DVec3>,
    {
        validate_lower_hull(points, self)
    }
}

/// Fails if any facet references an index outside `points`.
pub fn check_indices(points: &[DVec3], facets: &[Facet]) -> HullResult<()> {
    for facet in facets {
        if let Some(&index) = facet.indices().iter().find(|&&i| i >= points.len()) {
            return Err(HullError::InvalidFacetIndex {
                facet: *facet,
                index,
            });
        }
    }
    Ok(())
}

/// Fails if any point lies strictly below the plane of any facet.
///
/// Facets whose projection is degenerate (vertical planes) are skipped.
/// Indices must already be in range, see [`check_indices`].
pub fn check_supporting(points: &[DVec3], facets: &[Facet]) -> HullResult<()> {
    for facet in facets {
        let [a, b, c] = facet.indices().map(|i| points[i]);
        for (point, &p) in points.iter().enumerate() {
            if facet.contains(point) || !is_below(a, b, c, p) {
                continue;
            }
            let depth = plane_height(a, b, c, p.x, p.y).map_or(f64::NAN, |z| z - p.z);
            return Err(HullError::PointBelowFacet {
                point,
                facet: *facet,
                depth,
            });
        }
    }
    Ok(())
}

/// Fails if some point is neither a corner nor over a facet.
///
/// With no facets at all, the check passes only when the xy-projection
/// of `points` has no area (fewer than three points, or all collinear).
pub fn check_coverage(points: &[DVec3], facets: &[Facet], tolerance: f64) -> HullResult<()> {
    if facets.is_empty() {
        return match first_off_line(points) {
            None => Ok(()),
            Some(point) => Err(HullError::UncoveredPoint { point }),
        };
    }

    let mut is_corner = vec![false; points.len()];
    for facet in facets {
        for i in facet.indices() {
            is_corner[i] = true;
        }
    }

    for (point, &p) in points.iter().enumerate() {
        if is_corner[point] {
            continue;
        }
        let covered = facets.iter().any(|facet| {
            let [a, b, c] = facet.indices().map(|i| points[i]);
            lies_over(a, b, c, p, tolerance) && !is_below(a, b, c, p)
        });
        if !covered {
            return Err(HullError::UncoveredPoint { point });
        }
    }
    Ok(())
}

// =============================================================================
// GEOMETRY HELPERS
// =============================================================================

/// Height at `(x, y)` of the plane through `a`, `b`, `c`.
///
/// `None` when the plane is vertical.
pub fn plane_height(a: DVec3, b: DVec3, c: DVec3, x: f64, y: f64) -> Option<f64> {
    let normal = (b - a).cross(c - a);
    if normal.z == 0.0 {
        return None;
    }
    Some(a.z - (normal.x * (x - a.x) + normal.y * (y - a.y)) / normal.z)
}

/// Exact test for `p` strictly below the non-vertical plane `abc`.
fn is_below(a: DVec3, b: DVec3, c: DVec3, p: DVec3) -> bool {
    let xy = |p: DVec3| Coord { x: p.x, y: p.y };
    let xyz = |p: DVec3| Coord3D {
        x: p.x,
        y: p.y,
        z: p.z,
    };
    let turn = orient2d(xy(a), xy(b), xy(c));
    if turn == 0.0 {
        return false;
    }
    // orient3d is positive below the plane as seen from the side where
    // a, b, c run counterclockwise
    let side = orient3d(xyz(a), xyz(b), xyz(c), xyz(p));
    side != 0.0 && (side > 0.0) == (turn > 0.0)
}

/// Whether `p` projects into triangle `abc` on the xy-plane.
fn lies_over(a: DVec3, b: DVec3, c: DVec3, p: DVec3, tolerance: f64) -> bool {
    let xy = |p: DVec3| Coord { x: p.x, y: p.y };
    let area = orient2d(xy(a), xy(b), xy(c));
    if area == 0.0 {
        return false;
    }
    let wa = orient2d(xy(p), xy(b), xy(c)) / area;
    let wb = orient2d(xy(a), xy(p), xy(c)) / area;
    let wc = 1.0 - wa - wb;
    wa >= -tolerance && wb >= -tolerance && wc >= -tolerance
}

/// First point off the line through the first two distinct xy positions.
fn first_off_line(points: &[DVec3]) -> Option<usize> {
    let xy = |p: DVec3| Coord { x: p.x, y: p.y };
    let origin = *points.first()?;
    let anchor = points
        .iter()
        .find(|p| p.x != origin.x || p.y != origin.y)
        .copied()?;
    points
        .iter()
        .position(|&p| orient2d(xy(origin), xy(anchor), xy(p)) != 0.0)
}
