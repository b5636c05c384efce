//! # Geometric Predicates
//!
//! Scalar tests over ordered triples of possibly-absent points.
//!
//! The merge watches a moving planar point set: a point at `(x, y, z)`
//! sits at `(x, z - t * y)` for sweep parameter `t`. At `t = -∞` this is
//! the xy-projection; a triple changes turning direction exactly at
//! [`bridge_time`], which is how the 3D lower hull merge becomes a
//! kinetic 2D hull merge.

#[cfg(test)]
mod tests;

use config::constants::ABSENT_ORIENTATION;
use glam::DVec3;
use robust::{orient2d, Coord};

/// Signed doubled area of `(p, q, r)` projected onto the xy-plane.
///
/// Negative when the triple turns clockwise, positive when it turns
/// counterclockwise, exactly zero when collinear. Any absent argument
/// returns [`ABSENT_ORIENTATION`], which is positive, so list ends never
/// look like a convexity violation.
pub fn orientation(p: Option<DVec3>, q: Option<DVec3>, r: Option<DVec3>) -> f64 {
    let (Some(p), Some(q), Some(r)) = (p, q, r) else {
        return ABSENT_ORIENTATION;
    };
    orient2d(
        Coord { x: p.x, y: p.y },
        Coord { x: q.x, y: q.y },
        Coord { x: r.x, y: r.y },
    )
}

/// Sweep parameter at which `(p, q, r)` flips its turning direction.
///
/// Returns `+∞` ("never") when any argument is absent, when the
/// projection is exactly collinear, or when the quotient is undefined.
pub fn bridge_time(p: Option<DVec3>, q: Option<DVec3>, r: Option<DVec3>) -> f64 {
    let (Some(p), Some(q), Some(r)) = (p, q, r) else {
        return f64::INFINITY;
    };
    let turn = orientation(Some(p), Some(q), Some(r));
    if turn == 0.0 {
        return f64::INFINITY;
    }
    let time = ((r.z - p.z) * (q.x - p.x) - (q.z - p.z) * (r.x - p.x)) / turn;
    if time.is_nan() {
        f64::INFINITY
    } else {
        time
    }
}

/// Whether a candidate time can be the next event.
///
/// Only times strictly between `after` and `before` qualify; NaN never does.
#[inline]
pub fn is_selectable(time: f64, after: f64, before: f64) -> bool {
    !time.is_nan() && time > after && time < before
}
