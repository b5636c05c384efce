//! # Lower Hull Driver
//!
//! Entry points that turn a point set into lower-hull facets.
//!
//! ## Pipeline
//!
//! 1. Check preconditions (non-empty, finite, tie policy)
//! 2. Sort by first coordinate, keeping each point's input index
//! 3. Link the sorted nodes into one chain
//! 4. Run [`merge_hulls`] over the whole chain
//! 5. Apply the degeneracy policy if the merge left general position
//! 6. Replay the history: before each toggle, the event node and its two
//!    current neighbours form one facet
//!
//! ## Known Limitations
//!
//! The merge needs a strict order along x. Points sharing a first
//! coordinate are ordered by input position and reported through
//! [`TiePolicy`]; for such inputs the facet set may be incomplete.
//!
//! It also needs general position for distinct x: no three points
//! collinear in the xy-projection, no two sweep events at the same time.
//! Integer grids and points on a common plane break this. The merge
//! detects it and the driver reports it through [`DegeneracyPolicy`];
//! facets returned under [`DegeneracyPolicy::Warn`] may fail validation.


use crate::active_set::{ActiveList, Node};
use crate::error::{HullError, HullResult};
use crate::merge::{merge_hulls, EventHistory};
use crate::options::{DegeneracyPolicy, HullConfig, TiePolicy};
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// A lower-hull triangle as three indices into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facet(
    /// Input indices of the three corners.
    pub [usize; 3],
);

impl Facet {
    /// Creates a facet from three input indices.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    /// Indices in emission order.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Indices in ascending order, for order-independent comparison.
    pub fn sorted(&self) -> [usize; 3] {
        let mut indices = self.0;
        indices.sort_unstable();
        indices
    }

    /// True if `index` is one of the corners.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl From<[usize; 3]> for Facet {
    fn from(indices: [usize; 3]) -> Self {
        Self(indices)
    }
}

/// Facets of the lower hull of a point set.
///
/// ## Example
///
/// ```rust
/// use lower_hull::compute_hull;
///
/// let points = [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [1.0, 1.0, -3.0]];
/// let hull = compute_hull(&points).unwrap();
/// assert_eq!(hull.len(), 3);
/// assert!(hull.facets().iter().all(|f| f.contains(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowerHull {
    facets: Vec<Facet>,
    point_count: usize,
}

impl LowerHull {
    /// Facets in replay order.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Number of facets.
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// True if the hull has no facets.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Number of input points the hull was built from.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Sorted, deduplicated input indices used by some facet.
    pub fn vertex_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.facets.iter().flat_map(|f| f.indices()).collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Consumes the hull, returning its facets.
    pub fn into_facets(self) -> Vec<Facet> {
        self.facets
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Computes the lower convex hull of `points` with the default [`HullConfig`].
///
/// ## Errors
///
/// - [`HullError::EmptyInput`] for an empty slice
/// - [`HullError::NonFiniteCoordinate`] for NaN or infinite coordinates
pub fn compute_hull<P>(points: &[P]) -> HullResult<LowerHull>
where
    P: Copy + Into<DVec3>,
{
    compute_hull_with_config(points, &HullConfig::default())
}

/// Computes the lower convex hull of `points`.
///
/// ## Errors
///
/// As [`compute_hull`], plus:
///
/// - [`HullError::TiedFirstCoordinate`] when two points share a first
///   coordinate under [`TiePolicy::Reject`]
/// - [`HullError::DegenerateInput`] when the merge meets input outside
///   general position under [`DegeneracyPolicy::Reject`]
pub fn compute_hull_with_config<P>(points: &[P], config: &HullConfig) -> HullResult<LowerHull>
where
    P: Copy + Into<DVec3>,
{
    let mut nodes = sorted_nodes(points)?;
    check_ties(&nodes, config.tie_policy)?;

    let mut list = ActiveList::new(&mut nodes);
    list.link_chain();
    let history = merge_hulls(&mut list, config);
    check_degeneracy(&history, config.degeneracy_policy)?;
    let facets = replay(&mut list, &history);

    log::debug!(
        "lower hull of {} points: {} events, {} facets",
        points.len(),
        history.len(),
        facets.len()
    );

    Ok(LowerHull {
        facets,
        point_count: points.len(),
    })
}

// =============================================================================
// INPUT NORMALIZATION
// =============================================================================

/// Validates `points` and returns their nodes sorted by x.
///
/// The sort is stable, so tied x values keep input order.
fn sorted_nodes<P>(points: &[P]) -> HullResult<Vec<Node>>
where
    P: Copy + Into<DVec3>,
{
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }

    let mut nodes = Vec::with_capacity(points.len());
    for (index, &point) in points.iter().enumerate() {
        let position: DVec3 = point.into();
        if !position.is_finite() {
            return Err(HullError::NonFiniteCoordinate {
                index,
                point: position.to_array(),
            });
        }
        nodes.push(Node::new(position, index));
    }

    nodes.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
    Ok(nodes)
}

/// Applies the tie policy to x-sorted nodes.
fn check_ties(nodes: &[Node], policy: TiePolicy) -> HullResult<()> {
    let mut ties = nodes
        .windows(2)
        .filter(|pair| pair[0].position.x == pair[1].position.x);
    let Some(pair) = ties.next() else {
        return Ok(());
    };
    let (first, second) = (pair[0], pair[1]);

    match policy {
        TiePolicy::Reject => Err(HullError::TiedFirstCoordinate {
            first: first.index,
            second: second.index,
            x: first.position.x,
        }),
        TiePolicy::Warn => {
            log::warn!(
                "{} adjacent points share a first coordinate (points {} and {} at x = {}); \
                 the lower hull may be incomplete",
                ties.count() + 1,
                first.index,
                second.index,
                first.position.x
            );
            Ok(())
        }
    }
}

/// Applies the degeneracy policy to a finished merge.
fn check_degeneracy(history: &EventHistory, policy: DegeneracyPolicy) -> HullResult<()> {
    if !history.is_degenerate() {
        return Ok(());
    }
    match policy {
        DegeneracyPolicy::Reject => Err(HullError::DegenerateInput),
        DegeneracyPolicy::Warn => {
            log::warn!(
                "input is not in general position (collinear projected points or coplanar \
                 events); the lower hull may be incomplete or invalid"
            );
            Ok(())
        }
    }
}

// =============================================================================
// FACET EXTRACTION
// =============================================================================

/// Replays `history` from time `-∞`, emitting one facet per event.
fn replay(list: &mut ActiveList<'_>, history: &EventHistory) -> Vec<Facet> {
    let mut facets = Vec::with_capacity(history.len());
    for e in history.iter() {
        match (list.prev(e), list.next(e)) {
            (Some(prev), Some(next)) => {
                facets.push(Facet::new(list.index(prev), list.index(e), list.index(next)));
            }
            // Only reachable outside general position
            _ => log::debug!("event at point {} has an absent neighbour", list.index(e)),
        }
        list.toggle(e);
    }
    facets
}
