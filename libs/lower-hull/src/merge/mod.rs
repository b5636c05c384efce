//! # Recursive Merge
//!
//! Divide-and-conquer core of the lower hull. Each call splits its view of
//! the active-set list at the median, recurses on both halves, and then
//! merges the two partial hulls by sweeping the kinetic time parameter
//! forward (see [`crate::predicates`]).
//!
//! ## Algorithm
//!
//! 1. Split `[head, head + n)` at `mid = head + n / 2` and recurse
//! 2. Walk the bridge `(u, v)` to the common tangent of the two chains
//! 3. Repeatedly take the earliest of six pending events:
//!    - the next recorded event of the left half
//!    - the next recorded event of the right half
//!    - the bridge rotating across `u.next`, `u.prev`, `v.prev` or `v.next`
//! 4. Join the final bridge, then undo the sweep in reverse so the list is
//!    back at time `-∞`
//!
//! The returned [`EventHistory`] lists, in time order, every node whose
//! toggle moves the merged chain from one state to the next. Its end plays
//! the role of the terminal "no more events" marker.
//!
//! ## General Position
//!
//! The sweep assumes no three points are collinear in the xy-projection
//! and no two pending events fire at exactly the same time (four coplanar
//! points). A merge that meets either case marks its history degenerate;
//! the facets replayed from such a history may violate the lower-hull
//! properties.
//!
//! ## References
//!
//! - T. M. Chan, "A minimalist's implementation of the 3-d divide-and-conquer
//!   convex hull algorithm", 2003


use crate::active_set::{ActiveList, NodeId};
use crate::options::HullConfig;
use crate::predicates::{bridge_time, is_selectable, orientation};
use config::constants::MERGE_LOG_MIN;

// =============================================================================
// EVENT HISTORY
// =============================================================================

/// Time-ordered nodes whose toggles replay a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventHistory {
    events: Vec<NodeId>,
    degenerate: bool,
}

impl EventHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, id: NodeId) {
        self.events.push(id);
    }

    /// Event at `cursor`, or `None` once the history is exhausted.
    pub fn get(&self, cursor: usize) -> Option<NodeId> {
        self.events.get(cursor).copied()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Recorded events in time order.
    pub fn events(&self) -> &[NodeId] {
        &self.events
    }

    /// Iterator over recorded events in time order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.events.iter().copied()
    }

    /// True if this merge, or a merge below it, met input outside
    /// general position.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Flags the history as built from input outside general position.
    pub fn mark_degenerate(&mut self) {
        self.degenerate = true;
    }
}

// =============================================================================
// CANDIDATES
// =============================================================================

/// Which pending change fired next during the sweep.
///
/// Discriminants follow the order of [`CANDIDATES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    /// Next recorded event of the left half.
    LeftHistory,
    /// Next recorded event of the right half.
    RightHistory,
    /// `(u, u.next, v)` turns: `u` moves right.
    LeftAdvance,
    /// `(u.prev, u, v)` turns: `u` moves left.
    LeftRetreat,
    /// `(u, v.prev, v)` turns: `v` moves left.
    RightRetreat,
    /// `(u, v, v.next)` turns: `v` moves right.
    RightAdvance,
}

/// Evaluation order; ties go to the earlier entry.
const CANDIDATES: [Candidate; 6] = [
    Candidate::LeftHistory,
    Candidate::RightHistory,
    Candidate::LeftAdvance,
    Candidate::LeftRetreat,
    Candidate::RightRetreat,
    Candidate::RightAdvance,
];

/// Earliest candidate strictly after `after`, if any is finite.
fn next_event(times: &[f64; 6], after: f64) -> Option<(Candidate, f64)> {
    let mut best = None;
    let mut before = f64::INFINITY;
    for (&candidate, &time) in CANDIDATES.iter().zip(times) {
        if is_selectable(time, after, before) {
            best = Some((candidate, time));
            before = time;
        }
    }
    best
}

// =============================================================================
// MERGE
// =============================================================================

/// Computes the event history of the lower hull of the nodes in `list`.
///
/// The view's first node is the head of the sub-list and its length is
/// the node count; nodes must be in increasing x order. On return every
/// node in the view is linked only to nodes of the view, and the chain
/// from the head is the lower convex chain of the xy-projection.
pub fn merge_hulls(list: &mut ActiveList<'_>, config: &HullConfig) -> EventHistory {
    let head = list.first();
    let n = list.len();
    if n == 1 {
        list.isolate(head);
        return EventHistory::new();
    }

    let mid = head + n / 2;
    let (left, right) = {
        let (mut lower, mut upper) = list.split_at(mid);
        if config.forks(n) {
            rayon::join(
                || merge_hulls(&mut lower, config),
                || merge_hulls(&mut upper, config),
            )
        } else {
            (
                merge_hulls(&mut lower, config),
                merge_hulls(&mut upper, config),
            )
        }
    };

    let (u, v, collinear) = find_bridge(list, mid - 1, mid);
    let (u, v, mut events) = sweep(list, u, v, &left, &right);
    list.join(u, v);
    revert(list, u, v, mid, &events);

    if collinear || left.is_degenerate() || right.is_degenerate() {
        events.mark_degenerate();
    }

    if n >= MERGE_LOG_MIN {
        log::trace!(
            "merged {} + {} nodes: {} + {} child events -> {} events (degenerate: {})",
            n / 2,
            n - n / 2,
            left.len(),
            right.len(),
            events.len(),
            events.is_degenerate()
        );
    }

    events
}

/// Walks `(u, v)` to the common tangent of the two chains at time `-∞`.
///
/// The flag reports whether any tested triple was exactly collinear.
fn find_bridge(list: &ActiveList<'_>, mut u: NodeId, mut v: NodeId) -> (NodeId, NodeId, bool) {
    let mut collinear = false;
    loop {
        if let Some(w) = list.next(v) {
            let turn = orientation(
                Some(list.position(u)),
                Some(list.position(v)),
                Some(list.position(w)),
            );
            collinear |= turn == 0.0;
            if turn < 0.0 {
                v = w;
                continue;
            }
        }
        if let Some(t) = list.prev(u) {
            let turn = orientation(
                Some(list.position(t)),
                Some(list.position(u)),
                Some(list.position(v)),
            );
            collinear |= turn == 0.0;
            if turn < 0.0 {
                u = t;
                continue;
            }
        }
        return (u, v, collinear);
    }
}

/// Three nodes whose turn decides when a candidate fires.
type Triple = [NodeId; 3];

/// Triple of the recorded event at `cursor`, if it has both neighbours.
fn history_triple(list: &ActiveList<'_>, history: &EventHistory, cursor: usize) -> Option<Triple> {
    let e = history.get(cursor)?;
    Some([list.prev(e)?, e, list.next(e)?])
}

/// Time at which `triple` flips, `+∞` when there is no triple.
fn triple_time(list: &ActiveList<'_>, triple: Option<Triple>) -> f64 {
    match triple {
        Some([p, q, r]) => bridge_time(
            Some(list.position(p)),
            Some(list.position(q)),
            Some(list.position(r)),
        ),
        None => f64::INFINITY,
    }
}

/// Whether the pending candidates show input outside general position.
///
/// Flags a collinear triple, and any candidate other than the inverse of
/// the event just `fired` that is due exactly at `now`; the strict
/// `time > now` selection would skip it.
fn meets_degeneracy(
    list: &ActiveList<'_>,
    triples: &[Option<Triple>; 6],
    times: &[f64; 6],
    now: f64,
    fired: Option<Triple>,
) -> bool {
    triples.iter().zip(times).any(|(&triple, &time)| {
        let Some(nodes) = triple else {
            return false;
        };
        let [p, q, r] = nodes.map(|id| Some(list.position(id)));
        (time == f64::INFINITY && orientation(p, q, r) == 0.0)
            || (time == now && !same_nodes(nodes, fired))
    })
}

/// Whether two triples name the same nodes in any order.
fn same_nodes(mut a: Triple, b: Option<Triple>) -> bool {
    let Some(mut b) = b else {
        return false;
    };
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Runs the kinetic sweep from time `-∞` until no event remains.
///
/// Returns the final bridge and the merged history.
fn sweep(
    list: &mut ActiveList<'_>,
    mut u: NodeId,
    mut v: NodeId,
    left: &EventHistory,
    right: &EventHistory,
) -> (NodeId, NodeId, EventHistory) {
    let mut events = EventHistory::new();
    let (mut i, mut j) = (0, 0);
    let mut now = f64::NEG_INFINITY;
    let mut fired = None;
    let mut degenerate = false;

    loop {
        let triples = [
            history_triple(list, left, i),
            history_triple(list, right, j),
            list.next(u).map(|w| [u, w, v]),
            list.prev(u).map(|w| [w, u, v]),
            list.prev(v).map(|w| [u, w, v]),
            list.next(v).map(|w| [u, v, w]),
        ];
        let times = triples.map(|triple| triple_time(list, triple));
        degenerate |= meets_degeneracy(list, &triples, &times, now, fired);

        let Some((candidate, time)) = next_event(&times, now) else {
            break;
        };
        degenerate |= times.iter().filter(|&&t| t == time).count() > 1;
        fired = triples[candidate as usize];

        match candidate {
            Candidate::LeftHistory => {
                if let Some(e) = left.get(i) {
                    if list.x(e) < list.x(u) {
                        events.push(e);
                    }
                    list.toggle(e);
                }
                i += 1;
            }
            Candidate::RightHistory => {
                if let Some(e) = right.get(j) {
                    if list.x(e) > list.x(v) {
                        events.push(e);
                    }
                    list.toggle(e);
                }
                j += 1;
            }
            Candidate::LeftAdvance => {
                if let Some(w) = list.next(u) {
                    u = w;
                    events.push(u);
                }
            }
            Candidate::LeftRetreat => {
                if let Some(w) = list.prev(u) {
                    events.push(u);
                    u = w;
                }
            }
            Candidate::RightRetreat => {
                if let Some(w) = list.prev(v) {
                    v = w;
                    events.push(v);
                }
            }
            Candidate::RightAdvance => {
                if let Some(w) = list.next(v) {
                    events.push(v);
                    v = w;
                }
            }
        }
        now = time;
    }

    if degenerate {
        events.mark_degenerate();
    }
    (u, v, events)
}

/// Undoes the sweep in reverse so the merged list sits at time `-∞`.
///
/// Events outside the final bridge span are toggled back; events inside
/// it were cut off by the bridge and are spliced back between the current
/// endpoints.
fn revert(
    list: &mut ActiveList<'_>,
    mut u: NodeId,
    mut v: NodeId,
    mid: NodeId,
    events: &EventHistory,
) {
    let mid_x = list.x(mid);
    for e in events.iter().rev() {
        let x = list.x(e);
        if x <= list.x(u) || x >= list.x(v) {
            list.toggle(e);
            if e == u {
                if let Some(w) = list.prev(u) {
                    u = w;
                }
            } else if e == v {
                if let Some(w) = list.next(v) {
                    v = w;
                }
            }
        } else {
            list.splice(u, e, v);
            if x < mid_x {
                u = e;
            } else {
                v = e;
            }
        }
    }
}
