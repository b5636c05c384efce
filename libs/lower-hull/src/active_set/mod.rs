//! # Active-Set List
//!
//! Doubly-linked list of point nodes stored in an arena and addressed by
//! integer handles. `None` stands for the absent node at every link site.
//!
//! ## Toggle
//!
//! A node is *linked* when its predecessor points back at it. Toggling a
//! linked node unlinks it by pointing its neighbours past it; toggling an
//! unlinked node relinks it between the neighbours it still remembers. A
//! node's own `prev`/`next` are never cleared by a toggle, so replaying a
//! recorded sequence of toggles moves the list forwards or backwards
//! through its history.
//!
//! ## Views
//!
//! [`ActiveList`] borrows a contiguous slice of the arena. Handles are
//! absolute positions in the x-sorted arena, so [`ActiveList::split_at`]
//! can hand out two disjoint views whose handles stay valid. Touching a
//! handle outside a view panics.


use glam::DVec3;

/// Handle of a node: its position in the x-sorted arena.
pub type NodeId = usize;

/// A point record in the active-set list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// The point's coordinates. Immutable once created.
    pub position: DVec3,
    /// Index of the point in the caller's input.
    pub index: usize,
    /// Predecessor, `None` when absent.
    pub prev: Option<NodeId>,
    /// Successor, `None` when absent.
    pub next: Option<NodeId>,
}

impl Node {
    /// Creates an unlinked node.
    pub fn new(position: DVec3, index: usize) -> Self {
        Self {
            position,
            index,
            prev: None,
            next: None,
        }
    }
}

/// Mutable view over a contiguous run of arena nodes.
#[derive(Debug)]
pub struct ActiveList<'a> {
    nodes: &'a mut [Node],
    first: NodeId,
}

impl<'a> ActiveList<'a> {
    /// Wraps a whole arena. The first node gets handle 0.
    pub fn new(nodes: &'a mut [Node]) -> Self {
        Self { nodes, first: 0 }
    }

    /// Handle of the first node in this view.
    pub fn first(&self) -> NodeId {
        self.first
    }

    /// Number of nodes in this view.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the view holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if `id` belongs to this view.
    pub fn contains(&self, id: NodeId) -> bool {
        id >= self.first && id - self.first < self.nodes.len()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id - self.first]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id - self.first]
    }

    /// Coordinates of a node.
    pub fn position(&self, id: NodeId) -> DVec3 {
        self.node(id).position
    }

    /// First coordinate of a node.
    pub fn x(&self, id: NodeId) -> f64 {
        self.node(id).position.x
    }

    /// Input index of a node.
    pub fn index(&self, id: NodeId) -> usize {
        self.node(id).index
    }

    /// Predecessor of a node.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    /// Successor of a node.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    /// Coordinates behind a possibly-absent handle.
    pub fn position_of(&self, id: Option<NodeId>) -> Option<DVec3> {
        id.map(|id| self.position(id))
    }

    fn set_next(&mut self, at: Option<NodeId>, to: Option<NodeId>) {
        if let Some(at) = at {
            self.node_mut(at).next = to;
        }
    }

    fn set_prev(&mut self, at: Option<NodeId>, to: Option<NodeId>) {
        if let Some(at) = at {
            self.node_mut(at).prev = to;
        }
    }

    // =========================================================================
    // STRUCTURE
    // =========================================================================

    /// Links every node of the view into one chain in handle order.
    ///
    /// The head's `prev` and the tail's `next` are absent.
    pub fn link_chain(&mut self) {
        let first = self.first;
        let last = first + self.nodes.len();
        for (offset, node) in self.nodes.iter_mut().enumerate() {
            let id = first + offset;
            node.prev = (id > first).then(|| id - 1);
            node.next = (id + 1 < last).then_some(id + 1);
        }
    }

    /// Detaches a node from both neighbours.
    pub fn isolate(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.prev = None;
        node.next = None;
    }

    /// Whether a neighbour currently points at `id`.
    ///
    /// Checked through the predecessor, or through the successor when the
    /// predecessor is absent. A node with no neighbours is never linked.
    pub fn is_linked(&self, id: NodeId) -> bool {
        let node = self.node(id);
        match (node.prev, node.next) {
            (Some(prev), _) => self.next(prev) == Some(id),
            (None, Some(next)) => self.prev(next) == Some(id),
            (None, None) => false,
        }
    }

    /// Inserts `id` if it is unlinked, otherwise removes it.
    ///
    /// Applying the same toggle twice restores the previous linkage.
    pub fn toggle(&mut self, id: NodeId) {
        let Node { prev, next, .. } = *self.node(id);
        if self.is_linked(id) {
            self.set_next(prev, next);
            self.set_prev(next, prev);
        } else {
            self.set_next(prev, Some(id));
            self.set_prev(next, Some(id));
        }
    }

    /// Makes `u` and `v` direct neighbours, dropping whatever lay between.
    pub fn join(&mut self, u: NodeId, v: NodeId) {
        self.node_mut(u).next = Some(v);
        self.node_mut(v).prev = Some(u);
    }

    /// Places `e` directly between `u` and `v`.
    pub fn splice(&mut self, u: NodeId, e: NodeId, v: NodeId) {
        self.join(u, e);
        self.join(e, v);
    }

    /// Splits the view at handle `mid` into `[first, mid)` and `[mid, end)`.
    pub fn split_at(&mut self, mid: NodeId) -> (ActiveList<'_>, ActiveList<'_>) {
        let (left, right) = self.nodes.split_at_mut(mid - self.first);
        (
            ActiveList {
                nodes: left,
                first: self.first,
            },
            ActiveList {
                nodes: right,
                first: mid,
            },
        )
    }

    /// Handles reachable from `head` by following `next`.
    ///
    /// Stops after `len()` steps so a corrupted chain cannot loop forever.
    pub fn walk(&self, head: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = Some(head);
        while let Some(id) = cursor {
            if chain.len() == self.nodes.len() {
                break;
            }
            chain.push(id);
            cursor = self.next(id);
        }
        chain
    }

    /// Snapshot of every node's `(prev, next)` pair in handle order.
    pub fn links(&self) -> Vec<(Option<NodeId>, Option<NodeId>)> {
        self.nodes.iter().map(|node| (node.prev, node.next)).collect()
    }
}
