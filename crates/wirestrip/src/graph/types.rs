//! Canonical edges and edge sets.
//!
//! Kept small and explicit to make `strip::grow` and `strip::search` easy to
//! read. An `Edge` is an unordered vertex pair stored with the smaller index
//! first, so equality and ordering are direction-independent. `EdgeSet` sits
//! on a `BTreeSet`, which gives deterministic lowest-edge-first iteration;
//! callers must not rely on the order for correctness, only reproducibility.

use std::collections::BTreeSet;

/// Vertex index into the source mesh's vertex list.
///
/// The search itself is size-agnostic; the binary encoders narrow indices to
/// their format widths (`u8`, 4-bit nibbles) behind capacity checks.
pub type VertexId = u16;

/// Unordered pair of distinct vertex indices, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// Canonicalize the pair. Self-loops have no strip representation and
    /// must be rejected upstream; this constructor refuses them outright.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        assert_ne!(a, b, "self-loop edge at vertex {a}");
        if a < b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// The two endpoints, smaller index first.
    #[inline]
    #[must_use]
    pub fn endpoints(self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// Is `v` one of the endpoints?
    #[inline]
    #[must_use]
    pub fn touches(self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// The endpoint opposite `v`, if `v` is incident.
    #[inline]
    #[must_use]
    pub fn other(self, v: VertexId) -> Option<VertexId> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A set of edges with value semantics: the "not yet assigned to a strip"
/// working set of the search, and the "used by this strip" set of a `Strip`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: BTreeSet<Edge>,
}

impl EdgeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge; returns false if it was already present.
    pub fn insert(&mut self, e: Edge) -> bool {
        self.edges.insert(e)
    }

    /// Remove an edge; returns false if it was absent.
    pub fn remove(&mut self, e: Edge) -> bool {
        self.edges.remove(&e)
    }

    #[must_use]
    pub fn contains(&self, e: Edge) -> bool {
        self.edges.contains(&e)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in canonical (lowest-first) order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// A copy of this set with every edge of `other` removed.
    #[must_use]
    pub fn without(&self, other: &EdgeSet) -> EdgeSet {
        EdgeSet {
            edges: self.edges.difference(&other.edges).copied().collect(),
        }
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl Extend<Edge> for EdgeSet {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}
