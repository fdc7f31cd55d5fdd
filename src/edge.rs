use std::fmt::{Debug, Display};

use crate::VertexId;

/// Caller-assigned identifier of an edge
pub type EdgeId = i64;

/// Integer weight of an edge. Algorithms in this crate ignore weights.
pub type Weight = i64;

/// Number of edges stored in a graph
pub type NumEdges = usize;

/// Weight assigned by [`Edge::new`]
pub const DEFAULT_WEIGHT: Weight = 1;

/// A directed, weighted connection between two vertex ids.
///
/// Equality and hashing consider all fields. Edges of undirected graphs are stored as two
/// directed halves whose ids are linked by [`paired_id`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge with [`DEFAULT_WEIGHT`]
    pub const fn new(id: EdgeId, from: VertexId, to: VertexId) -> Self {
        Self::weighted(id, from, to, DEFAULT_WEIGHT)
    }

    /// Creates an edge with a given weight
    pub const fn weighted(id: EdgeId, from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self {
            id,
            from,
            to,
            weight,
        }
    }

    /// Returns the mirrored half of this edge as stored by undirected graphs:
    /// id `paired_id(self.id)`, endpoints switched, same weight.
    pub const fn mirrored(&self) -> Self {
        Self::weighted(paired_id(self.id), self.to, self.from, self.weight)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: VertexId) -> bool {
        self.from == u || self.to == u
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge<{}: {} -> {}>", self.id, self.from, self.to)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.weight == DEFAULT_WEIGHT {
            <Self as Display>::fmt(self, f)
        } else {
            write!(
                f,
                "edge<{}: {} -> {} ({})>",
                self.id, self.from, self.to, self.weight
            )
        }
    }
}

impl From<(EdgeId, VertexId, VertexId)> for Edge {
    fn from(value: (EdgeId, VertexId, VertexId)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl From<(EdgeId, VertexId, VertexId, Weight)> for Edge {
    fn from(value: (EdgeId, VertexId, VertexId, Weight)) -> Self {
        Edge::weighted(value.0, value.1, value.2, value.3)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// Returns the id of the mirrored half of an undirected edge.
///
/// Even ids pair with `id - 1`, odd ids with `id + 1`; the mapping is an involution.
/// The extremes wrap around, so `i64::MAX` and `i64::MIN` form a pair.
///
/// # Examples
/// ```
/// use lgraphs::prelude::*;
///
/// assert_eq!(paired_id(2), 1);
/// assert_eq!(paired_id(1), 2);
/// assert_eq!(paired_id(0), -1);
/// assert_eq!(paired_id(paired_id(7)), 7);
/// ```
#[inline]
pub const fn paired_id(id: EdgeId) -> EdgeId {
    if id % 2 == 0 {
        id.wrapping_sub(1)
    } else {
        id.wrapping_add(1)
    }
}

/// Hands out edge ids for undirected graphs.
///
/// Ids are even and strictly increasing (`2, 4, 6, ...` by default), so every returned id and
/// its [`paired_id`] stay disjoint from all other pairs handed out by the same allocator.
/// Allocators are plain values: independent graphs simply use independent allocators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeIdAllocator {
    current: EdgeId,
}

impl EdgeIdAllocator {
    /// Creates an allocator whose first id is `2`
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator whose first id is the smallest even id such that both the id and
    /// its [`paired_id`] are strictly larger than `last`.
    ///
    /// Useful to continue allocating ids for a graph that already holds edges up to `last`.
    pub fn starting_after(last: EdgeId) -> Self {
        Self {
            current: last + last.rem_euclid(2),
        }
    }

    /// Returns the next unused id
    pub fn next_id(&mut self) -> EdgeId {
        self.current += 2;
        self.current
    }

    /// Returns the most recently handed out id (or the starting point if none was handed out)
    pub fn last_id(&self) -> EdgeId {
        self.current
    }
}

impl Iterator for EdgeIdAllocator {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_is_involution() {
        for id in -10..10 {
            assert_ne!(paired_id(id), id);
            assert_eq!(paired_id(paired_id(id)), id);
        }

        assert_eq!(paired_id(EdgeId::MAX), EdgeId::MIN);
        assert_eq!(paired_id(EdgeId::MIN), EdgeId::MAX);
        for id in [EdgeId::MAX, EdgeId::MIN, EdgeId::MAX - 1, EdgeId::MIN + 1] {
            assert_eq!(paired_id(paired_id(id)), id);
        }
    }

    #[test]
    fn allocator_never_collides() {
        let mut alloc = EdgeIdAllocator::new();
        let mut seen = fxhash::FxHashSet::default();
        for _ in 0..100 {
            let id = alloc.next_id();
            assert!(seen.insert(id));
            assert!(seen.insert(paired_id(id)));
        }
        assert_eq!(alloc.last_id(), 200);
    }

    #[test]
    fn allocator_continues_after_existing_ids() {
        let mut alloc = EdgeIdAllocator::starting_after(7);
        assert_eq!(alloc.next_id(), 10);

        let mut alloc = EdgeIdAllocator::starting_after(8);
        assert_eq!(alloc.next_id(), 10);
    }

    #[test]
    fn mirrored_edge() {
        let e = Edge::weighted(4, 1, 2, 5);
        assert_eq!(e.mirrored(), Edge::weighted(3, 2, 1, 5));
        assert_eq!(e.mirrored().mirrored(), e);
        assert_eq!(format!("{e}"), "edge<4: 1 -> 2>");
        assert_eq!(format!("{e:?}"), "edge<4: 1 -> 2 (5)>");
    }
}
