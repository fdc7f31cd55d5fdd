/*!
# Vertex Index

Algorithms keep their per-vertex state (discovery times, colors, matches, ...) in plain
vectors. [`VertexIndex`] maps the arbitrary [`VertexId`]s of a graph onto the dense range
`0..n` and back, and [`DenseAdjacency`] snapshots the adjacency of a graph in that range.
*/

use fxhash::FxHashMap;

use crate::{ops::*, *};

/// Bidirectional mapping between vertex ids and dense indices `0..n`.
///
/// Indices are assigned in ascending order of ids, so iteration order (and with it the
/// result of every algorithm built on top) does not depend on hashing.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    ids: Vec<VertexId>,
    index_of: FxHashMap<VertexId, usize>,
}

impl VertexIndex {
    /// Indexes all vertices of `graph`
    pub fn new<G: GraphRead>(graph: &G) -> Self {
        Self::from_sorted(graph.sorted_vertex_ids())
    }

    /// Indexes the given ids (duplicates are ignored)
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut ids: Vec<_> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self::from_sorted(ids)
    }

    fn from_sorted(ids: Vec<VertexId>) -> Self {
        let index_of = ids.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        Self { ids, index_of }
    }

    /// Returns the number of indexed vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns *true* if no vertex is indexed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the dense index of `u`, if indexed
    #[inline]
    pub fn index_of(&self, u: VertexId) -> Option<usize> {
        self.index_of.get(&u).copied()
    }

    /// Returns the vertex id stored at dense index `i`.
    /// ** Panics if `i >= len` **
    #[inline]
    pub fn id_of(&self, i: usize) -> VertexId {
        self.ids[i]
    }

    /// Returns all indexed ids in ascending order
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }
}

/// Adjacency of a graph translated into dense indices of a [`VertexIndex`]
#[derive(Debug, Clone)]
pub struct DenseAdjacency {
    index: VertexIndex,
    neighbors: Vec<Vec<usize>>,
}

impl DenseAdjacency {
    /// Snapshots the adjacency of every vertex of `graph`.
    ///
    /// Fails with [`GraphError::Inconsistent`] if an edge points to a vertex that is not
    /// stored or an adjacency entry references a missing edge.
    pub fn build<G: GraphRead>(graph: &G) -> Result<Self> {
        let index = VertexIndex::new(graph);
        let neighbors = index
            .ids()
            .iter()
            .map(|&u| {
                graph
                    .neighbors_of(u)
                    .map_err(|err| inconsistent_at(u, err))?
                    .into_iter()
                    .map(|v| {
                        index.index_of(v).ok_or_else(|| {
                            GraphError::Inconsistent(format!(
                                "edge from vertex {u} points to missing vertex {v}"
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { index, neighbors })
    }

    /// Returns the underlying vertex index
    pub fn index(&self) -> &VertexIndex {
        &self.index
    }

    /// Returns the number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns *true* if there are no vertices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Returns the dense neighbors of dense vertex `u`.
    /// ** Panics if `u >= len` **
    #[inline]
    pub fn neighbors_of(&self, u: usize) -> &[usize] {
        &self.neighbors[u]
    }
}

/// Lookup failures observed while traversing a graph are no longer "not found" for the
/// caller: the vertex was reached through the graph itself, so the graph is broken.
pub(crate) fn inconsistent_at(u: VertexId, err: GraphError) -> GraphError {
    match err {
        GraphError::Inconsistent(_) => err,
        err => GraphError::Inconsistent(format!("while expanding vertex {u}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn indices_follow_id_order() {
        let index = VertexIndex::from_ids([30, -4, 7, 7]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.ids(), &[-4, 7, 30]);
        assert_eq!(index.index_of(30), Some(2));
        assert_eq!(index.index_of(8), None);
        assert_eq!(index.id_of(0), -4);
    }

    #[test]
    fn dense_adjacency_of_path() {
        let adj = DenseAdjacency::build(&path_undirected(3)).unwrap();
        assert_eq!(adj.len(), 3);
        assert_eq!(adj.neighbors_of(0), &[1]);
        assert_eq!(adj.neighbors_of(2), &[1]);
        assert_eq!(adj.neighbors_of(1).len(), 2);
    }

    #[test]
    fn dangling_edge_is_inconsistent() {
        let mut g = path_undirected(3);
        g.add_edge(Edge::new(100, 1, 42));

        assert!(matches!(
            DenseAdjacency::build(&g),
            Err(GraphError::Inconsistent(_))
        ));
    }
}
