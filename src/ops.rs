/*!
# Graph Operations

Traits describing what a graph can be asked (`GraphOrder`, `GraphRead`) and how it can be
edited (`GraphVertexEditing`, `GraphEdgeEditing`). All algorithms in [`algo`](crate::algo)
are written against these traits only; they never touch the internals of a representation.
*/

use crate::*;

/// Marker for the edge semantics of a graph type
pub trait GraphType {
    /// Whether edges are stored as single directed records (`true`) or as mirrored pairs
    const DIRECTED: bool;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::DIRECTED
    }
}

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of edges of the graph.
    /// For undirected graphs, each mirrored pair is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no vertices
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to vertices, edges and the adjacency index
pub trait GraphRead: GraphOrder {
    /// Returns an iterator over all vertex ids in unspecified order
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Returns *true* if a vertex with this id is stored
    fn has_vertex(&self, u: VertexId) -> bool;

    /// Returns *true* if an edge with this id is stored
    fn has_edge(&self, id: EdgeId) -> bool;

    /// Returns the edge with the given id
    fn edge(&self, id: EdgeId) -> Result<&Edge>;

    /// Returns the ids of all edges leaving `u`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `u` has no adjacency entry, which is
    /// different from `u` existing without outgoing edges.
    fn edge_ids_of(&self, u: VertexId) -> Result<&[EdgeId]>;

    /// Returns an iterator over all stored edges (both halves for undirected graphs)
    fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_;

    /// Returns the edges leaving `u`.
    ///
    /// An adjacency entry pointing to an edge missing from the edge table yields
    /// [`GraphError::Inconsistent`].
    fn out_edges_of(&self, u: VertexId) -> Result<Vec<&Edge>> {
        self.edge_ids_of(u)?
            .iter()
            .map(|&id| {
                self.edge(id).map_err(|_| {
                    GraphError::Inconsistent(format!(
                        "adjacency of vertex {u} references missing edge {id}"
                    ))
                })
            })
            .collect()
    }

    /// Returns the heads of all edges leaving `u` in adjacency order.
    /// Parallel edges yield the same neighbor multiple times.
    fn neighbors_of(&self, u: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.out_edges_of(u)?.into_iter().map(|e| e.to).collect())
    }

    /// Returns the number of edges leaving `u`
    fn degree_of(&self, u: VertexId) -> Result<NumEdges> {
        Ok(self.edge_ids_of(u)?.len())
    }

    /// Returns all vertex ids in ascending order
    fn sorted_vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<_> = self.vertex_ids().collect();
        ids.sort_unstable();
        ids
    }
}

/// Read access to payloads. Only available if the payload carries data.
pub trait GraphPayload<D> {
    /// Returns a reference to the payload of vertex `u`
    fn data_of_vertex(&self, u: VertexId) -> Result<&D>;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing<D> {
    /// Inserts a vertex. An existing vertex with the same id is overwritten (its edges are kept).
    fn add_vertex(&mut self, vertex: Vertex<D>);

    /// Adds all vertices in the collection
    fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Vertex<D>>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Removes a vertex together with every edge starting or ending at it.
    /// Returns *true* if anything was removed.
    fn remove_vertex(&mut self, u: VertexId) -> bool;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphRead {
    /// Inserts an edge (and its mirror for undirected graphs).
    /// Returns *true* exactly if the edge id was not present previously; otherwise the graph
    /// remains unchanged.
    fn add_edge(&mut self, edge: Edge) -> bool;

    /// Adds all edges in the collection and returns how many were inserted
    fn add_edges<I>(&mut self, edges: I) -> NumEdges
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        edges
            .into_iter()
            .map(|e| self.add_edge(e.into()))
            .filter(|&added| added)
            .count()
    }

    /// Removes the edge with the given id (and its mirror for undirected graphs).
    /// Returns *true* if the edge existed.
    fn remove_edge(&mut self, id: EdgeId) -> bool;
}
