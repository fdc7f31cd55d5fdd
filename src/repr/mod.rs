/*!
# Graph Representation

A single storage type [`Graph`] holds

- a vertex table `VertexId -> Vertex<D>`,
- an edge table `EdgeId -> Edge`,
- an adjacency index `VertexId -> [EdgeId]` listing the edges leaving each vertex.

How edges are inserted, removed and counted is decided by the [`EdgeSemantics`] parameter:

- [`Directed`]: every edge is stored exactly as given.
- [`Undirected`]: every edge is stored together with its mirrored half
  (see [`paired_id`](crate::edge::paired_id)).

Use the aliases [`DiGraph`] and [`UnGraph`] in most places.

## Invariants
- Every id in the adjacency index has an entry in the edge table and every edge in the edge
  table is listed in the adjacency of its source.
- Every vertex in the vertex table has an adjacency entry (possibly empty).
- For undirected graphs, every stored edge `e` has its mirror `paired_id(e.id)` stored with
  switched endpoints and equal weight.

Endpoints of inserted edges are not validated: edges may point to vertices that are not (yet)
stored. Algorithms report such dangling edges as [`GraphError::Inconsistent`].
*/

use std::{fmt::Debug, marker::PhantomData};

use fxhash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{ops::*, vertex::PayloadCheck, *};

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

/// Outgoing edge ids of a single vertex in insertion order
pub type Adjacency = SmallVec<[EdgeId; 4]>;

/// Strategy deciding how edges of a [`Graph`] are mutated and counted
pub trait EdgeSemantics: Copy + Clone + Debug + Default + 'static {
    /// `true` if edges are stored as single directed records
    const DIRECTED: bool;

    /// Inserts `edge` (and possibly derived records).
    /// Returns *false* and leaves the graph untouched if an affected id is already stored.
    fn insert_edge<D>(graph: &mut Graph<D, Self>, edge: Edge) -> bool;

    /// Removes the edge `id` (and possibly derived records).
    /// Returns *true* if the edge existed.
    fn delete_edge<D>(graph: &mut Graph<D, Self>, id: EdgeId) -> bool;

    /// Number of logical edges given the number of stored records
    fn count_edges(stored: NumEdges) -> NumEdges;
}

/// Graph storage over vertex payloads `D` with edge semantics `Dir`
#[derive(Clone)]
pub struct Graph<D = (), Dir: EdgeSemantics = Directed> {
    vertices: FxHashMap<VertexId, Vertex<D>>,
    edges: FxHashMap<EdgeId, Edge>,
    adjacency: FxHashMap<VertexId, Adjacency>,
    _dir: PhantomData<Dir>,
}

/// Directed graph
pub type DiGraph<D = ()> = Graph<D, Directed>;

/// Undirected graph storing every edge as two mirrored halves
pub type UnGraph<D = ()> = Graph<D, Undirected>;

impl<D, Dir: EdgeSemantics> Default for Graph<D, Dir> {
    fn default() -> Self {
        Self {
            vertices: FxHashMap::default(),
            edges: FxHashMap::default(),
            adjacency: FxHashMap::default(),
            _dir: PhantomData,
        }
    }
}

impl<D, Dir: EdgeSemantics> Graph<D, Dir> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `n` vertices and `m` stored edge records
    pub fn with_capacity(n: NumVertices, m: NumEdges) -> Self {
        Self {
            vertices: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            edges: FxHashMap::with_capacity_and_hasher(m, Default::default()),
            adjacency: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            _dir: PhantomData,
        }
    }

    /// Returns the vertex with the given id
    pub fn vertex(&self, u: VertexId) -> Result<&Vertex<D>> {
        self.vertices.get(&u).ok_or(GraphError::VertexNotFound(u))
    }

    /// Returns an iterator over all vertices in unspecified order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<D>> + '_ {
        self.vertices.values()
    }

    /// Returns the number of stored edge records; twice the number of edges for undirected graphs
    pub fn number_of_edge_records(&self) -> NumEdges {
        self.edges.len()
    }

    /// Removes all vertices and edges
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.adjacency.clear();
    }

    /// Stores a single directed record without any checks besides set semantics on the adjacency.
    pub(crate) fn insert_record(&mut self, edge: Edge) {
        trace!(id = edge.id, from = edge.from, to = edge.to, "insert edge record");
        let out = self.adjacency.entry(edge.from).or_default();
        if !out.contains(&edge.id) {
            out.push(edge.id);
        }
        self.edges.insert(edge.id, edge);
    }

    /// Removes a single directed record from the edge table and from its source's adjacency
    pub(crate) fn remove_record(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.remove(&id)?;
        trace!(id, from = edge.from, to = edge.to, "remove edge record");
        if let Some(out) = self.adjacency.get_mut(&edge.from)
            && let Some(pos) = out.iter().position(|&e| e == id)
        {
            out.remove(pos);
        }
        Some(edge)
    }

    /// Ensures that `u` has an adjacency entry
    pub(crate) fn touch_adjacency(&mut self, u: VertexId) {
        self.adjacency.entry(u).or_default();
    }
}

impl<D, Dir: EdgeSemantics> GraphType for Graph<D, Dir> {
    const DIRECTED: bool = Dir::DIRECTED;
}

impl<D, Dir: EdgeSemantics> GraphOrder for Graph<D, Dir> {
    #[inline]
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len()
    }

    #[inline]
    fn number_of_edges(&self) -> NumEdges {
        Dir::count_edges(self.edges.len())
    }
}

impl<D, Dir: EdgeSemantics> GraphRead for Graph<D, Dir> {
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    fn has_vertex(&self, u: VertexId) -> bool {
        self.vertices.contains_key(&u)
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges.get(&id).ok_or(GraphError::EdgeNotFound(id))
    }

    fn edge_ids_of(&self, u: VertexId) -> Result<&[EdgeId]> {
        self.adjacency
            .get(&u)
            .map(|out| out.as_slice())
            .ok_or(GraphError::VertexNotFound(u))
    }

    fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }
}

impl<D, Dir: EdgeSemantics> GraphPayload<D> for Graph<D, Dir> {
    /// Returns the payload of vertex `u`.
    ///
    /// Graphs over `Vertex<()>` carry no payload; calling this on them fails to compile:
    /// ```compile_fail
    /// use lgraphs::prelude::*;
    ///
    /// let mut g = DiGraph::<()>::new();
    /// g.add_vertex(Vertex::new(1));
    /// let _ = g.data_of_vertex(1);
    /// ```
    fn data_of_vertex(&self, u: VertexId) -> Result<&D> {
        #[allow(clippy::let_unit_value)]
        let () = PayloadCheck::<D>::PRESENT;
        self.vertex(u).map(|v| &v.data)
    }
}

impl<D, Dir: EdgeSemantics> GraphVertexEditing<D> for Graph<D, Dir> {
    fn add_vertex(&mut self, vertex: Vertex<D>) {
        trace!(id = vertex.id(), "add vertex");
        self.touch_adjacency(vertex.id());
        self.vertices.insert(vertex.id(), vertex);
    }

    fn remove_vertex(&mut self, u: VertexId) -> bool {
        let mut removed = self.vertices.remove(&u).is_some();
        let mut removed_edges = 0;

        if let Some(out) = self.adjacency.remove(&u) {
            removed = true;
            for id in out {
                removed_edges += self.edges.remove(&id).is_some() as usize;
            }
        }

        let edges = &mut self.edges;
        for out in self.adjacency.values_mut() {
            out.retain(|id| {
                let id = *id;
                if edges.get(&id).is_some_and(|e| e.to == u) {
                    edges.remove(&id);
                    removed_edges += 1;
                    false
                } else {
                    true
                }
            });
        }

        if removed || removed_edges > 0 {
            debug!(vertex = u, removed_edges, "removed vertex");
        }

        removed || removed_edges > 0
    }
}

impl<D, Dir: EdgeSemantics> GraphEdgeEditing for Graph<D, Dir> {
    fn add_edge(&mut self, edge: Edge) -> bool {
        Dir::insert_edge(self, edge)
    }

    fn remove_edge(&mut self, id: EdgeId) -> bool {
        Dir::delete_edge(self, id)
    }
}

impl<D: Debug, Dir: EdgeSemantics> Debug for Graph<D, Dir> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut vertices: Vec<_> = self.vertices.values().collect();
        vertices.sort_unstable_by_key(|v| v.id());
        let mut edges: Vec<_> = self.edges.values().collect();
        edges.sort_unstable_by_key(|e| e.id);

        f.debug_struct(if Dir::DIRECTED { "DiGraph" } else { "UnGraph" })
            .field("vertices", &vertices)
            .field("edges", &edges)
            .finish()
    }
}
