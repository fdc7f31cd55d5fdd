/*!
`lgraphs` is an in-memory graph library for graphs that are
- **l**abelled : vertices and edges carry arbitrary (possibly negative) `i64` ids chosen by the caller,
- optionally **payload-carrying** : every vertex stores a value of a generic type `D`,
- **weighted** : every edge has an integer weight (`1` by default),
- **directed** or **undirected**.

# Representation

A single storage type [`Graph<D, Dir>`](crate::repr::Graph) keeps a vertex table, an edge table
and an adjacency index mapping every vertex to the ids of its outgoing edges.

### Directed vs Undirected

The second type parameter decides the edge semantics:

- [`DiGraph<D>`](crate::repr::DiGraph) stores every edge exactly as given.
- [`UnGraph<D>`](crate::repr::UnGraph) stores every edge `e` as two directed halves: `e` and its
  mirror with id [`paired_id(e.id)`](crate::edge::paired_id). Both halves are inserted and
  removed together and count as one edge.

Use an [`EdgeIdAllocator`] to hand out ids whose mirrors never collide.

### Payloads

Vertices are [`Vertex<D>`]. Graphs over `Vertex<()>` carry no payload, and asking them for one
is rejected at compile time.

# Design

All algorithms are provided as configurable structs (eg. [`HopcroftKarp`](crate::algo::HopcroftKarp))
that one can alter using the *Builder* / *Setter* pattern before running them on a graph.
The commonly used functionality is also implemented via traits on the graph itself, making it
usable without configuring anything beforehand.

Lookups report [`GraphError::VertexNotFound`] / [`GraphError::EdgeNotFound`]; algorithms that run
into a broken graph (eg. an edge pointing to a vertex that was never stored) stop with
[`GraphError::Inconsistent`]. The library emits [`tracing`](https://docs.rs/tracing) events but
never installs a subscriber.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations and the
  graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS
  distances (`graph.distance(u, v)`), articulation points, bipartiteness, maximum bipartite
  matching, subgraphs and batch edge toggling,
- [`gens`] includes a random graph generator and deterministic substructures such as
  paths/cycles/cliques/stars,
- [`io`] renders graphs in a short human-readable text format.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let mut g = UnGraph::new();
g.add_vertices((1..=4).map(|i| Vertex::with_data(i, i * 10)));

let mut ids = EdgeIdAllocator::new();
for (u, v) in [(1, 2), (2, 3), (2, 4)] {
    g.add_edge(Edge::new(ids.next_id(), u, v));
}

assert_eq!(g.number_of_edges(), 3);
assert_eq!(g.articulation_points(), Ok(vec![2]));
assert_eq!(g.distance(1, 4), Ok(Some(2)));
assert_eq!(g.data_of_vertex(3), Ok(&30));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod vertex;

pub use edge::*;
pub use error::*;
pub use vertex::*;

/// `lgraphs::prelude` includes definitions for vertices, edges and errors, all basic graph
/// operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
