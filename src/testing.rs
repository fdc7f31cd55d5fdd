//! Fixtures shared by the unit tests of this crate.
#![cfg(test)]

use fxhash::FxHashMap;
use petgraph::graph::NodeIndex;
use crate::{gens::*, prelude::*};

/// Undirected graph over vertices `1..=n` with edges `(u, v)` using ids `0, 2, 4, ...`
pub fn undirected_from_pairs(n: VertexId, pairs: &[(VertexId, VertexId)]) -> UnGraph {
    let mut g = UnGraph::new();
    g.add_vertices((1..=n).map(Vertex::new));
    for (i, &(u, v)) in pairs.iter().enumerate() {
        assert!(g.add_edge(Edge::new(2 * i as EdgeId, u, v)));
    }
    g
}

/// Path `1 - 2 - ... - n` with edge ids `2, 4, 6, ...`
pub fn path_undirected(n: VertexId) -> UnGraph {
    let mut g = UnGraph::new();
    g.add_vertices((1..=n).map(Vertex::new));
    g.connect_path(1..=n, &mut EdgeIdAllocator::new());
    g
}

/// Cycle `1 - 2 - ... - n - 1` with edge ids `2, 4, 6, ...`
pub fn cycle_undirected(n: VertexId) -> UnGraph {
    let mut g = UnGraph::new();
    g.add_vertices((1..=n).map(Vertex::new));
    g.connect_cycle(1..=n, &mut EdgeIdAllocator::new());
    g
}

/// Converts a graph into a `petgraph` graph of the same kind, returning the node mapping
pub fn to_petgraph<D, Dir: EdgeSemantics>(
    graph: &Graph<D, Dir>,
) -> (
    petgraph::Graph<VertexId, (), petgraph::Undirected>,
    FxHashMap<VertexId, NodeIndex>,
) {
    let mut pg = petgraph::Graph::new_undirected();
    let mut mapping = FxHashMap::default();
    for u in graph.sorted_vertex_ids() {
        mapping.insert(u, pg.add_node(u));
    }
    for e in graph.all_edges() {
        // undirected petgraph edges must only be added once per mirrored pair
        if Dir::DIRECTED || e.id % 2 == 0 {
            pg.add_edge(mapping[&e.from], mapping[&e.to], ());
        }
    }
    (pg, mapping)
}

/// Checks all storage invariants via the public read interface
pub fn assert_consistent<D, Dir: EdgeSemantics>(graph: &Graph<D, Dir>) {
    for u in graph.vertex_ids() {
        for &id in graph.edge_ids_of(u).expect("every vertex has an adjacency entry") {
            assert_eq!(graph.edge(id).expect("adjacency references stored edge").from, u);
        }
    }

    for e in graph.all_edges() {
        assert!(graph.edge_ids_of(e.from).unwrap().contains(&e.id));
        if !Dir::DIRECTED {
            let mirror = graph.edge(paired_id(e.id)).expect("mirror is stored");
            assert_eq!(*mirror, e.mirrored());
        }
    }

    assert_eq!(
        graph.number_of_edges(),
        graph.number_of_edge_records() / if Dir::DIRECTED { 1 } else { 2 }
    );
}
