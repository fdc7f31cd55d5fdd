use super::*;

/// Edge semantics of directed graphs: every edge is stored exactly as given
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Directed;

impl EdgeSemantics for Directed {
    const DIRECTED: bool = true;

    fn insert_edge<D>(graph: &mut Graph<D, Self>, edge: Edge) -> bool {
        if graph.has_edge(edge.id) {
            return false;
        }
        graph.insert_record(edge);
        true
    }

    fn delete_edge<D>(graph: &mut Graph<D, Self>, id: EdgeId) -> bool {
        graph.remove_record(id).is_some()
    }

    #[inline]
    fn count_edges(stored: NumEdges) -> NumEdges {
        stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_vertices() -> DiGraph<i32> {
        let mut g = DiGraph::new();
        g.add_vertices((1..=3).map(|i| Vertex::with_data(i, 10 * i as i32)));
        g
    }

    #[test]
    fn add_and_remove_edge() {
        let mut g = three_vertices();
        assert!(g.add_edge(Edge::new(1, 1, 2)));
        assert_eq!(g.number_of_edges(), 1);
        assert!(g.add_edge(Edge::new(2, 2, 1)));
        assert_eq!(g.number_of_edges(), 2);

        assert!(g.remove_edge(1));
        assert_eq!(g.number_of_edges(), 1);
        assert!(!g.remove_edge(3));
        assert!(g.remove_edge(2));
        assert!(!g.remove_edge(2));
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn duplicate_edge_id_is_rejected() {
        let mut g = three_vertices();
        assert!(g.add_edge(Edge::new(1, 1, 2)));
        assert!(!g.add_edge(Edge::new(1, 2, 3)));

        assert_eq!(*g.edge(1).unwrap(), Edge::new(1, 1, 2));
        assert_eq!(g.edge_ids_of(2), Ok(&[][..]));
    }

    #[test]
    fn edges_are_directed() {
        let mut g = three_vertices();
        g.add_edge(Edge::new(1, 1, 2));
        g.add_edge(Edge::new(2, 2, 3));

        let out = g.edge_ids_of(2).unwrap();
        assert_eq!(out.len(), 1);
        let e = g.edge(out[0]).unwrap();
        assert_eq!((e.from, e.to), (2, 3));

        assert_eq!(g.neighbors_of(1), Ok(vec![2]));
        assert_eq!(g.neighbors_of(3), Ok(vec![]));
    }

    #[test]
    fn remove_vertex_cascades_to_incoming_and_outgoing() {
        let mut g = three_vertices();
        g.add_edges([(1, 1, 2), (2, 2, 3), (3, 3, 2), (4, 1, 3)]);

        assert!(g.remove_vertex(2));
        assert_eq!(g.number_of_vertices(), 2);
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.edge_ids_of(1), Ok(&[4][..]));
        assert_eq!(g.edge_ids_of(3), Ok(&[][..]));
        assert!(g.edge_ids_of(2).is_err());
    }

    #[test]
    fn removing_absent_ids_leaves_graph_unchanged() {
        let mut g = three_vertices();
        g.add_edges([(1, 1, 2), (2, 2, 3)]);
        let before = format!("{g:?}");

        assert!(!g.remove_edge(7));
        assert!(!g.remove_vertex(7));
        assert!(!g.remove_edge(7));
        assert_eq!(format!("{g:?}"), before);
    }

    #[test]
    fn remove_vertex_only_referenced_by_edges() {
        let mut g = three_vertices();
        g.add_edge(Edge::new(1, 1, 9));

        assert!(g.remove_vertex(9));
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.number_of_vertices(), 3);
    }
}
