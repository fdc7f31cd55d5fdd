use tracing::debug;

use super::*;

/// Number of edges inserted and removed by [`EdgeToggle::toggle_edges`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleSummary {
    pub added: NumEdges,
    pub removed: NumEdges,
}

/// Batch toggling of edges
pub trait EdgeToggle: GraphEdgeEditing {
    /// Processes `edges` in order: an edge whose id is stored is removed, any other edge is
    /// inserted. For undirected graphs, the id of either half selects the stored edge.
    ///
    /// Toggling the same batch twice restores the original edge set.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnGraph::<()>::new();
    /// g.add_vertices((1..=3).map(Vertex::new));
    /// g.add_edge(Edge::new(2, 1, 2));
    ///
    /// let summary = g.toggle_edges([Edge::new(2, 1, 2), Edge::new(4, 2, 3)]);
    /// assert_eq!(summary, ToggleSummary { added: 1, removed: 1 });
    /// assert!(g.has_edge(4) && !g.has_edge(2));
    /// ```
    fn toggle_edges<I>(&mut self, edges: I) -> ToggleSummary
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut summary = ToggleSummary::default();
        for edge in edges {
            let edge = edge.into();
            if self.has_edge(edge.id) {
                summary.removed += self.remove_edge(edge.id) as NumEdges;
            } else {
                summary.added += self.add_edge(edge) as NumEdges;
            }
        }

        debug!(
            added = summary.added,
            removed = summary.removed,
            "toggled edges"
        );
        summary
    }
}

impl<G: GraphEdgeEditing> EdgeToggle for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::*;

    fn sorted_edges<G: GraphRead>(g: &G) -> Vec<Edge> {
        g.all_edges().copied().sorted_by_key(|e| e.id).collect()
    }

    #[test]
    fn toggle_twice_restores() {
        let mut g = path_undirected(4);
        let before = sorted_edges(&g);
        let batch = [Edge::new(2, 1, 2), Edge::new(10, 1, 4), Edge::new(12, 2, 4)];

        let first = g.toggle_edges(batch);
        assert_eq!(first, ToggleSummary { added: 2, removed: 1 });
        assert_eq!(g.number_of_edges(), 4);
        assert_consistent(&g);

        let second = g.toggle_edges(batch);
        assert_eq!(second, ToggleSummary { added: 1, removed: 2 });
        assert_eq!(sorted_edges(&g), before);
    }

    #[test]
    fn repeated_edge_in_one_batch() {
        let mut g = DiGraph::<()>::new();
        g.add_vertices([1, 2].map(Vertex::new));

        let summary = g.toggle_edges([(7, 1, 2), (7, 1, 2), (7, 1, 2)]);
        assert_eq!(summary, ToggleSummary { added: 2, removed: 1 });
        assert!(g.has_edge(7));
    }

    #[test]
    fn mirror_id_selects_stored_edge() {
        let mut g = path_undirected(3);
        // id 1 is the mirrored half of edge 2 = {1, 2}; endpoints of the candidate are ignored
        let summary = g.toggle_edges([Edge::new(1, 1, 3)]);
        assert_eq!(summary, ToggleSummary { added: 0, removed: 1 });
        assert_eq!(g.number_of_edges(), 1);
        assert!(!g.has_edge(2));
        assert_consistent(&g);
    }
}
