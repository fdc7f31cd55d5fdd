use fxhash::FxHashSet;

use super::*;

/// Edge semantics of undirected graphs.
///
/// An edge `e` is stored as two directed halves: `e` itself and `e.mirrored()` whose id is
/// [`paired_id`]`(e.id)`. Both halves are inserted and removed together, so
/// `number_of_edges` is half the number of stored records.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl EdgeSemantics for Undirected {
    const DIRECTED: bool = false;

    fn insert_edge<D>(graph: &mut Graph<D, Self>, edge: Edge) -> bool {
        let mirror = edge.mirrored();
        if graph.has_edge(edge.id) || graph.has_edge(mirror.id) {
            return false;
        }
        graph.insert_record(edge);
        graph.insert_record(mirror);
        true
    }

    fn delete_edge<D>(graph: &mut Graph<D, Self>, id: EdgeId) -> bool {
        if graph.remove_record(id).is_none() {
            return false;
        }
        graph.remove_record(paired_id(id));
        true
    }

    #[inline]
    fn count_edges(stored: NumEdges) -> NumEdges {
        stored / 2
    }
}

impl<D: Clone> Graph<D, Undirected> {
    /// Returns the complement graph using a fresh [`EdgeIdAllocator`].
    ///
    /// See [`Graph::complement_with`].
    pub fn complement(&self) -> Self {
        self.complement_with(&mut EdgeIdAllocator::new())
    }

    /// Returns the complement graph: the same vertices (payloads are cloned) and an edge
    /// `{u, v}` for every pair of distinct vertices that are not adjacent in `self`.
    /// Edge ids are drawn from `ids`.
    ///
    /// Runs in `O(n^2 + m)` and is intended for small graphs.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let mut g = UnGraph::<()>::new();
    /// g.add_vertices((1..=3).map(Vertex::new));
    /// g.add_edge(Edge::new(2, 1, 2));
    ///
    /// let c = g.complement();
    /// assert_eq!(c.number_of_vertices(), 3);
    /// assert_eq!(c.number_of_edges(), 2);
    /// ```
    pub fn complement_with(&self, ids: &mut EdgeIdAllocator) -> Self {
        let adjacent: FxHashSet<(VertexId, VertexId)> = self
            .edges
            .values()
            .map(|e| (e.from.min(e.to), e.from.max(e.to)))
            .collect();

        let order = self.sorted_vertex_ids();
        let mut complement = Self::with_capacity(order.len(), 0);
        for v in self.vertices.values() {
            complement.add_vertex(v.clone());
        }

        for (i, &u) in order.iter().enumerate() {
            for &v in &order[i + 1..] {
                if !adjacent.contains(&(u, v)) {
                    complement.add_edge(Edge::new(ids.next_id(), u, v));
                }
            }
        }

        debug!(
            vertices = complement.number_of_vertices(),
            edges = complement.number_of_edges(),
            "computed complement"
        );
        complement
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::*;

    #[test]
    fn add_edge_inserts_mirror() {
        let mut g = UnGraph::<()>::new();
        g.add_vertices((1..=2).map(Vertex::new));
        assert!(g.add_edge(Edge::weighted(2, 1, 2, 7)));

        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.number_of_edge_records(), 2);
        assert_eq!(*g.edge(1).unwrap(), Edge::weighted(1, 2, 1, 7));
        assert_eq!(g.neighbors_of(1), Ok(vec![2]));
        assert_eq!(g.neighbors_of(2), Ok(vec![1]));
    }

    #[test]
    fn colliding_mirror_is_rejected() {
        let mut g = UnGraph::<()>::new();
        assert!(g.add_edge(Edge::new(2, 1, 2)));
        assert!(!g.add_edge(Edge::new(1, 3, 4)));
        assert!(!g.add_edge(Edge::new(2, 3, 4)));
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn extreme_ids_pair_up() {
        let mut g = UnGraph::<()>::new();
        g.add_vertices((1..=4).map(Vertex::new));
        assert!(g.add_edge(Edge::new(EdgeId::MAX, 1, 2)));
        assert_eq!(*g.edge(EdgeId::MIN).unwrap(), Edge::new(EdgeId::MIN, 2, 1));
        assert!(!g.add_edge(Edge::new(EdgeId::MIN, 3, 4)));
        assert_consistent(&g);

        assert!(g.remove_edge(EdgeId::MIN));
        assert!(g.add_edge(Edge::new(EdgeId::MIN, 3, 4)));
        assert_eq!(g.neighbors_of(4), Ok(vec![3]));
        assert_eq!(g.number_of_edges(), 1);
        assert_consistent(&g);
    }

    #[test]
    fn remove_edge_removes_both_halves() {
        let mut g = path_undirected(3);
        assert_eq!(g.number_of_edges(), 2);

        // either half identifies the edge
        let half = g.edge_ids_of(2).unwrap()[0];
        assert!(g.remove_edge(paired_id(half)));
        assert!(!g.remove_edge(half));
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.number_of_edge_records(), 2);
        assert_consistent(&g);
    }

    #[test]
    fn remove_vertex_keeps_pairs_intact() {
        let mut g = path_undirected(5);
        assert!(g.remove_vertex(3));

        assert_eq!(g.number_of_vertices(), 4);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.number_of_edge_records(), 4);
        assert_consistent(&g);
    }

    #[test]
    fn edge_count_is_half_the_records() {
        let mut g = cycle_undirected(6);
        let mut alloc = EdgeIdAllocator::starting_after(100);
        for (u, v) in [(1, 4), (2, 5)] {
            g.add_edge(Edge::new(alloc.next_id(), u, v));
            assert_eq!(g.number_of_edges() * 2, g.number_of_edge_records());
        }
        for id in g.all_edges().map(|e| e.id).collect_vec() {
            g.remove_edge(id);
            assert_eq!(g.number_of_edges() * 2, g.number_of_edge_records());
        }
        assert!(g.is_singleton());
    }

    #[test]
    fn complement_of_path() {
        let g = path_undirected(4);
        let c = g.complement();

        assert_eq!(c.number_of_vertices(), 4);
        // K4 has 6 edges, the path uses 3
        assert_eq!(c.number_of_edges(), 3);
        assert_consistent(&c);

        let pairs = c
            .all_edges()
            .filter(|e| e.from < e.to)
            .map(|e| (e.from, e.to))
            .sorted()
            .collect_vec();
        assert_eq!(pairs, vec![(1, 3), (1, 4), (2, 4)]);
    }

    #[test]
    fn complement_keeps_payloads() {
        let mut g = UnGraph::new();
        g.add_vertices((1..=3).map(|i| Vertex::with_data(i, i * 100)));
        let c = g.complement();

        assert_eq!(c.number_of_edges(), 3);
        assert_eq!(c.data_of_vertex(2), Ok(&200));
    }

    #[test]
    fn complement_twice_restores_adjacency() {
        let g = cycle_undirected(5);
        let cc = g.complement().complement();

        for u in g.vertex_ids() {
            assert_eq!(
                g.neighbors_of(u).unwrap().into_iter().sorted().collect_vec(),
                cc.neighbors_of(u).unwrap().into_iter().sorted().collect_vec()
            );
        }
    }
}
