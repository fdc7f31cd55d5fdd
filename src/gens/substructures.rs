/*!
# Substructure Generators

Adds common motifs (paths, cycles, cliques and stars) to an already existing graph. Edge ids
are drawn from an [`EdgeIdAllocator`], which keeps the mirrored ids of undirected graphs apart.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = UnGraph::<()>::new();
g.add_vertices((0..5).map(Vertex::new));

let mut ids = EdgeIdAllocator::new();
g.connect_path([0, 1, 2], &mut ids);
g.connect_cycle([2, 3, 4], &mut ids);

assert_eq!(g.number_of_edges(), 5);
assert_eq!(g.degree_of(2), Ok(3));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
///
/// Every method returns the number of edges that were inserted; an edge is only rejected if its
/// id (or mirrored id) is already in use.
pub trait GeneratorSubstructures {
    /// Connects consecutive vertices with an edge `(u, v)`
    fn connect_path<P>(&mut self, vertices_on_path: P, ids: &mut EdgeIdAllocator) -> NumEdges
    where
        P: IntoIterator<Item = VertexId>;

    /// Connects consecutive vertices and the last vertex back to the first.
    /// A single vertex receives a self-loop.
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C, ids: &mut EdgeIdAllocator) -> NumEdges
    where
        C: IntoIterator<Item = VertexId>;

    /// Connects all given vertices pairwise. Directed graphs receive both orientations.
    /// Duplicates in `vertices` are ignored.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = DiGraph::<()>::new();
    /// let added = g.connect_clique(&[1, 2, 3], false, &mut EdgeIdAllocator::new());
    ///
    /// assert_eq!(added, 6);
    /// ```
    fn connect_clique(
        &mut self,
        vertices: &[VertexId],
        with_loops: bool,
        ids: &mut EdgeIdAllocator,
    ) -> NumEdges;

    /// Connects `center` with every leaf by an edge `(center, leaf)`
    fn connect_star<L>(
        &mut self,
        center: VertexId,
        leaves: L,
        ids: &mut EdgeIdAllocator,
    ) -> NumEdges
    where
        L: IntoIterator<Item = VertexId>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, vertices_on_path: P, ids: &mut EdgeIdAllocator) -> NumEdges
    where
        P: IntoIterator<Item = VertexId>,
    {
        vertices_on_path
            .into_iter()
            .tuple_windows()
            .filter(|&(u, v)| self.add_edge(Edge::new(ids.next_id(), u, v)))
            .count()
    }

    fn connect_cycle<C>(&mut self, vertices_in_cycle: C, ids: &mut EdgeIdAllocator) -> NumEdges
    where
        C: IntoIterator<Item = VertexId>,
    {
        let mut iter = vertices_in_cycle.into_iter();
        let Some(first) = iter.next() else {
            return 0;
        };

        let mut added = 0;
        let mut prev = first;
        for cur in iter {
            added += self.add_edge(Edge::new(ids.next_id(), prev, cur)) as NumEdges;
            prev = cur;
        }
        added + self.add_edge(Edge::new(ids.next_id(), prev, first)) as NumEdges
    }

    fn connect_clique(
        &mut self,
        vertices: &[VertexId],
        with_loops: bool,
        ids: &mut EdgeIdAllocator,
    ) -> NumEdges {
        let vertices = vertices.iter().copied().sorted().dedup().collect_vec();

        let mut added = 0;
        for &u in &vertices {
            for &v in &vertices {
                if (u == v && !with_loops) || (Self::is_undirected() && u > v) {
                    continue;
                }
                added += self.add_edge(Edge::new(ids.next_id(), u, v)) as NumEdges;
            }
        }
        added
    }

    fn connect_star<L>(
        &mut self,
        center: VertexId,
        leaves: L,
        ids: &mut EdgeIdAllocator,
    ) -> NumEdges
    where
        L: IntoIterator<Item = VertexId>,
    {
        leaves
            .into_iter()
            .filter(|&leaf| self.add_edge(Edge::new(ids.next_id(), center, leaf)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, testing::*};

    fn sorted_pairs<G: GraphRead>(g: &G) -> Vec<(VertexId, VertexId)> {
        g.all_edges().map(|e| (e.from, e.to)).sorted().collect()
    }

    #[test]
    fn connect_path() {
        let mut ids = EdgeIdAllocator::new();
        let mut g = DiGraph::<()>::new();
        assert_eq!(g.connect_path([], &mut ids), 0);
        assert_eq!(g.connect_path([1], &mut ids), 0);
        assert_eq!(g.connect_path([0, 3, 1, 4], &mut ids), 3);
        assert_eq!(sorted_pairs(&g), vec![(0, 3), (1, 4), (3, 1)]);
    }

    #[test]
    fn connect_cycle() {
        let mut ids = EdgeIdAllocator::new();

        let mut g = DiGraph::<()>::new();
        assert_eq!(g.connect_cycle([], &mut ids), 0);
        assert_eq!(g.connect_cycle([1], &mut ids), 1);
        assert!(g.edge(ids.last_id()).unwrap().is_loop());

        let mut g = UnGraph::<()>::new();
        g.add_vertices((1..=5).map(Vertex::new));
        assert_eq!(g.connect_cycle(1..=5, &mut ids), 5);
        assert_consistent(&g);
        assert_eq!(g.articulation_points(), Ok(vec![]));
        assert_eq!(g.distance(1, 3), Ok(Some(2)));
    }

    #[test]
    fn connect_clique() {
        let mut ids = EdgeIdAllocator::new();

        let mut g = UnGraph::<()>::new();
        g.add_vertices((1..=4).map(Vertex::new));
        assert_eq!(g.connect_clique(&[4, 1, 2, 3, 2], false, &mut ids), 6);
        assert_consistent(&g);
        assert!(g.complement().is_singleton());

        let mut g = DiGraph::<()>::new();
        assert_eq!(g.connect_clique(&[1, 2], true, &mut ids), 4);
        assert_eq!(sorted_pairs(&g), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn connect_star() {
        let mut ids = EdgeIdAllocator::starting_after(100);
        let mut g = UnGraph::<()>::new();
        g.add_vertices((0..5).map(Vertex::new));

        assert_eq!(g.connect_star(0, 1..5, &mut ids), 4);
        assert_eq!(g.degree_of(0), Ok(4));
        assert_eq!(g.articulation_points(), Ok(vec![0]));
        assert_eq!(g.bipartition(), Ok(vec![0]));
        assert!(g.all_edges().all(|e| e.id > 100));
    }

    #[test]
    fn used_ids_are_rejected() {
        let mut g = UnGraph::<()>::new();
        g.connect_path([1, 2, 3], &mut EdgeIdAllocator::new());
        assert_eq!(g.connect_path([3, 4], &mut EdgeIdAllocator::new()), 0);
        assert_eq!(g.number_of_edges(), 2);
    }
}
