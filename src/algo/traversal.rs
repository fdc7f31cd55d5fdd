/*!
Breadth-first traversal and unweighted distances.

[`BreadthFirstSearch`] is a lazy iterator over `(vertex, depth)` pairs reachable from a start
vertex. The [`Traversal`] trait exposes it, together with distance queries built on top of it,
directly as methods on every graph implementing [`GraphRead`].
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use tracing::trace;

use super::*;

/// Breadth-first search iterator yielding each reachable vertex once together with its depth
/// (number of edges on a shortest path from the start vertex).
///
/// Vertices are marked visited when they are enqueued, so every vertex is expanded at most
/// once. If expanding a vertex fails, the iterator yields the error once and then stops.
pub struct BreadthFirstSearch<'a, G>
where
    G: GraphRead,
{
    graph: &'a G,
    queue: VecDeque<(VertexId, usize)>,
    visited: FxHashSet<VertexId>,
    stop_at: Option<VertexId>,
    failed: bool,
}

impl<'a, G> BreadthFirstSearch<'a, G>
where
    G: GraphRead,
{
    /// Creates a new search starting at `start`
    pub fn new(graph: &'a G, start: VertexId) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(start);
        Self {
            graph,
            queue: VecDeque::from([(start, 0)]),
            visited,
            stop_at: None,
            failed: false,
        }
    }

    /// Sets a stopper vertex. Once this vertex is discovered, no further vertex is expanded:
    /// the iterator returns the stopper next (without expanding it) and afterwards only `None`.
    pub fn stop_at(mut self, stopper: VertexId) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Returns *true* if `u` has been discovered so far
    pub fn did_visit(&self, u: VertexId) -> bool {
        self.visited.contains(&u)
    }
}

impl<G> Iterator for BreadthFirstSearch<'_, G>
where
    G: GraphRead,
{
    type Item = Result<(VertexId, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (u, depth) = self.queue.pop_front()?;

        if self.stop_at == Some(u) {
            self.queue.clear();
            return Some(Ok((u, depth)));
        }

        match self.graph.neighbors_of(u) {
            Ok(neighbors) => {
                for v in neighbors {
                    if !self.visited.insert(v) {
                        continue;
                    }
                    if self.stop_at == Some(v) {
                        self.queue.clear();
                        self.queue.push_back((v, depth + 1));
                        break;
                    }
                    self.queue.push_back((v, depth + 1));
                }
                Some(Ok((u, depth)))
            }
            Err(err) => {
                self.failed = true;
                self.queue.clear();
                Some(Err(inconsistent_at(u, err)))
            }
        }
    }
}

/// Traversal-based queries available on every readable graph
pub trait Traversal: GraphRead + Sized {
    /// Returns an iterator that traverses vertices reachable from `start` in BFS order
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnGraph::<()>::new();
    /// g.add_vertices([1, 2, 3].map(Vertex::new));
    /// g.add_edges([(2, 1, 2), (4, 2, 3)]);
    ///
    /// let order: Vec<_> = g.bfs(1).collect::<Result<_>>().unwrap();
    /// assert_eq!(order, vec![(1, 0), (2, 1), (3, 2)]);
    /// ```
    fn bfs(&self, start: VertexId) -> BreadthFirstSearch<'_, Self> {
        BreadthFirstSearch::new(self, start)
    }

    /// Returns the number of edges on a shortest path from `from` to `to`, ignoring weights.
    ///
    /// - `distance(u, u)` is `Some(0)` without looking at the graph.
    /// - Returns `None` if `to` is unreachable.
    /// - Fails with [`GraphError::VertexNotFound`] if `from` has no adjacency entry and with
    ///   [`GraphError::Inconsistent`] if the search runs into a broken part of the graph.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DiGraph::<()>::new();
    /// g.add_vertices([1, 2, 3].map(Vertex::new));
    /// g.add_edges([(1, 1, 2), (2, 2, 3)]);
    ///
    /// assert_eq!(g.distance(1, 3), Ok(Some(2)));
    /// assert_eq!(g.distance(3, 1), Ok(None));
    /// ```
    fn distance(&self, from: VertexId, to: VertexId) -> Result<Option<usize>> {
        if from == to {
            return Ok(Some(0));
        }
        self.edge_ids_of(from)?;

        for item in self.bfs(from).stop_at(to) {
            let (u, depth) = item?;
            if u == to {
                trace!(from, to, depth, "distance found");
                return Ok(Some(depth));
            }
        }

        Ok(None)
    }

    /// Returns the distance of every vertex reachable from `from` (including `from` itself)
    fn distances_from(&self, from: VertexId) -> Result<FxHashMap<VertexId, usize>> {
        self.edge_ids_of(from)?;
        self.bfs(from).collect()
    }

    /// Returns *true* if there is a (directed) path from `from` to `to`
    fn is_reachable(&self, from: VertexId, to: VertexId) -> Result<bool> {
        Ok(self.distance(from, to)?.is_some())
    }
}

impl<G: GraphRead> Traversal for G {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn distance_on_tree() {
        let g = undirected_from_pairs(6, &[(1, 2), (1, 3), (2, 4), (3, 5), (4, 6)]);

        assert_eq!(g.distance(1, 6), Ok(Some(3)));
        assert_eq!(g.distance(1, 5), Ok(Some(2)));
        assert_eq!(g.distance(6, 5), Ok(Some(5)));
        assert_eq!(g.distance(4, 4), Ok(Some(0)));
    }

    #[test]
    fn unreachable_and_missing() {
        let mut g = path_undirected(3);
        g.add_vertex(Vertex::new(9));

        assert_eq!(g.distance(1, 9), Ok(None));
        assert_eq!(g.distance(1, 77), Ok(None));
        assert_eq!(g.distance(77, 1), Err(GraphError::VertexNotFound(77)));
        assert_eq!(g.distance(77, 77), Ok(Some(0)));
        assert_eq!(g.is_reachable(3, 1), Ok(true));
    }

    #[test]
    fn dangling_target_is_found_without_expansion() {
        let mut g = DiGraph::<()>::new();
        g.add_vertices([1, 2].map(Vertex::new));
        g.add_edges([(1, 1, 2), (2, 2, 42)]);

        assert_eq!(g.distance(1, 42), Ok(Some(2)));
        assert!(matches!(
            g.distance(1, 43),
            Err(GraphError::Inconsistent(_))
        ));
    }

    #[test]
    fn search_stops_once_target_is_discovered() {
        let mut g = DiGraph::<()>::new();
        g.add_vertices([1, 3].map(Vertex::new));
        g.add_edges([(1, 1, 42), (2, 1, 3)]);

        assert_eq!(g.distance(1, 3), Ok(Some(1)));
        assert_eq!(
            g.bfs(1).stop_at(3).collect::<Result<Vec<_>>>(),
            Ok(vec![(1, 0), (3, 1)])
        );
        assert!(g.bfs(1).any(|item| item.is_err()));
    }

    #[test]
    fn distances_from_cycle() {
        let g = cycle_undirected(6);
        let dist = g.distances_from(1).unwrap();

        assert_eq!(dist.len(), 6);
        assert_eq!(dist[&1], 0);
        assert_eq!(dist[&2], 1);
        assert_eq!(dist[&6], 1);
        assert_eq!(dist[&4], 3);
    }

    #[test]
    fn distances_match_petgraph() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5, 20, 50] {
            for p in [0.05, 0.1, 0.3] {
                let g = UnGraph::<()>::gnp(rng, n, p);
                let (pg, mapping) = to_petgraph(&g);

                let expected = petgraph::algo::dijkstra(&pg, mapping[&0], None, |_| 1usize);
                let actual = g.distances_from(0).unwrap();

                assert_eq!(actual.len(), expected.len());
                for (u, d) in actual {
                    assert_eq!(expected[&mapping[&u]], d);
                    assert_eq!(g.distance(0, u), Ok(Some(d)));
                }
            }
        }
    }
}
