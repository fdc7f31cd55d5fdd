/*!
# Bipartite Graphs

Testing whether a graph is bipartite and computing one side of a bipartition.

A bipartition is described by its **left** side (color `0`): a set of vertex ids such that
every edge has exactly one endpoint in it. All remaining vertices form the right side.
*/

use fixedbitset::FixedBitSet;
use fxhash::FxHashSet;
use tracing::debug;

use super::*;

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: GraphRead + Sized {
    /// Tests whether `left` is the left side of a valid bipartition, ie. every stored edge
    /// has exactly one endpoint in `left`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnGraph::<()>::new();
    /// g.add_vertices((1..=3).map(Vertex::new));
    /// g.add_edges([(0, 1, 2), (2, 2, 3)]);
    ///
    /// assert!(g.is_bipartition([2]));
    /// assert!(!g.is_bipartition([1]));
    /// ```
    fn is_bipartition<I>(&self, left: I) -> bool
    where
        I: IntoIterator<Item = VertexId>,
    {
        let left: FxHashSet<VertexId> = left.into_iter().collect();
        self.all_edges()
            .all(|e| left.contains(&e.from) != left.contains(&e.to))
    }

    /// Computes the left side of a bipartition in ascending order of ids.
    ///
    /// Every connected component is 2-colored starting with color `0` at its smallest vertex;
    /// the vertices of color `0` are returned. Fails with [`GraphError::NotBipartite`] if two
    /// adjacent vertices receive the same color.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnGraph::<()>::new();
    /// g.add_vertices((1..=5).map(Vertex::new));
    /// g.add_edges([(0, 1, 2), (2, 2, 3), (4, 3, 4), (6, 4, 5)]);
    /// assert_eq!(g.bipartition(), Ok(vec![1, 3, 5]));
    ///
    /// g.add_edge(Edge::new(8, 1, 3));
    /// assert_eq!(g.bipartition(), Err(GraphError::NotBipartite));
    /// ```
    fn bipartition(&self) -> Result<Vec<VertexId>> {
        let adj = DenseAdjacency::build(self)?;
        let left = propose_possibly_illegal_bipartition(&adj);

        let legal = (0..adj.len()).all(|u| {
            adj.neighbors_of(u)
                .iter()
                .all(|&v| left.contains(u) != left.contains(v))
        });

        if !legal {
            debug!(vertices = adj.len(), "graph is not bipartite");
            return Err(GraphError::NotBipartite);
        }

        Ok(left.ones().map(|i| adj.index().id_of(i)).collect())
    }

    /// Tests whether the graph is bipartite.
    ///
    /// Only [`GraphError::NotBipartite`] maps to `Ok(false)`; a broken graph is still an error.
    fn is_bipartite(&self) -> Result<bool> {
        match self.bipartition() {
            Ok(_) => Ok(true),
            Err(GraphError::NotBipartite) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

impl<G: GraphRead> BipartiteTest for G {}

/// 2-colors every component by depth-first search without checking for conflicts.
/// Returns the set of vertices with color `0`.
fn propose_possibly_illegal_bipartition(adj: &DenseAdjacency) -> FixedBitSet {
    let n = adj.len();
    let mut colored = FixedBitSet::with_capacity(n);
    let mut left = FixedBitSet::with_capacity(n);
    let mut stack = Vec::new();

    for root in 0..n {
        if colored.contains(root) {
            continue;
        }

        colored.insert(root);
        left.insert(root);
        stack.push(root);

        while let Some(u) = stack.pop() {
            let u_left = left.contains(u);
            for &v in adj.neighbors_of(u) {
                if !colored.contains(v) {
                    colored.insert(v);
                    left.set(v, !u_left);
                    stack.push(v);
                }
            }
        }
    }

    left
}
