use fixedbitset::FixedBitSet;
use tracing::debug;

use super::*;

/// Computes articulation points (cut vertices) of undirected graphs
pub trait ArticulationPoint: GraphRead + Sized {
    /// Returns all vertices whose removal increases the number of connected components, in
    /// ascending order of ids. Every connected component is searched.
    ///
    /// The adjacency is expected to be symmetric as in [`UnGraph`]. Edges pointing to vertices
    /// that are not stored yield [`GraphError::Inconsistent`].
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnGraph::<()>::new();
    /// g.add_vertices((1..=3).map(Vertex::new));
    /// g.add_edges([(0, 1, 2), (2, 2, 3)]);
    ///
    /// assert_eq!(g.articulation_points(), Ok(vec![2]));
    /// ```
    fn articulation_points(&self) -> Result<Vec<VertexId>> {
        ArticulationPointSearch::new(self).compute()
    }
}

impl<G: GraphRead> ArticulationPoint for G {}

/// One frame of the explicit depth-first stack
#[derive(Debug, Clone, Copy)]
struct Frame {
    u: usize,
    parent: Option<usize>,
    next: usize,
}

/// Tarjan's low-point search for articulation points.
///
/// The search runs on a dense snapshot of the graph with an explicit stack, so deep graphs
/// (e.g. long paths) do not overflow the call stack.
pub struct ArticulationPointSearch<'a, G>
where
    G: GraphRead,
{
    graph: &'a G,
}

impl<'a, G> ArticulationPointSearch<'a, G>
where
    G: GraphRead,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Runs the search over all components
    pub fn compute(self) -> Result<Vec<VertexId>> {
        let adj = DenseAdjacency::build(self.graph)?;
        let n = adj.len();

        // discovery times start at 1
        let mut dfs_num = vec![0usize; n];
        let mut low_point = vec![0usize; n];
        let mut visited = FixedBitSet::with_capacity(n);
        let mut cuts = FixedBitSet::with_capacity(n);
        let mut current_dfs_num = 0;
        let mut stack: Vec<Frame> = Vec::new();

        for root in 0..n {
            if visited.contains(root) {
                continue;
            }

            visited.insert(root);
            current_dfs_num += 1;
            dfs_num[root] = current_dfs_num;
            low_point[root] = current_dfs_num;
            stack.push(Frame {
                u: root,
                parent: None,
                next: 0,
            });

            let mut root_children = 0;

            while let Some(frame) = stack.last_mut() {
                let Frame { u, parent, next } = *frame;

                if let Some(&v) = adj.neighbors_of(u).get(next) {
                    frame.next += 1;

                    if !visited.contains(v) {
                        // tree edge
                        if parent.is_none() {
                            root_children += 1;
                        }
                        visited.insert(v);
                        current_dfs_num += 1;
                        dfs_num[v] = current_dfs_num;
                        low_point[v] = current_dfs_num;
                        stack.push(Frame {
                            u: v,
                            parent: Some(u),
                            next: 0,
                        });
                    } else if Some(v) != parent {
                        // back edge
                        low_point[u] = low_point[u].min(dfs_num[v]);
                    }
                    continue;
                }

                stack.pop();
                if let Some(p) = parent {
                    low_point[p] = low_point[p].min(low_point[u]);

                    let p_is_root = stack.last().is_some_and(|f| f.parent.is_none());
                    if !p_is_root && low_point[u] >= dfs_num[p] {
                        cuts.insert(p);
                    }
                }
            }

            if root_children > 1 {
                cuts.insert(root);
            }
        }

        let index = adj.index();
        let result: Vec<_> = cuts.ones().map(|i| index.id_of(i)).collect();
        debug!(
            vertices = n,
            articulation_points = result.len(),
            "articulation point search finished"
        );
        Ok(result)
    }
}
