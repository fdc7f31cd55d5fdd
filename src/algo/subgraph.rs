/*!
# Subgraph Algorithms

Extraction of vertex-induced and edge-induced subgraphs. Both produce a new, independent
graph of the same type with cloned payloads; the source graph is never modified.
*/

use fxhash::FxHashSet;
use tracing::debug;

use super::*;

/// A trait for creating subgraphs from a graph
pub trait Subgraph: Sized {
    /// Creates the **vertex-induced subgraph** on `vertices`.
    ///
    /// The result contains every listed vertex that is stored (ids without a vertex are
    /// ignored) and every edge whose endpoints are both listed. Edge ids and payloads are kept.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DiGraph::new();
    /// g.add_vertices((1..=4).map(|i| Vertex::with_data(i, i * 10)));
    /// g.add_edges([(1, 1, 2), (2, 2, 3), (3, 3, 4)]);
    ///
    /// let sub = g.subgraph_of_vertices([1, 2, 3]);
    /// assert_eq!(sub.number_of_vertices(), 3);
    /// assert_eq!(sub.number_of_edges(), 2);
    /// assert_eq!(sub.data_of_vertex(3), Ok(&30));
    /// ```
    fn subgraph_of_vertices<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>;

    /// Creates the **edge-induced subgraph** of `edges`.
    ///
    /// The result contains every listed edge that is stored (for undirected graphs together
    /// with its mirror, so either half selects the edge) and every stored endpoint of these
    /// edges. Unknown edge ids are ignored.
    fn subgraph_of_edges<I>(&self, edges: I) -> Self
    where
        I: IntoIterator<Item = EdgeId>;
}

impl<D, Dir> Subgraph for Graph<D, Dir>
where
    D: Clone,
    Dir: EdgeSemantics,
{
    fn subgraph_of_vertices<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let selected: FxHashSet<VertexId> = vertices
            .into_iter()
            .filter(|&u| self.has_vertex(u))
            .collect();

        let mut sub = Self::with_capacity(selected.len(), 0);
        for &u in &selected {
            if let Ok(v) = self.vertex(u) {
                sub.add_vertex(v.clone());
            }
        }

        for e in self.all_edges() {
            if selected.contains(&e.from) && selected.contains(&e.to) {
                sub.insert_record(*e);
            }
        }

        debug!(
            vertices = sub.number_of_vertices(),
            edges = sub.number_of_edges(),
            "vertex-induced subgraph"
        );
        sub
    }

    fn subgraph_of_edges<I>(&self, edges: I) -> Self
    where
        I: IntoIterator<Item = EdgeId>,
    {
        let mut sub = Self::new();

        for id in edges {
            let Ok(e) = self.edge(id) else {
                continue;
            };

            sub.insert_record(*e);
            if !Dir::DIRECTED
                && let Ok(mirror) = self.edge(paired_id(id))
            {
                sub.insert_record(*mirror);
            }

            for u in [e.from, e.to] {
                if !sub.has_vertex(u)
                    && let Ok(v) = self.vertex(u)
                {
                    sub.add_vertex(v.clone());
                }
            }
        }

        debug!(
            vertices = sub.number_of_vertices(),
            edges = sub.number_of_edges(),
            "edge-induced subgraph"
        );
        sub
    }
}
