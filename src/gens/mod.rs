/*!
# Graph Generators

Builders for random graphs and helpers that add deterministic substructures to existing graphs.

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.vertices(n).prob(p)`).
3. Generate vertex pairs via `generate()` or `stream()`.

Generators produce pairs of vertex ids in `0..n`; they do not allocate edge ids. The
[`RandomGraph`] trait builds complete graphs from them, drawing edge ids from an
[`EdgeIdAllocator`] so that undirected graphs receive valid mirrored pairs.

Supported models:
- G(n,p): Erdős–Rényi model with independent edge probability
*/

use rand::Rng;
use tracing::debug;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of vertices.
pub trait NumVerticesGen {
    /// Sets the number of vertices in the graph generator.
    fn vertices(self, n: NumVertices) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random pair generator.
pub trait GraphGenerator {
    /// Generates a list of random vertex pairs.
    fn generate<R>(&self, rng: &mut R) -> Vec<(VertexId, VertexId)>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated vertex pairs.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = (VertexId, VertexId)>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph over vertices `0..n` without self-loops.
    /// Vertex payloads are `D::default()` and edge ids start at `2`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, gens::*};
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
    /// let g = UnGraph::<()>::gnp(rng, 10, 1.0);
    ///
    /// assert_eq!(g.number_of_vertices(), 10);
    /// assert_eq!(g.number_of_edges(), 45);
    /// ```
    fn gnp<R>(rng: &mut R, n: NumVertices, p: f64) -> Self
    where
        R: Rng;
}

impl<D, Dir> RandomGraph for Graph<D, Dir>
where
    D: Default,
    Dir: EdgeSemantics,
{
    fn gnp<R>(rng: &mut R, n: NumVertices, p: f64) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::with_capacity(n, 0);
        graph.add_vertices((0..n as VertexId).map(|u| Vertex::with_data(u, D::default())));

        let mut ids = EdgeIdAllocator::new();
        for (u, v) in Gnp::new()
            .vertices(n)
            .prob(p)
            .stream(rng)
            .filter(|&(u, v)| Dir::DIRECTED || u < v)
        {
            graph.add_edge(Edge::new(ids.next_id(), u, v));
        }

        debug!(
            vertices = n,
            p,
            edges = graph.number_of_edges(),
            "generated G(n,p) graph"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::*;

    #[test]
    fn complete_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        let g = DiGraph::<()>::gnp(rng, 6, 1.0);
        assert_eq!(g.number_of_edges(), 30);
        assert!(g.all_edges().all(|e| !e.is_loop()));

        let g = UnGraph::<()>::gnp(rng, 6, 1.0);
        assert_eq!(g.number_of_edges(), 15);
        assert_consistent(&g);
    }

    #[test]
    fn payloads_are_default() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let g = UnGraph::<u32>::gnp(rng, 5, 0.5);

        assert_eq!(g.sorted_vertex_ids(), vec![0, 1, 2, 3, 4]);
        assert_eq!(g.data_of_vertex(3), Ok(&0));
        assert_consistent(&g);
    }
}
