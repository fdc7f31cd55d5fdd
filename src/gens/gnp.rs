use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Expected out-degree of a vertex
    AvgDeg(f64),
}

/// `G(n,p)` generators produce every ordered pair `(u, v)` of distinct vertices in `0..n`
/// independently with probability `p`.
///
/// Self-loops are never produced. For undirected graphs, callers keep only pairs with `u < v`
/// (as [`RandomGraph::gnp`] does), which selects every unordered pair with probability `p`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumVertices,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly.
    /// ** Panics if `prob` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability(), "invalid probability {prob}");
        self.p = GnpType::Prob(prob);
        self
    }

    /// Resolves the configured probability.
    /// ** Panics if none was set or the average degree is too large for `n` **
    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = if self.n > 1 { d / (self.n - 1) as f64 } else { 0.0 };
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumVerticesGen for Gnp {
    fn vertices(mut self, n: NumVertices) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d / (n - 1)`.
    /// The conversion is done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = (VertexId, VertexId)> {
        let p = self.probability();
        let n = self.n as u64;

        // ordered pairs of distinct vertices; position x maps to row u = x / (n - 1)
        let max_value = n * n.saturating_sub(1);
        let to_pair = move |x: u64| {
            let u = x / (n - 1);
            let r = x % (n - 1);
            let v = if r >= u { r + 1 } else { r };
            (u as VertexId, v as VertexId)
        };

        GeometricJumper::new(p, max_value)
            .map(move |jumper| jumper.iter(rng))
            .into_iter()
            .flatten()
            .map(to_pair)
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn complete_and_empty() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let pairs = Gnp::new().vertices(4).prob(1.0).generate(rng);
        assert_eq!(pairs.len(), 12);
        assert!(pairs.iter().all(|(u, v)| u != v && (0..4).contains(u) && (0..4).contains(v)));
        assert_eq!(pairs.iter().collect::<FxHashSet<_>>().len(), 12);

        assert!(Gnp::new().vertices(100).prob(0.0).generate(rng).is_empty());
        assert!(Gnp::new().vertices(1).prob(1.0).generate(rng).is_empty());
        assert!(Gnp::new().vertices(0).prob(0.5).generate(rng).is_empty());
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let n = 1000;
        let pairs = Gnp::new().vertices(n).avg_deg(5.0).generate(rng);

        // expected n * 5 = 5000 pairs
        assert!((4500..5500).contains(&pairs.len()));
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }

    #[test]
    #[should_panic]
    fn probability_not_set() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let _ = Gnp::new().vertices(10).generate(rng);
    }
}
