/*!
# Utilities

Helpers shared by algorithms and generators:
- [`VertexIndex`] / [`DenseAdjacency`]: translate arbitrary vertex ids into the dense range
  `0..n` in which algorithms keep their state,
- [`Probability`] / [`GeometricJumper`]: validation of probabilities and geometric skipping
  used by random generators.

You probably do not need to interact with this module directly.
*/

pub mod geometric;
pub mod vertex_index;

pub use geometric::*;
pub use vertex_index::{DenseAdjacency, VertexIndex};

pub(crate) use vertex_index::inconsistent_at;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probability(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}
