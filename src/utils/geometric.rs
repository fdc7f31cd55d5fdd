use rand::Rng;
use rand_distr::{Distribution, Geometric};

/// Selects every position of `0..stop` independently with probability `p` by jumping over the
/// unselected positions with geometrically distributed step sizes.
///
/// This needs one random draw per *selected* position instead of one per position, which is
/// what makes sparse `G(n, p)` generation run in expected time `O(n + m)`.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    distr: Geometric,
    stop: u64,
}

impl GeometricJumper {
    /// Creates a jumper over `0..stop`. Returns `None` if `prob` is not a valid probability.
    pub fn new(prob: f64, stop: u64) -> Option<Self> {
        Geometric::new(prob)
            .ok()
            .map(|distr| Self { distr, stop })
    }

    /// Returns an iterator over the selected positions in increasing order
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        GeometricJumperIter {
            jumper: self,
            rng,
            cur: 0,
        }
    }
}

/// Iterator created by [`GeometricJumper::iter`]
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R> {
    jumper: GeometricJumper,
    rng: &'a mut R,
    cur: u64,
}

impl<R: Rng> Iterator for GeometricJumperIter<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur >= self.jumper.stop {
            return None;
        }

        // number of unselected positions before the next selected one
        let skip: u64 = self.jumper.distr.sample(self.rng);
        let pos = self.cur.saturating_add(skip);
        if pos >= self.jumper.stop {
            self.cur = self.jumper.stop;
            return None;
        }

        self.cur = pos + 1;
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert_eq!(GeometricJumper::new(0.0, 100).unwrap().iter(rng).count(), 0);
        assert_eq!(
            GeometricJumper::new(1.0, 100).unwrap().iter(rng).collect::<Vec<_>>(),
            (0..100).collect::<Vec<_>>()
        );
        assert!(GeometricJumper::new(1.5, 100).is_none());
        assert!(GeometricJumper::new(-0.1, 100).is_none());
    }

    #[test]
    fn positions_increase_and_stay_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let positions: Vec<_> = GeometricJumper::new(0.3, 1000).unwrap().iter(rng).collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(positions.iter().all(|&x| x < 1000));
        // expected 300, standard deviation below 15
        assert!((200..400).contains(&positions.len()));
    }
}
