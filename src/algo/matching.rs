/*!
# Matching Algorithms

Maximum matchings in bipartite graphs via **Hopcroft–Karp**.

A *matching* is a set of edges without shared endpoints. The result is returned as a
[`Matching`]: a symmetric partner map where `partner_of(u) == Some(v)` exactly if
`partner_of(v) == Some(u)`.
*/

use fixedbitset::FixedBitSet;
use fxhash::FxHashMap;
use std::collections::VecDeque;
use tracing::{debug, trace};

use super::*;

/// Symmetric partner map of a matching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    partner: FxHashMap<VertexId, VertexId>,
}

impl Matching {
    /// Returns the partner of `u`, if `u` is matched
    pub fn partner_of(&self, u: VertexId) -> Option<VertexId> {
        self.partner.get(&u).copied()
    }

    /// Returns *true* if `u` is matched
    pub fn is_matched(&self, u: VertexId) -> bool {
        self.partner.contains_key(&u)
    }

    /// Returns the number of matched pairs
    pub fn len(&self) -> usize {
        self.partner.len() / 2
    }

    /// Returns *true* if no vertex is matched
    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }

    /// Returns every matched pair `(u, v)` once with `u < v`, sorted
    pub fn pairs(&self) -> Vec<(VertexId, VertexId)> {
        let mut pairs: Vec<_> = self
            .partner
            .iter()
            .filter(|&(u, v)| u < v)
            .map(|(&u, &v)| (u, v))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Returns the partner map containing both directions of every pair
    pub fn as_map(&self) -> &FxHashMap<VertexId, VertexId> {
        &self.partner
    }

    pub fn into_map(self) -> FxHashMap<VertexId, VertexId> {
        self.partner
    }
}

/// A trait providing maximum matchings on bipartite graphs
pub trait MaximumMatching: GraphRead + Sized {
    /// Computes a maximum matching between `left` and all remaining vertices.
    ///
    /// It is not checked whether `left` is one side of a valid bipartition; if it is not, the
    /// result is unspecified (but still a set of disjoint edges).
    /// Fails with [`GraphError::VertexNotFound`] if `left` names a missing vertex.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnGraph::<()>::new();
    /// g.add_vertices((1..=6).map(Vertex::new));
    /// g.add_edges([(0, 1, 4), (2, 1, 5), (4, 2, 5), (6, 3, 6), (8, 2, 6)]);
    ///
    /// let matching = g.maximum_bipartite_matching([1, 2, 3]).unwrap();
    /// assert_eq!(matching.pairs(), vec![(1, 4), (2, 5), (3, 6)]);
    /// assert_eq!(matching.partner_of(6), Some(3));
    /// ```
    fn maximum_bipartite_matching<I>(&self, left: I) -> Result<Matching>
    where
        I: IntoIterator<Item = VertexId>,
    {
        HopcroftKarp::new(self).left(left).compute()
    }
}

impl<G: GraphRead> MaximumMatching for G {}

const UNSET: usize = usize::MAX;

/// Hopcroft–Karp search for a maximum bipartite matching.
///
/// Each phase runs a breadth-first search from all free left vertices that layers the graph
/// along alternating paths, followed by depth-first searches that augment along vertex-disjoint
/// shortest paths. The depth-first part uses an explicit stack.
pub struct HopcroftKarp<'a, G>
where
    G: GraphRead,
{
    graph: &'a G,
    left: Vec<VertexId>,
}

impl<'a, G> HopcroftKarp<'a, G>
where
    G: GraphRead,
{
    /// Creates a new search with an empty left side
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            left: Vec::new(),
        }
    }

    /// Sets the left side of the bipartition. Duplicates are ignored.
    pub fn left<I>(mut self, left: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.left = left.into_iter().collect();
        self
    }

    pub fn compute(self) -> Result<Matching> {
        let adj = DenseAdjacency::build(self.graph)?;
        let index = adj.index();

        let mut left = self
            .left
            .iter()
            .map(|&u| index.index_of(u).ok_or(GraphError::VertexNotFound(u)))
            .collect::<Result<Vec<_>>>()?;
        left.sort_unstable();
        left.dedup();

        let mut state = Phases::new(&adj);
        let mut phases = 0;
        while state.layer(&left) {
            phases += 1;
            state.visited.clear();
            for &u in &left {
                if state.x_match[u].is_none() {
                    state.augment(u);
                }
            }
        }

        let mut partner = FxHashMap::default();
        for &u in &left {
            if let Some(v) = state.x_match[u] {
                partner.insert(index.id_of(u), index.id_of(v));
                partner.insert(index.id_of(v), index.id_of(u));
            }
        }

        debug!(
            left = left.len(),
            phases,
            size = partner.len() / 2,
            "maximum bipartite matching"
        );
        Ok(Matching { partner })
    }
}

/// Working state of the Hopcroft–Karp phases over dense indices
struct Phases<'a> {
    adj: &'a DenseAdjacency,
    /// partner of a left vertex
    x_match: Vec<Option<usize>>,
    /// partner of a right vertex
    y_match: Vec<Option<usize>>,
    dx: Vec<usize>,
    dy: Vec<usize>,
    /// length of the shortest augmenting path found by the last layering
    dis: usize,
    visited: FixedBitSet,
    queue: VecDeque<usize>,
}

impl<'a> Phases<'a> {
    fn new(adj: &'a DenseAdjacency) -> Self {
        let n = adj.len();
        Self {
            adj,
            x_match: vec![None; n],
            y_match: vec![None; n],
            dx: vec![UNSET; n],
            dy: vec![UNSET; n],
            dis: UNSET,
            visited: FixedBitSet::with_capacity(n),
            queue: VecDeque::new(),
        }
    }

    /// Layers the graph from all free left vertices.
    /// Returns *true* if an augmenting path exists.
    fn layer(&mut self, left: &[usize]) -> bool {
        self.dx.fill(UNSET);
        self.dy.fill(UNSET);
        self.dis = UNSET;
        self.queue.clear();

        for &u in left {
            if self.x_match[u].is_none() {
                self.dx[u] = 0;
                self.queue.push_back(u);
            }
        }

        while let Some(u) = self.queue.pop_front() {
            if self.dx[u] > self.dis {
                break;
            }

            for &v in self.adj.neighbors_of(u) {
                if self.dy[v] != UNSET {
                    continue;
                }

                self.dy[v] = self.dx[u] + 1;
                match self.y_match[v] {
                    None => self.dis = self.dis.min(self.dy[v]),
                    Some(w) => {
                        self.dx[w] = self.dy[v] + 1;
                        self.queue.push_back(w);
                    }
                }
            }
        }

        trace!(dis = self.dis, "layered graph");
        self.dis != UNSET
    }

    /// Searches an augmenting path from the free left vertex `root` along the layering and
    /// flips it. Returns *true* on success.
    fn augment(&mut self, root: usize) -> bool {
        // frames of left vertices with their next adjacency position; `via[i]` is the right
        // vertex through which frame `i + 1` was entered
        let mut stack = vec![(root, 0usize)];
        let mut via: Vec<usize> = Vec::new();

        while let Some(top) = stack.last_mut() {
            let u = top.0;
            let Some(&v) = self.adj.neighbors_of(u).get(top.1) else {
                stack.pop();
                via.pop();
                continue;
            };
            top.1 += 1;

            if self.visited.contains(v) || self.dy[v] != self.dx[u] + 1 {
                continue;
            }
            self.visited.insert(v);

            match self.y_match[v] {
                // matched vertices on the last layer cannot lead to a free vertex in time
                Some(_) if self.dy[v] == self.dis => continue,
                Some(w) => {
                    via.push(v);
                    stack.push((w, 0));
                }
                None => {
                    let mut v = v;
                    while let Some((u, _)) = stack.pop() {
                        self.x_match[u] = Some(v);
                        self.y_match[v] = Some(u);
                        if let Some(prev) = via.pop() {
                            v = prev;
                        }
                    }
                    return true;
                }
            }
        }

        false
    }
}
