/*!
# Graph Algorithms

This module provides the **graph algorithms** of this crate, written against the traits in
[`ops`](crate::ops). All algorithms are re-exported at the top level of this module, so you
can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversal, articulation points, bipartiteness, matching, subgraphs and
edge toggling as methods on the graph itself.

Algorithms never modify the graph they run on (except [`EdgeToggle`]) and report a broken
graph (eg. an edge pointing to a vertex that is not stored) as
[`GraphError::Inconsistent`] instead of returning a partial result.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod bipartite;
mod matching;
mod subgraph;
mod toggle;
mod traversal;
mod vertex_cuts;

use crate::{prelude::*, utils::*};

pub use bipartite::*;
pub use matching::*;
pub use subgraph::*;
pub use toggle::*;
pub use traversal::*;
pub use vertex_cuts::*;
