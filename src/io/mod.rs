/*!
# IO

Human-readable rendering of graphs for debugging and logging.

The [`text`] format lists the vertices and edges of a graph sorted by id:
```text
Graph<3 vertices, 2 edges>
vertices:
 [vertex<1>, vertex<2>, vertex<3>]
edges:
 [edge<1: 1 -> 2>, edge<2: 2 -> 3>]
```
It is meant to be read by humans and is not a stable interchange format; there is no parser.

## Traits

- [`TextWrite`] writes a graph in the text format with default settings.
- [`TextWriter`] is the configurable writer behind it, and [`GraphDisplay`] adapts a graph
  for use with `format!` and friends.
*/

pub mod text;

use std::io::{Result, Write};

use crate::prelude::*;

pub use text::*;

/// Trait for writing a graph to a writer in the text format.
/// Shorthand for default settings.
pub trait TextWrite {
    /// Tries to write the graph to a writer
    fn try_write_text<W>(&self, writer: W) -> Result<()>
    where
        W: Write;
}

impl<G> TextWrite for G
where
    G: GraphRead,
{
    fn try_write_text<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        TextWriter::default().write_graph(writer, self)
    }
}
