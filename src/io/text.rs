//! # Text
//!
//! Renders a graph as a short, id-sorted listing of its vertices and edges.
//!
//! ```
//! use lgraphs::{prelude::*, io::*};
//!
//! let mut g = DiGraph::new();
//! g.add_vertices([Vertex::with_data(1, "a"), Vertex::with_data(2, "b")]);
//! g.add_edge(Edge::weighted(5, 1, 2, 3));
//!
//! let text = TextWriter::new().show_weights(true).display_with_payloads(&g).to_string();
//! assert_eq!(
//!     text,
//!     "Graph<2 vertices, 1 edges>\nvertices:\n [vertex<1: a>, vertex<2: b>]\nedges:\n [edge<5: 1 -> 2 (3)>]"
//! );
//! ```
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use super::*;

/// A writer for the text format
#[derive(Debug, Clone, Copy, Default)]
pub struct TextWriter {
    /// Append weights that differ from [`DEFAULT_WEIGHT`]
    show_weights: bool,
}

impl TextWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, edges whose weight differs from [`DEFAULT_WEIGHT`] are rendered with their
    /// weight in parentheses
    pub fn show_weights(mut self, show_weights: bool) -> Self {
        self.show_weights = show_weights;
        self
    }

    /// Adapts `graph` for formatting with this configuration; vertices render as `vertex<id>`
    pub fn display<'a, G: GraphRead>(&self, graph: &'a G) -> GraphDisplay<'a, G> {
        GraphDisplay {
            graph,
            show_weights: self.show_weights,
        }
    }

    /// Adapts `graph` for formatting with this configuration; vertices render as
    /// `vertex<id: payload>`
    pub fn display_with_payloads<'a, D, Dir>(
        &self,
        graph: &'a Graph<D, Dir>,
    ) -> PayloadDisplay<'a, D, Dir>
    where
        D: Display,
        Dir: EdgeSemantics,
    {
        PayloadDisplay {
            graph,
            show_weights: self.show_weights,
        }
    }

    /// Writes `graph` to `writer`
    pub fn write_graph<W, G>(&self, mut writer: W, graph: &G) -> Result<()>
    where
        W: Write,
        G: GraphRead,
    {
        writeln!(writer, "{}", self.display(graph))
    }

    /// Writes `graph` including vertex payloads to `writer`
    pub fn write_graph_with_payloads<W, D, Dir>(
        &self,
        mut writer: W,
        graph: &Graph<D, Dir>,
    ) -> Result<()>
    where
        W: Write,
        D: Display,
        Dir: EdgeSemantics,
    {
        writeln!(writer, "{}", self.display_with_payloads(graph))
    }
}

/// Formats a graph in the text format without vertex payloads.
/// Created by [`TextWriter::display`] or [`GraphDisplay::new`].
pub struct GraphDisplay<'a, G> {
    graph: &'a G,
    show_weights: bool,
}

impl<'a, G: GraphRead> GraphDisplay<'a, G> {
    /// Adapts `graph` with default settings
    pub fn new(graph: &'a G) -> Self {
        TextWriter::default().display(graph)
    }
}

impl<G: GraphRead> Display for GraphDisplay<'_, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let vertices = self
            .graph
            .sorted_vertex_ids()
            .into_iter()
            .map(|u| format!("vertex<{u}>"));
        write_listing(f, self.graph, vertices, self.show_weights)
    }
}

/// Formats a graph in the text format including vertex payloads.
/// Created by [`TextWriter::display_with_payloads`].
pub struct PayloadDisplay<'a, D, Dir: EdgeSemantics> {
    graph: &'a Graph<D, Dir>,
    show_weights: bool,
}

impl<D: Display, Dir: EdgeSemantics> Display for PayloadDisplay<'_, D, Dir> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let vertices = self
            .graph
            .vertices()
            .sorted_by_key(|v| v.id())
            .map(|v| format!("vertex<{}: {}>", v.id(), v.data()));
        write_listing(f, self.graph, vertices, self.show_weights)
    }
}

fn write_listing<G, I>(
    f: &mut Formatter<'_>,
    graph: &G,
    vertices: I,
    show_weights: bool,
) -> fmt::Result
where
    G: GraphRead,
    I: Iterator<Item = String>,
{
    let edges = graph.all_edges().sorted_by_key(|e| e.id).map(|e| {
        if show_weights {
            format!("{e:?}")
        } else {
            e.to_string()
        }
    });

    writeln!(
        f,
        "Graph<{} vertices, {} edges>",
        graph.number_of_vertices(),
        graph.number_of_edges()
    )?;
    writeln!(f, "vertices:\n [{}]", vertices.format(", "))?;
    write!(f, "edges:\n [{}]", edges.format(", "))
}
