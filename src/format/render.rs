//! Plain-text rendering of graphs.
//!
//! Each node becomes one line, `label: { a, b, c }`, or `label: { }` when it
//! has no outgoing edges. Nothing here performs I/O.

use std::fmt;

use crate::graph::{Adjacency, Graph, Node};
use crate::types::Label;

fn write_line<'a, W, L, I>(out: &mut W, label: &L, neighbors: I) -> fmt::Result
where
    W: fmt::Write,
    L: Label + 'a,
    I: IntoIterator<Item = &'a L>,
{
    write!(out, "{label}: {{")?;
    let mut first = true;
    for neighbor in neighbors {
        let sep = if first { " " } else { ", " };
        write!(out, "{sep}{neighbor}")?;
        first = false;
    }
    out.write_str(" }")
}

/// Graph view listing labels and neighbors in ascending order.
struct Sorted<'g, L, A>(&'g Graph<L, A>);

impl<L, A> fmt::Display for Sorted<'_, L, A>
where
    L: Label + Ord,
    A: Adjacency<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes: Vec<&Node<L, A>> = self.0.nodes().collect();
        nodes.sort_by(|a, b| a.label().cmp(b.label()));

        for node in nodes {
            let mut neighbors: Vec<&L> = node.neighbors().collect();
            neighbors.sort();
            write_line(f, node.label(), neighbors)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Render a single node, without a trailing newline.
pub fn render_node<L: Label, A: Adjacency<L>>(node: &Node<L, A>) -> String {
    node.to_string()
}

/// Render every node in enumeration order.
pub fn render_graph<L: Label, A: Adjacency<L>>(graph: &Graph<L, A>) -> String {
    graph.to_string()
}

/// Render every node with labels and neighbors in ascending order.
pub fn render_graph_sorted<L, A>(graph: &Graph<L, A>) -> String
where
    L: Label + Ord,
    A: Adjacency<L>,
{
    Sorted(graph).to_string()
}

/// Render with a `Network:` heading.
pub fn render_network<L: Label, A: Adjacency<L>>(graph: &Graph<L, A>) -> String {
    format!("Network:\n{graph}")
}

impl<L: Label, A: Adjacency<L>> fmt::Display for Node<L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, self.label(), self.neighbors())
    }
}

impl<L: Label, A: Adjacency<L>> fmt::Display for Graph<L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}
