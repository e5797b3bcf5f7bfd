//! Fluent API for building Graph instances.

use std::collections::HashSet;

use crate::types::{Edge, GraphResult, Label};

use super::{Adjacency, Graph};

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes and edges are applied in the order they were given when
/// [`GraphBuilder::build`] runs; the first rejected label aborts the build.
pub struct GraphBuilder<L, A = HashSet<L>> {
    nodes: Vec<L>,
    edges: Vec<Edge<L>>,
    graph: Graph<L, A>,
}

impl<L: Label> GraphBuilder<L> {
    /// Create a new builder producing hashed adjacency sets.
    pub fn new() -> Self {
        Self::on(Graph::new())
    }
}

impl<L: Label, A: Adjacency<L>> GraphBuilder<L, A> {
    /// Start from an existing graph, e.g. one with a different adjacency container.
    pub fn on(graph: Graph<L, A>) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            graph,
        }
    }

    /// Add an isolated node.
    pub fn node(mut self, label: L) -> Self {
        self.nodes.push(label);
        self
    }

    /// Add several isolated nodes.
    pub fn nodes<I: IntoIterator<Item = L>>(mut self, labels: I) -> Self {
        self.nodes.extend(labels);
        self
    }

    /// Add a directed edge.
    pub fn edge(mut self, from: L, to: L) -> Self {
        self.edges.push(Edge::new(from, to));
        self
    }

    /// Add both directions of an edge.
    pub fn undirected(mut self, a: L, b: L) -> Self {
        let edge = Edge::new(a, b);
        self.edges.push(edge.reversed());
        self.edges.push(edge);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<L, A>> {
        let mut graph = self.graph;
        for label in self.nodes {
            graph.add_node(label)?;
        }
        for edge in self.edges {
            graph.insert_edge(edge)?;
        }
        Ok(graph)
    }
}

impl<L: Label> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
