//! Core graph structure: labels mapped to nodes with outgoing adjacency.

use std::collections::{hash_map, HashMap, HashSet};

use crate::types::label::validate;
use crate::types::{Edge, GraphError, GraphResult, Label};

use super::{Adjacency, Node};

/// A directed graph addressed by label.
///
/// Every label mentioned in an adjacency set names a node in the graph, and
/// no node lists itself. `version` increases on every structural change so
/// that derived data (such as cached distances) can tell when it is stale.
#[derive(Debug, Clone)]
pub struct Graph<L, A = HashSet<L>> {
    nodes: HashMap<L, Node<L, A>>,
    version: u64,
}

impl<L: Label> Graph<L> {
    /// Create a new empty graph with hashed adjacency sets.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: Label, A: Adjacency<L>> Graph<L, A> {
    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    /// Structural mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Add a node with no connections. Returns `false` if it already existed.
    pub fn add_node(&mut self, label: L) -> GraphResult<bool> {
        validate(&label)?;
        Ok(self.insert_node(label))
    }

    fn insert_node(&mut self, label: L) -> bool {
        match self.nodes.entry(label) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                let node = Node::new(slot.key().clone());
                slot.insert(node);
                self.version += 1;
                true
            }
        }
    }

    /// Add the edge `from -> to`, creating either endpoint if missing.
    ///
    /// Self-loops and existing edges are accepted and change nothing beyond
    /// endpoint creation. Returns whether a new edge was recorded.
    pub fn add_edge(&mut self, from: L, to: L) -> GraphResult<bool> {
        validate(&from)?;
        validate(&to)?;

        self.insert_node(from.clone());
        self.insert_node(to.clone());

        let inserted = match self.nodes.get_mut(&from) {
            Some(node) => node.connect(to),
            None => return Err(GraphError::node_not_found(&from)),
        };
        if inserted {
            self.version += 1;
        }
        Ok(inserted)
    }

    /// Add an edge given by value.
    pub fn insert_edge(&mut self, edge: Edge<L>) -> GraphResult<bool> {
        self.add_edge(edge.from, edge.to)
    }

    /// Remove a node and every edge pointing at it.
    pub fn remove_node(&mut self, label: &L) -> GraphResult<Node<L, A>> {
        validate(label)?;
        let removed = self
            .nodes
            .remove(label)
            .ok_or_else(|| GraphError::node_not_found(label))?;

        let mut dangling = 0usize;
        for node in self.nodes.values_mut() {
            if node.disconnect(label) {
                dangling += 1;
            }
        }
        self.version += 1;

        log::debug!(
            "removed node {label}: {} outgoing, {dangling} incoming edges dropped",
            removed.degree()
        );
        Ok(removed)
    }

    /// Remove the edge `from -> to`.
    pub fn remove_edge(&mut self, from: &L, to: &L) -> GraphResult<()> {
        validate(from)?;
        validate(to)?;
        let node = self
            .nodes
            .get_mut(from)
            .ok_or_else(|| GraphError::node_not_found(from))?;
        if !node.disconnect(to) {
            return Err(GraphError::edge_not_found(from, to));
        }
        self.version += 1;
        Ok(())
    }

    pub fn contains_node(&self, label: &L) -> GraphResult<bool> {
        validate(label)?;
        Ok(self.nodes.contains_key(label))
    }

    /// Whether the edge `from -> to` exists. Absent endpoints simply yield `false`.
    pub fn contains_edge(&self, from: &L, to: &L) -> GraphResult<bool> {
        validate(from)?;
        validate(to)?;
        Ok(self
            .nodes
            .get(from)
            .is_some_and(|node| node.is_connected_to(to)))
    }

    /// Owned copy of a node's outgoing adjacency.
    pub fn get_adjacency(&self, label: &L) -> GraphResult<A> {
        self.node(label).map(Node::snapshot)
    }

    /// Borrowed iterator over a node's outgoing adjacency.
    pub fn neighbors(&self, label: &L) -> GraphResult<A::Iter<'_>> {
        self.node(label).map(Node::neighbors)
    }

    /// Get a node by label.
    pub fn node(&self, label: &L) -> GraphResult<&Node<L, A>> {
        validate(label)?;
        self.nodes
            .get(label)
            .ok_or_else(|| GraphError::node_not_found(label))
    }

    /// Every label currently present, each exactly once, in no particular order.
    pub fn labels(&self) -> hash_map::Keys<'_, L, Node<L, A>> {
        self.nodes.keys()
    }

    /// Every node currently present, in no particular order.
    pub fn nodes(&self) -> hash_map::Values<'_, L, Node<L, A>> {
        self.nodes.values()
    }

    /// Every edge currently present, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<L>> + '_ {
        self.nodes.values().flat_map(|node| {
            node.neighbors()
                .map(move |to| Edge::new(node.label().clone(), to.clone()))
        })
    }
}

impl<L: Label, A: Adjacency<L>> Default for Graph<L, A> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            version: 0,
        }
    }
}

impl<L: Label, A: Adjacency<L>> Extend<Edge<L>> for Graph<L, A> {
    /// Blank endpoints are skipped with a warning.
    fn extend<I: IntoIterator<Item = Edge<L>>>(&mut self, edges: I) {
        for edge in edges {
            if let Err(e) = self.insert_edge(edge) {
                log::warn!("skipping edge: {e}");
            }
        }
    }
}
