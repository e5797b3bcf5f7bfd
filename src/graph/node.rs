//! A single vertex: its label and outgoing adjacency.

use std::collections::HashSet;

use crate::types::Label;

use super::Adjacency;

/// A vertex and the labels it points to.
///
/// A node never lists itself as a neighbor.
#[derive(Debug, Clone)]
pub struct Node<L, A = HashSet<L>> {
    label: L,
    adjacency: A,
}

impl<L: Label, A: Adjacency<L>> Node<L, A> {
    /// Create a node with no outgoing connections.
    pub fn new(label: L) -> Self {
        Self {
            label,
            adjacency: A::default(),
        }
    }

    /// Create a node from an existing collection of neighbors.
    /// Duplicates collapse and any reference to `label` itself is dropped.
    pub fn with_neighbors<I>(label: L, neighbors: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        let mut node = Self::new(label);
        for neighbor in neighbors {
            node.connect(neighbor);
        }
        node
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Add an outgoing connection. Returns `false` for a self-reference or an
    /// existing connection, leaving the node unchanged.
    pub fn connect(&mut self, to: L) -> bool {
        if to == self.label {
            return false;
        }
        self.adjacency.insert(to)
    }

    /// Drop an outgoing connection. Returns `false` if it was not present.
    pub fn disconnect(&mut self, to: &L) -> bool {
        self.adjacency.remove(to)
    }

    pub fn is_connected_to(&self, to: &L) -> bool {
        self.adjacency.contains(to)
    }

    /// Number of outgoing connections.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Borrowed view of the outgoing connections.
    pub fn neighbors(&self) -> A::Iter<'_> {
        self.adjacency.iter()
    }

    /// Owned copy of the adjacency set.
    pub fn snapshot(&self) -> A {
        self.adjacency.clone()
    }
}
