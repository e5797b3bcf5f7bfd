//! The directed edge value type.

use serde::Serialize;

use super::Label;

/// A directed connection `from -> to` between two labels.
///
/// Edges are not stored: a graph records them as adjacency-set membership.
/// This type exists for callers that want to pass connections around by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<L> {
    /// Origin of the connection.
    pub from: L,
    /// Destination of the connection.
    pub to: L,
}

impl<L: Label> Edge<L> {
    /// Create a new edge.
    pub fn new(from: L, to: L) -> Self {
        Self { from, to }
    }

    /// The same connection pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl<L: Label> From<(L, L)> for Edge<L> {
    fn from((from, to): (L, L)) -> Self {
        Self::new(from, to)
    }
}

impl<L: Label> std::fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
