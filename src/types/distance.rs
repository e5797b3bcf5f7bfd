//! Shortest-path distance values.

use serde::Serialize;

/// A hop count between two vertices, or the reason there isn't one.
///
/// `Unknown` only appears in memo lookups for a source that has not been
/// swept yet. Public queries resolve it before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "hops", rename_all = "snake_case")]
pub enum Distance {
    /// Not computed yet.
    Unknown,
    /// Both vertices exist but no directed path joins them.
    Unreachable,
    /// Length of the shortest path, in edges.
    Computed(usize),
}

impl Distance {
    /// The hop count, if one was computed.
    pub fn hops(&self) -> Option<usize> {
        match self {
            Self::Computed(n) => Some(*n),
            Self::Unknown | Self::Unreachable => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Unreachable => write!(f, "unreachable"),
            Self::Computed(n) => write!(f, "{n}"),
        }
    }
}
